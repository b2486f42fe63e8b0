use study_core::flip::FlipReview;
use study_core::model::Card;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipCardVm {
    pub position_label: String,
    pub face_text: String,
    pub is_revealed: bool,
    pub hint: Option<&'static str>,
}

/// The face currently shown. `None` only if `review` was built for another card list.
#[must_use]
pub fn map_flip_card(review: &FlipReview, cards: &[Card]) -> Option<FlipCardVm> {
    let card = review.current(cards)?;
    let is_revealed = review.is_revealed();
    let (face_text, hint) = if is_revealed {
        (card.definition().to_string(), None)
    } else {
        (card.term().to_string(), Some("Tap to flip"))
    };

    Some(FlipCardVm {
        position_label: review.label(),
        face_text,
        is_revealed,
        hint,
    })
}
