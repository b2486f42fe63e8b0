use services::{CreationRequest, InlineAttachment, ManualContent, ManualSetInput};
use study_core::model::{CardDraft, CurriculumUnit, ResourceType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreateMode {
    #[default]
    Ai,
    Manual,
}

/// Everything typed into the create page, independent of the widgets showing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateForm {
    pub mode: CreateMode,
    pub kind: ResourceType,
    pub unit: CurriculumUnit,
    pub text: String,
    pub title: String,
    pub rows: Vec<CardDraft>,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            mode: CreateMode::Ai,
            kind: ResourceType::Flashcard,
            unit: CurriculumUnit::default(),
            text: String::new(),
            title: String::new(),
            rows: vec![CardDraft::default()],
        }
    }
}

impl CreateForm {
    /// Resource kinds offered for the current mode. Podcasts need the generator.
    #[must_use]
    pub fn kinds(&self) -> &'static [ResourceType] {
        match self.mode {
            CreateMode::Ai => &[
                ResourceType::Flashcard,
                ResourceType::Note,
                ResourceType::Podcast,
            ],
            CreateMode::Manual => &[ResourceType::Flashcard, ResourceType::Note],
        }
    }

    pub fn set_mode(&mut self, mode: CreateMode) {
        self.mode = mode;
        if !self.kinds().contains(&self.kind) {
            self.kind = ResourceType::Flashcard;
        }
    }

    #[must_use]
    pub fn can_generate(&self, has_attachment: bool, is_generating: bool) -> bool {
        !is_generating && (!self.text.trim().is_empty() || has_attachment)
    }

    pub fn add_row(&mut self) {
        self.rows.push(CardDraft::default());
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn set_term(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.term = value;
        }
    }

    pub fn set_definition(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.definition = value;
        }
    }

    #[must_use]
    pub fn manual_input(&self) -> ManualSetInput {
        let content = match self.kind {
            ResourceType::Flashcard => ManualContent::Flashcards(self.rows.clone()),
            _ => ManualContent::Note(self.text.clone()),
        };
        ManualSetInput {
            title: self.title.clone(),
            unit: Some(self.unit),
            content,
        }
    }

    #[must_use]
    pub fn creation_request(&self, attachment: Option<InlineAttachment>) -> CreationRequest {
        let request = CreationRequest::new(self.kind, self.text.clone()).with_unit(self.unit);
        match attachment {
            Some(attachment) => request.with_attachment(attachment),
            None => request,
        }
    }

    #[must_use]
    pub fn save_label(&self) -> &'static str {
        if self.kind == ResourceType::Flashcard {
            "Save Set"
        } else {
            "Save Note"
        }
    }

    /// Clear typed content after a successful save, keeping mode, kind and unit.
    pub fn reset_content(&mut self) {
        self.text.clear();
        self.title.clear();
        self.rows = vec![CardDraft::default()];
    }
}

#[must_use]
pub fn kind_label(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Flashcard => "Flashcards",
        ResourceType::Note => "Note",
        ResourceType::Podcast => "Podcast",
        ResourceType::Video => "Video",
    }
}
