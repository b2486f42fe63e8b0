use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a Card.
///
/// Card ids are opaque strings: seeded cards use short labels (`"m1"`),
/// generated cards use `gen-<millis>-<index>`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a new `CardId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the `index`-th card of an AI generation batch started at `millis`.
    #[must_use]
    pub fn generated(millis: i64, index: usize) -> Self {
        Self(format!("gen-{millis}-{index}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a StudySet
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudySetId(String);

impl StudySetId {
    /// Creates a new `StudySetId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id with a short origin prefix (`man`, `ai`, ...).
    #[must_use]
    pub fn random(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity of one live quiz session.
///
/// A new token is issued on every start and restart, so work scheduled
/// against an older session can recognise that it is stale.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Debug for StudySetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudySetId({})", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.0.simple())
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StudySetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cannot be blank", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CardId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseIdError { kind: "CardId" });
        }
        Ok(CardId::new(s))
    }
}

impl FromStr for StudySetId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseIdError { kind: "StudySetId" });
        }
        Ok(StudySetId::new(s))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_card_id_encodes_batch_and_index() {
        let id = CardId::generated(1_700_000_000_000, 3);
        assert_eq!(id.to_string(), "gen-1700000000000-3");
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!("   ".parse::<CardId>().is_err());
        assert!("".parse::<StudySetId>().is_err());
    }

    #[test]
    fn set_id_from_str_trims() {
        let id: StudySetId = " c3 ".parse().unwrap();
        assert_eq!(id, StudySetId::new("c3"));
    }

    #[test]
    fn random_set_ids_keep_prefix_and_differ() {
        let a = StudySetId::random("man");
        let b = StudySetId::random("man");
        assert!(a.as_str().starts_with("man-"));
        assert_ne!(a, b);
    }

    #[test]
    fn session_tokens_are_unique() {
        assert_ne!(SessionToken::fresh(), SessionToken::fresh());
    }
}
