use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be empty")]
    Empty,
}

/// Non-blank text tagged with the field it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Text<T>(String, #[serde(skip)] PhantomData<T>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term;
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition;
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title;

pub type TermText = Text<Term>;
pub type DefinitionText = Text<Definition>;
pub type TitleText = Text<Title>;

impl<T> Text<T> {
    /// Accepts any text that is not blank. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        let value = if trimmed.len() == s.len() {
            s
        } else {
            trimmed.to_owned()
        };
        Ok(Self(value, PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
