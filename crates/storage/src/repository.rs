use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use study_core::model::{Category, StudySet, StudySetId};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for library resources.
#[async_trait]
pub trait StudySetRepository: Send + Sync {
    /// Persist a set. New sets go to the front of the listing; an existing id
    /// is replaced in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be stored.
    async fn upsert_set(&self, set: &StudySet) -> Result<(), StorageError>;

    /// Fetch a set by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures; a missing set is `Ok(None)`.
    async fn get_set(&self, id: &StudySetId) -> Result<Option<StudySet>, StorageError>;

    /// All sets, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_sets(&self) -> Result<Vec<StudySet>, StorageError>;

    /// Sets in one category, most recently added first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_by_category(&self, category: Category) -> Result<Vec<StudySet>, StorageError> {
        let mut sets = self.list_sets().await?;
        sets.retain(|set| set.category() == category);
        Ok(sets)
    }

    /// Remove a set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no set has this id.
    async fn delete_set(&self, id: &StudySetId) -> Result<(), StorageError>;
}

/// Session-lifetime repository; the library only lives as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sets: Arc<Mutex<Vec<StudySet>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `sets`, listed in the given order.
    #[must_use]
    pub fn with_sets(sets: Vec<StudySet>) -> Self {
        Self {
            sets: Arc::new(Mutex::new(sets)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<StudySet>>, StorageError> {
        self.sets
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl StudySetRepository for InMemoryRepository {
    async fn upsert_set(&self, set: &StudySet) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        match guard.iter().position(|existing| existing.id() == set.id()) {
            Some(index) => guard[index] = set.clone(),
            None => guard.insert(0, set.clone()),
        }
        Ok(())
    }

    async fn get_set(&self, id: &StudySetId) -> Result<Option<StudySet>, StorageError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|set| set.id() == id).cloned())
    }

    async fn list_sets(&self) -> Result<Vec<StudySet>, StorageError> {
        Ok(self.lock()?.clone())
    }

    async fn delete_set(&self, id: &StudySetId) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|set| set.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sets: Arc<dyn StudySetRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            sets: Arc::new(InMemoryRepository::new()),
        }
    }

    /// In-memory storage holding the built-in course library.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a built-in set fails validation.
    pub fn seeded(now: DateTime<Utc>) -> Result<Self, study_core::Error> {
        let sets = crate::seed::library(now)?;
        tracing::debug!(count = sets.len(), "seeded in-memory library");
        Ok(Self {
            sets: Arc::new(InMemoryRepository::with_sets(sets)),
        })
    }
}
