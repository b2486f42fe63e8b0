use std::sync::Arc;

use async_trait::async_trait;
use storage::{Storage, StorageError, StudySetRepository};
use study_core::model::{StudySet, StudySetId};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_empty_personal_sets() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Welcome Back."), "missing heading in {html}");
    assert!(
        html.contains("No personal sets yet"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn curriculum_smoke_lists_units() {
    let mut harness = setup_view_harness(ViewKind::Curriculum);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Unit 4: Social Approach"), "missing unit in {html}");
    assert!(
        html.contains("Milgram (1963) Obedience"),
        "missing official set in {html}"
    );
    assert!(
        html.contains("No resources uploaded for this unit yet."),
        "missing empty unit in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn study_smoke_renders_note_reader() {
    let mut harness = setup_view_harness(ViewKind::Study("p1".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Canli et al. Study Guide"), "missing title in {html}");
    assert!(html.contains("Back"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_smoke_reports_missing_set() {
    let mut harness = setup_view_harness(ViewKind::Study("nope".into()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("That study set no longer exists."),
        "missing not-found message in {html}"
    );
}

struct FailingRepo;

#[async_trait]
impl StudySetRepository for FailingRepo {
    async fn upsert_set(&self, _set: &StudySet) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_set(&self, _id: &StudySetId) -> Result<Option<StudySet>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_sets(&self) -> Result<Vec<StudySet>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn delete_set(&self, _id: &StudySetId) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_error_state() {
    let storage = Storage {
        sets: Arc::new(FailingRepo),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Dashboard, storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
