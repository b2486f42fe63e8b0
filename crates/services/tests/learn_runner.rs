use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{LearnService, LearnState, LibraryService, QuizRunner};
use storage::Storage;
use study_core::model::{Card, StudySetId};
use study_core::quiz::QuizPhase;
use study_core::time::{fixed_clock, fixed_now};
use tokio::runtime::Handle;

const DELAY: Duration = Duration::from_millis(1500);

fn research_cards() -> Vec<Card> {
    storage::seed::library(fixed_now())
        .unwrap()
        .into_iter()
        .find(|set| set.id().as_str() == "c3")
        .unwrap()
        .cards()
        .to_vec()
}

fn runner() -> QuizRunner {
    QuizRunner::with_rng(DELAY, Handle::current(), StdRng::seed_from_u64(5))
}

fn running(runner: &QuizRunner) -> study_core::quiz::QuizSession {
    match runner.snapshot() {
        LearnState::Running(session) => session,
        other => panic!("expected running session, got {other:?}"),
    }
}

fn answer_correctly(runner: &QuizRunner) {
    let session = running(runner);
    let answer = session
        .current_question()
        .unwrap()
        .correct_definition()
        .to_owned();
    runner.submit(&answer);
}

#[tokio::test(start_paused = true)]
async fn full_quiz_finishes_with_perfect_score() {
    let runner = runner();
    runner.start(&research_cards()).unwrap();

    for _ in 0..4 {
        answer_correctly(&runner);
        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    }

    assert_eq!(
        running(&runner).phase(),
        &QuizPhase::Finished { score: 4, total: 4 }
    );
}

#[tokio::test(start_paused = true)]
async fn double_submit_counts_once() {
    let runner = runner();
    runner.start(&research_cards()).unwrap();

    answer_correctly(&runner);
    let first = running(&runner);
    answer_correctly(&runner);
    runner.submit("something else");

    assert_eq!(running(&runner), first);
    assert_eq!(first.score(), 1);
}

#[tokio::test(start_paused = true)]
async fn restart_during_reveal_cancels_pending_advance() {
    let runner = runner();
    runner.start(&research_cards()).unwrap();

    answer_correctly(&runner);
    let revealed = running(&runner);
    runner.restart();
    let restarted = running(&runner);
    assert_ne!(restarted.token(), revealed.token());

    tokio::time::sleep(DELAY * 2).await;
    let after = running(&runner);
    assert_eq!(after.token(), restarted.token());
    assert_eq!(after.phase(), &QuizPhase::AwaitingAnswer { index: 0 });
    assert_eq!(after.score(), 0);
}

#[tokio::test(start_paused = true)]
async fn answer_stays_visible_until_delay_elapses() {
    let runner = runner();
    runner.start(&research_cards()).unwrap();
    answer_correctly(&runner);

    tokio::time::sleep(DELAY - Duration::from_millis(100)).await;
    assert!(matches!(
        running(&runner).phase(),
        QuizPhase::Revealed { index: 0, .. }
    ));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(
        running(&runner).phase(),
        &QuizPhase::AwaitingAnswer { index: 1 }
    );
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_transition() {
    let runner = runner();
    let mut updates = runner.subscribe();
    runner.start(&research_cards()).unwrap();
    assert!(updates.has_changed().unwrap());
    let _ = updates.borrow_and_update();

    answer_correctly(&runner);
    updates.changed().await.unwrap();
    let _ = updates.borrow_and_update();

    updates.changed().await.unwrap();
    let LearnState::Running(session) = updates.borrow_and_update().clone() else {
        panic!("expected running session");
    };
    assert_eq!(session.current_index(), Some(1));
}

#[tokio::test]
async fn learn_service_reports_small_sets_as_insufficient() {
    let storage = Storage::seeded(fixed_now()).unwrap();
    let library = LibraryService::new(fixed_clock(), Arc::clone(&storage.sets));
    let learn = LearnService::on_current_runtime(library, DELAY).unwrap();

    let runner = learn.open(&StudySetId::new("c4")).await.unwrap();
    assert_eq!(
        runner.snapshot(),
        LearnState::Insufficient {
            found: 3,
            required: 4
        }
    );

    let runner = learn.open(&StudySetId::new("c3")).await.unwrap();
    assert!(matches!(runner.snapshot(), LearnState::Running(_)));

    assert!(learn.open(&StudySetId::new("missing")).await.is_err());
}
