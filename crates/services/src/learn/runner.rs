use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use study_core::model::Card;
use study_core::quiz::{AdvanceTicket, QuizAction, QuizError, QuizSession};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What the learn view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LearnState {
    #[default]
    NotStarted,
    /// The set has too few cards for multiple choice.
    Insufficient { found: usize, required: usize },
    Running(QuizSession),
}

struct Live {
    session: Option<QuizSession>,
    rng: StdRng,
    pending: Option<JoinHandle<()>>,
}

impl Live {
    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

struct Shared {
    live: Mutex<Live>,
    state: watch::Sender<LearnState>,
    delay: Duration,
    runtime: Handle,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Live> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, session: &QuizSession) {
        self.state.send_replace(LearnState::Running(session.clone()));
    }
}

/// Owns the single live quiz session and its pending auto-advance.
///
/// Every submit that reveals an answer schedules one advance on the runtime.
/// Starting, restarting or dropping the runner aborts that task, and a task
/// that fires anyway only advances if its ticket still matches the session.
pub struct QuizRunner {
    shared: Arc<Shared>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self::with_rng(delay, runtime, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(delay: Duration, runtime: Handle, rng: StdRng) -> Self {
        let (state, _) = watch::channel(LearnState::NotStarted);
        Self {
            shared: Arc::new(Shared {
                live: Mutex::new(Live {
                    session: None,
                    rng,
                    pending: None,
                }),
                state,
                delay,
                runtime,
            }),
        }
    }

    /// Replace any live session with a fresh quiz over `cards`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InsufficientCards` when there are fewer than four
    /// cards; the published state becomes [`LearnState::Insufficient`].
    pub fn start(&self, cards: &[Card]) -> Result<(), QuizError> {
        let mut guard = self.shared.lock();
        let live = &mut *guard;
        live.cancel_pending();

        match QuizSession::start(cards, &mut live.rng) {
            Ok(session) => {
                tracing::debug!(token = ?session.token(), total = session.total(), "quiz started");
                self.shared.publish(&session);
                live.session = Some(session);
                Ok(())
            }
            Err(err) => {
                live.session = None;
                let state = match &err {
                    QuizError::InsufficientCards { found, required } => LearnState::Insufficient {
                        found: *found,
                        required: *required,
                    },
                    _ => LearnState::NotStarted,
                };
                self.shared.state.send_replace(state);
                Err(err)
            }
        }
    }

    /// Answer the current question. Ignored while an answer is already shown.
    pub fn submit(&self, option: &str) {
        let mut guard = self.shared.lock();
        let live = &mut *guard;
        let Some(session) = live.session.take() else {
            return;
        };

        let before = session.pending_advance();
        let session = session.reduce(QuizAction::Submit(option.to_owned()), &mut live.rng);
        let after = session.pending_advance();
        self.shared.publish(&session);
        live.session = Some(session);

        if let (None, Some(ticket)) = (before, after) {
            live.cancel_pending();
            live.pending = Some(self.schedule(ticket));
        }
    }

    /// Reshuffle the current questions and begin again with a new session token.
    pub fn restart(&self) {
        let mut guard = self.shared.lock();
        let live = &mut *guard;
        let Some(session) = live.session.take() else {
            return;
        };

        live.cancel_pending();
        let session = session.reduce(QuizAction::Restart, &mut live.rng);
        tracing::debug!(token = ?session.token(), "quiz restarted");
        self.shared.publish(&session);
        live.session = Some(session);
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LearnState> {
        self.shared.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> LearnState {
        self.shared.state.borrow().clone()
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.shared.delay
    }

    fn schedule(&self, ticket: AdvanceTicket) -> JoinHandle<()> {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let delay = self.shared.delay;
        self.shared.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut guard = shared.lock();
            let live = &mut *guard;
            let Some(session) = live.session.take() else {
                return;
            };
            let session = session.reduce(QuizAction::Advance(ticket), &mut live.rng);
            shared.publish(&session);
            live.session = Some(session);
            live.pending = None;
        })
    }
}

impl Drop for QuizRunner {
    fn drop(&mut self) {
        self.shared.lock().cancel_pending();
    }
}
