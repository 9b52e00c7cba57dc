//! One game per websocket connection.
//!
//! A session task owns its [`GameState`] and applies events one at a time.
//! Player input comes in through the [`SessionHandle`]; timer ticks and
//! dictionary answers come back through an internal queue, tagged with the
//! game generation they were issued for.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::{self, error::SendError},
    task::JoinHandle,
    time::Instant,
};
use uuid::Uuid;

use crate::{
    config::GameConfig,
    dictionary::{DictionaryError, DictionaryLookup},
    game::{ClockPhase, GameState, ResolveOutcome, SubmitOutcome},
    websocket::messages::ServerMessage,
};

const EVENT_QUEUE_SIZE: usize = 64;

/// Something that happened to a session
#[derive(Debug)]
pub enum SessionEvent {
    AttemptChanged(String),
    Submit(String),
    StartNewGame,
    Tick {
        generation: u64,
    },
    LookupResolved {
        generation: u64,
        word: String,
        result: Result<bool, DictionaryError>,
    },
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub duration_secs: u32,
    pub tick_interval: Duration,
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            duration_secs: config.duration_secs,
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Input side of a running session. Dropping it ends the session.
pub struct SessionHandle {
    pub id: Uuid,
    pub events: mpsc::Sender<SessionEvent>,
}

impl SessionHandle {
    pub async fn send(&self, event: SessionEvent) -> Result<(), SendError<SessionEvent>> {
        self.events.send(event).await
    }
}

/// Start a session task. Every state change is rendered to `renders`.
pub fn spawn(
    settings: SessionSettings,
    dictionary: Arc<dyn DictionaryLookup>,
    renders: mpsc::Sender<ServerMessage>,
) -> SessionHandle {
    let id = Uuid::new_v4();
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (internal_tx, internal_rx) = mpsc::channel(EVENT_QUEUE_SIZE);

    let session = GameSession {
        id,
        state: GameState::new(settings.duration_secs),
        tick_interval: settings.tick_interval,
        dictionary,
        internal_tx,
        renders,
        timer: None,
    };
    tokio::spawn(session.run(events_rx, internal_rx));

    SessionHandle {
        id,
        events: events_tx,
    }
}

struct GameSession {
    id: Uuid,
    state: GameState,
    tick_interval: Duration,
    dictionary: Arc<dyn DictionaryLookup>,
    /// Handed to timer and lookup tasks so they can report back
    internal_tx: mpsc::Sender<SessionEvent>,
    renders: mpsc::Sender<ServerMessage>,
    timer: Option<JoinHandle<()>>,
}

impl GameSession {
    async fn run(
        mut self,
        mut inputs: mpsc::Receiver<SessionEvent>,
        mut internal: mpsc::Receiver<SessionEvent>,
    ) {
        tracing::debug!("Session {} started", self.id);

        if self.render().await.is_ok() {
            loop {
                let event = tokio::select! {
                    event = inputs.recv() => match event {
                        Some(event) => event,
                        None => break,
                    },
                    Some(event) = internal.recv() => event,
                };

                if self.handle_event(event).await.is_err() {
                    // Nobody is listening for renders any more
                    break;
                }
            }
        }

        self.stop_timer();
        tracing::debug!("Session {} finished", self.id);
    }

    async fn handle_event(&mut self, event: SessionEvent) -> Result<(), SendError<ServerMessage>> {
        match event {
            SessionEvent::AttemptChanged(text) => {
                self.state.set_attempt(&text);
            }
            SessionEvent::Submit(word) => match self.state.submit_word(&word) {
                SubmitOutcome::Accepted => {
                    if let Some(submission) = self.state.submissions().last() {
                        self.spawn_lookup(submission.word.clone());
                    }
                }
                SubmitOutcome::Rejected(reason) => {
                    tracing::debug!("Session {} rejected '{}': {:?}", self.id, word, reason);
                }
            },
            SessionEvent::StartNewGame => {
                self.stop_timer();
                let generation = self.state.start_game(&mut rand::rng());
                tracing::info!(
                    "Session {} started game {} with letters {:?}",
                    self.id,
                    generation,
                    self.state.allowed_letters()
                );
                if self.state.phase() == ClockPhase::Running {
                    self.start_timer(generation);
                }
            }
            SessionEvent::Tick { generation } => {
                if generation != self.state.generation() {
                    return Ok(());
                }
                if self.state.tick() != ClockPhase::Running {
                    tracing::info!(
                        "Session {} game {} over with {} points",
                        self.id,
                        generation,
                        self.state.total_score()
                    );
                    self.stop_timer();
                }
            }
            SessionEvent::LookupResolved {
                generation,
                word,
                result,
            } => match result {
                Ok(is_real_word) => {
                    match self.state.resolve_lookup(generation, &word, is_real_word) {
                        ResolveOutcome::Resolved => {
                            tracing::debug!(
                                "Session {} resolved '{}' as {}",
                                self.id,
                                word,
                                if is_real_word { "real" } else { "not real" }
                            );
                        }
                        outcome => {
                            tracing::debug!(
                                "Session {} dropped answer for '{}': {:?}",
                                self.id,
                                word,
                                outcome
                            );
                            return Ok(());
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Session {} failed to look up '{}': {}", self.id, word, e);
                    return Ok(());
                }
            },
        }

        self.render().await
    }

    async fn render(&self) -> Result<(), SendError<ServerMessage>> {
        self.renders
            .send(ServerMessage::GameState(self.state.snapshot()))
            .await
    }

    fn start_timer(&mut self, generation: u64) {
        let events = self.internal_tx.clone();
        let period = self.tick_interval;

        self.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if events.send(SessionEvent::Tick { generation }).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn spawn_lookup(&self, word: String) {
        let dictionary = self.dictionary.clone();
        let events = self.internal_tx.clone();
        let generation = self.state.generation();

        tokio::spawn(async move {
            let result = dictionary.is_real_word(&word).await;
            let _ = events
                .send(SessionEvent::LookupResolved {
                    generation,
                    word,
                    result,
                })
                .await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSnapshot, SubmissionStatus};
    use async_trait::async_trait;
    use std::{
        collections::HashSet,
        sync::atomic::{AtomicUsize, Ordering},
    };

    /// Knows every word in its set; optionally always fails.
    /// The n-th lookup waits `delays[n]` before answering, if given.
    struct FakeDictionary {
        words: HashSet<String>,
        failing: bool,
        delays: Vec<Duration>,
        calls: AtomicUsize,
    }

    impl FakeDictionary {
        fn new(words: HashSet<String>, failing: bool) -> Self {
            Self {
                words,
                failing,
                delays: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delays(mut self, delays: Vec<Duration>) -> Self {
            self.delays = delays;
            self
        }
    }

    #[async_trait]
    impl DictionaryLookup for FakeDictionary {
        async fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(call) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing {
                return Err(DictionaryError::Io(std::io::Error::other("offline")));
            }
            Ok(self.words.contains(word))
        }
    }

    fn settings(duration_secs: u32) -> SessionSettings {
        SessionSettings {
            duration_secs,
            tick_interval: Duration::from_secs(1),
        }
    }

    fn start_session(
        duration_secs: u32,
        dictionary: FakeDictionary,
    ) -> (SessionHandle, mpsc::Receiver<ServerMessage>) {
        let (tx, rx) = mpsc::channel(256);
        let handle = spawn(settings(duration_secs), Arc::new(dictionary), tx);
        (handle, rx)
    }

    fn knows_all_letters() -> FakeDictionary {
        FakeDictionary::new(('a'..='z').map(|c| c.to_string()).collect(), false)
    }

    /// Wait for the next render that satisfies `check`
    async fn wait_for(
        rx: &mut mpsc::Receiver<ServerMessage>,
        check: impl Fn(&GameSnapshot) -> bool,
    ) -> GameSnapshot {
        let wait = async {
            loop {
                match rx.recv().await {
                    Some(ServerMessage::GameState(snapshot)) if check(&snapshot) => {
                        return snapshot;
                    }
                    Some(_) => continue,
                    None => panic!("session closed its render channel"),
                }
            }
        };
        tokio::time::timeout(Duration::from_secs(600), wait)
            .await
            .expect("timed out waiting for render")
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_render_is_not_started() {
        let (_handle, mut rx) = start_session(60, knows_all_letters());
        let snapshot = wait_for(&mut rx, |_| true).await;
        assert_eq!(snapshot.phase, ClockPhase::NotStarted);
        assert!(!snapshot.accepting_input);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_submit_and_resolve() {
        let (handle, mut rx) = start_session(60, knows_all_letters());

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        let started = wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;
        assert_eq!(started.allowed_letters.len(), 7);
        assert_eq!(started.seconds_remaining, 60);
        assert!(started.submissions.is_empty());

        let tile = started.allowed_letters[0].clone();
        handle
            .send(SessionEvent::Submit(tile.letter.to_string()))
            .await
            .unwrap();

        let resolved = wait_for(&mut rx, |s| {
            s.submissions
                .first()
                .is_some_and(|sub| sub.status == SubmissionStatus::Real)
        })
        .await;
        assert_eq!(resolved.submissions.len(), 1);
        assert_eq!(resolved.submissions[0].score, Some(tile.score));
        assert_eq!(resolved.score, tile.score);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_word_is_not_real() {
        let dictionary = FakeDictionary::new(HashSet::new(), false);
        let (handle, mut rx) = start_session(60, dictionary);

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        let started = wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;
        let word: String = started.allowed_letters.iter().take(3).map(|t| t.letter).collect();
        handle.send(SessionEvent::Submit(word)).await.unwrap();

        let resolved = wait_for(&mut rx, |s| {
            s.submissions
                .first()
                .is_some_and(|sub| sub.status == SubmissionStatus::NotReal)
        })
        .await;
        assert_eq!(resolved.score, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_lookup_leaves_submission_pending() {
        let dictionary = FakeDictionary::new(HashSet::new(), true);
        let (handle, mut rx) = start_session(60, dictionary);

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        let started = wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;
        let word = started.allowed_letters[0].letter.to_string();
        handle.send(SessionEvent::Submit(word)).await.unwrap();
        wait_for(&mut rx, |s| s.submissions.len() == 1).await;

        // Give the lookup time to fail
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle
            .send(SessionEvent::AttemptChanged("Q".to_string()))
            .await
            .unwrap();

        let later = wait_for(&mut rx, |s| s.current_attempt == "q").await;
        assert_eq!(later.submissions[0].status, SubmissionStatus::Pending);
        assert_eq!(later.score, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_expires_and_stops() {
        let (handle, mut rx) = start_session(3, knows_all_letters());

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;

        let two = wait_for(&mut rx, |_| true).await;
        assert_eq!(two.seconds_remaining, 2);
        let one = wait_for(&mut rx, |_| true).await;
        assert_eq!(one.seconds_remaining, 1);
        let expired = wait_for(&mut rx, |_| true).await;
        assert_eq!(expired.seconds_remaining, 0);
        assert_eq!(expired.phase, ClockPhase::Expired);
        assert!(!expired.accepting_input);

        // No more ticks once expired
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_clock() {
        let (handle, mut rx) = start_session(60, knows_all_letters());

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;
        wait_for(&mut rx, |s| s.seconds_remaining == 58).await;

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        wait_for(&mut rx, |s| s.seconds_remaining == 60).await;

        // Exactly one second per tick: the old timer is gone
        let next = wait_for(&mut rx, |_| true).await;
        assert_eq!(next.seconds_remaining, 59);
        let next = wait_for(&mut rx, |_| true).await;
        assert_eq!(next.seconds_remaining, 58);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_answer_from_previous_game_is_dropped() {
        // The first game's lookup answers after the restart, the second game's much later
        let dictionary = knows_all_letters()
            .with_delays(vec![Duration::from_secs(5), Duration::from_secs(30)]);
        let (handle, mut rx) = start_session(60, dictionary);

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        let first = wait_for(&mut rx, |s| s.phase == ClockPhase::Running).await;
        let old_word = first.allowed_letters[0].letter.to_string();
        handle.send(SessionEvent::Submit(old_word)).await.unwrap();
        wait_for(&mut rx, |s| s.submissions.len() == 1).await;

        handle.send(SessionEvent::StartNewGame).await.unwrap();
        let second = wait_for(&mut rx, |s| {
            s.seconds_remaining == 60 && s.submissions.is_empty()
        })
        .await;
        let new_word = second.allowed_letters[0].letter.to_string();
        handle.send(SessionEvent::Submit(new_word.clone())).await.unwrap();
        wait_for(&mut rx, |s| s.submissions.len() == 1).await;

        // Let the first game's answer arrive
        tokio::time::sleep(Duration::from_secs(10)).await;
        handle
            .send(SessionEvent::AttemptChanged("Q".to_string()))
            .await
            .unwrap();

        let later = wait_for(&mut rx, |s| s.current_attempt == "q").await;
        assert_eq!(later.submissions.len(), 1);
        assert_eq!(later.submissions[0].word, new_word);
        assert_eq!(later.submissions[0].status, SubmissionStatus::Pending);
        assert_eq!(later.score, 0);

        // The second game's own answer still lands
        let resolved = wait_for(&mut rx, |s| {
            s.submissions
                .first()
                .is_some_and(|sub| sub.status == SubmissionStatus::Real)
        })
        .await;
        assert_eq!(resolved.submissions[0].word, new_word);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_ends_session() {
        let (handle, mut rx) = start_session(60, knows_all_letters());
        let SessionHandle { events, .. } = handle;

        events.send(SessionEvent::StartNewGame).await.unwrap();
        drop(events);

        // The session drops its render sender when it stops
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "session should stop");
    }
}
