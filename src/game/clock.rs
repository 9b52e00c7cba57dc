use serde::{Deserialize, Serialize};

/// Lifecycle of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPhase {
    NotStarted,
    Running,
    Expired,
}

/// Countdown for one game.
///
/// The clock itself doesn't schedule anything; whoever owns it calls
/// [`GameClock::tick`] once a second while it is running.
#[derive(Debug, Clone)]
pub struct GameClock {
    phase: ClockPhase,
    duration: u32,
    seconds_remaining: u32,
}

impl GameClock {
    pub fn new(duration: u32) -> Self {
        Self {
            phase: ClockPhase::NotStarted,
            duration,
            seconds_remaining: duration,
        }
    }

    /// Reset to the full duration and start running.
    /// Works from any phase.
    pub fn start(&mut self) {
        self.seconds_remaining = self.duration;
        self.phase = if self.duration == 0 {
            ClockPhase::Expired
        } else {
            ClockPhase::Running
        };
    }

    /// Take one second off. Does nothing unless the clock is running.
    pub fn tick(&mut self) -> ClockPhase {
        if self.phase == ClockPhase::Running {
            self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
            if self.seconds_remaining == 0 {
                self.phase = ClockPhase::Expired;
            }
        }
        self.phase
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }
}
