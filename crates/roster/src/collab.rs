//! External collaborator seams.
//!
//! The engine consumes two interfaces it does not implement itself: a clock
//! that stamps creation times, and a blocking yes/no confirmation asked
//! before a bulk delete proceeds. Both are traits so tests can pin time and
//! script answers.

use chrono::{DateTime, Utc};

/// Supplies the current timestamp for record creation.
pub trait Clock {
    /// The current moment.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant. Useful in tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Blocking yes/no interaction invoked before destructive group actions.
///
/// Answering `false` aborts the action with zero store mutations.
pub trait ConfirmationPrompt {
    /// Ask the question; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// A prompt that always answers yes. The default for embedders that gate
/// destructive actions elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// A prompt that always answers no.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmationPrompt for NeverConfirm {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
}
