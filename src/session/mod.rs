//! Puzzle session state machine
//!
//! A [`Session`] owns the level list, the current position and all scoring
//! and reveal state. It is single-owner and synchronous: the host drives it
//! one operation at a time and renders the [`Snapshot`] it exposes.
//!
//! Per-level lifecycle: `Untouched -> Completed` on a correct guess, or
//! `Untouched -> GivenUp` on give-up. Hints, reveals and wrong guesses keep
//! the level `Untouched`.

pub mod actions;
pub mod state;

pub use actions::{GiveUpOutcome, Hint, Navigation, RevealOutcome, SubmitOutcome};
pub use state::{
    Action, DealPlan, Feedback, FeedbackKind, LevelProgress, LevelStatus, Session, SessionError,
    Snapshot,
};
