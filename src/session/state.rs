//! Session state and the types it hands to the presentation layer
//!
//! Everything needed to restore a session exactly lives in [`Session`] and
//! is serializable.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_LEVEL_COUNT;
use crate::level::{self, Level, LevelError};
use crate::settings::{HintStyle, LevelSource, Settings};

/// Per-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelStatus {
    #[default]
    Untouched,
    /// Solved by a correct guess (terminal)
    Completed,
    /// Answer disclosed by give-up (terminal, locks scoring)
    GivenUp,
}

impl fmt::Display for LevelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelStatus::Untouched => write!(f, "unsolved"),
            LevelStatus::Completed => write!(f, "already solved"),
            LevelStatus::GivenUp => write!(f, "given up"),
        }
    }
}

/// Player action, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Hint,
    Reveal,
    GiveUp,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Submit => write!(f, "submit a guess for"),
            Action::Hint => write!(f, "take a hint on"),
            Action::Reveal => write!(f, "reveal a letter on"),
            Action::GiveUp => write!(f, "give up on"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} level {}: it is {status}", .index + 1)]
    InvalidOperation {
        index: usize,
        status: LevelStatus,
        action: Action,
    },
    #[error("a session needs at least one level")]
    NoLevels,
    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Progress on a single level, keyed by level index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub status: LevelStatus,
    /// One entry per character of the normalized answer; spaces start revealed
    pub revealed: Vec<bool>,
    /// Player moved past this level with `skip`
    #[serde(default)]
    pub skipped: bool,
}

impl LevelProgress {
    pub fn new(level: &Level) -> Self {
        Self {
            status: LevelStatus::Untouched,
            revealed: level.answer().chars().map(|ch| ch == ' ').collect(),
            skipped: false,
        }
    }

    /// Count of revealed non-space positions
    pub fn revealed_letters(&self, level: &Level) -> usize {
        level
            .answer()
            .chars()
            .zip(&self.revealed)
            .filter(|(ch, shown)| **shown && *ch != ' ')
            .count()
    }
}

/// Kind of feedback message, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Ok,
    Error,
    Hint,
    #[default]
    Info,
}

/// Last message for the player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// How levels are dealt on creation and restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealPlan {
    pub source: LevelSource,
    pub count: usize,
    pub shuffle: bool,
    pub hint_style: HintStyle,
}

impl DealPlan {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            source: settings.level_source,
            count: settings.effective_level_count(),
            shuffle: settings.shuffle,
            hint_style: settings.hint_style,
        }
    }

    /// Deal a fresh level list; `current` is reused for `Custom` plans
    pub fn deal(&self, seed: u64, current: &[Level]) -> Result<Vec<Level>, SessionError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut levels = match self.source {
            LevelSource::Nightfall => level::nightfall()?,
            LevelSource::Generated => {
                level::generate_levels(&mut rng, self.count.clamp(1, MAX_LEVEL_COUNT))?
            }
            LevelSource::Custom => current.to_vec(),
        };
        if self.shuffle {
            level::shuffle_levels(&mut rng, &mut levels);
        }
        if levels.is_empty() {
            return Err(SessionError::NoLevels);
        }
        Ok(levels)
    }
}

/// Read-only view of the session after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub current_index: usize,
    pub total_levels: usize,
    pub attempts: u32,
    pub hints_used: u32,
    pub level_status: LevelStatus,
    /// Level number and display title
    pub title: String,
    pub ciphertext: String,
    /// Answer with undisclosed letters as `_`
    pub revealed_answer: String,
    pub skipped: bool,
    pub solved_levels: usize,
    pub feedback_message: String,
    pub feedback_kind: FeedbackKind,
}

/// A single-player puzzle session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Seed the current level list was dealt from
    pub(crate) seed: u64,
    pub(crate) plan: DealPlan,
    pub(crate) levels: Vec<Level>,
    /// Parallel to `levels`
    pub(crate) progress: Vec<LevelProgress>,
    pub(crate) current_index: usize,
    /// Session-wide totals
    pub(crate) attempts: u32,
    pub(crate) hints_used: u32,
    #[serde(default)]
    pub(crate) feedback: Feedback,
}

impl Session {
    /// Deal a new session from settings
    pub fn new(seed: u64, settings: &Settings) -> Result<Self, SessionError> {
        let plan = DealPlan::from_settings(settings);
        let levels = plan.deal(seed, &[])?;
        log::info!(
            "New session: {} levels ({}), seed {}",
            levels.len(),
            plan.source.as_str(),
            seed
        );
        Ok(Self::with_levels(seed, plan, levels))
    }

    /// Session over host-supplied levels, in the given order
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, SessionError> {
        if levels.is_empty() {
            return Err(SessionError::NoLevels);
        }
        for level in &levels {
            level.validate()?;
        }
        let plan = DealPlan {
            source: LevelSource::Custom,
            count: levels.len(),
            shuffle: false,
            hint_style: HintStyle::Fixed,
        };
        Ok(Self::with_levels(0, plan, levels))
    }

    pub(crate) fn with_levels(seed: u64, plan: DealPlan, levels: Vec<Level>) -> Self {
        let progress = levels.iter().map(LevelProgress::new).collect();
        Self {
            seed,
            plan,
            levels,
            progress,
            current_index: 0,
            attempts: 0,
            hints_used: 0,
            feedback: Feedback::default(),
        }
    }

    /// Change what `request_hint` returns
    pub fn set_hint_style(&mut self, style: HintStyle) {
        self.plan.hint_style = style;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn plan(&self) -> &DealPlan {
        &self.plan
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn progress(&self) -> &[LevelProgress] {
        &self.progress
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current_index]
    }

    pub fn current_progress(&self) -> &LevelProgress {
        &self.progress[self.current_index]
    }

    pub fn status(&self) -> LevelStatus {
        self.current_progress().status
    }

    pub fn solved_levels(&self) -> usize {
        self.progress
            .iter()
            .filter(|p| p.status == LevelStatus::Completed)
            .count()
    }

    /// Visible answer for the current level: the full answer once the level
    /// is over, otherwise revealed letters with `_` for the rest
    pub fn revealed_answer(&self) -> String {
        if self.status() != LevelStatus::Untouched {
            return self.current_level().answer();
        }
        self.masked_answer()
    }

    /// Current answer rendered through the reveal mask, whatever the status
    pub(crate) fn masked_answer(&self) -> String {
        self.current_level()
            .answer()
            .chars()
            .zip(&self.current_progress().revealed)
            .map(|(ch, &shown)| if shown { ch } else { '_' })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let level = self.current_level();
        Snapshot {
            current_index: self.current_index,
            total_levels: self.levels.len(),
            attempts: self.attempts,
            hints_used: self.hints_used,
            level_status: self.status(),
            title: format!("Level {} \u{2014} {}", self.current_index + 1, level.title()),
            ciphertext: level.ciphertext().to_string(),
            revealed_answer: self.revealed_answer(),
            skipped: self.current_progress().skipped,
            solved_levels: self.solved_levels(),
            feedback_message: self.feedback.message.clone(),
            feedback_kind: self.feedback.kind,
        }
    }
}
