//! Session operations
//!
//! Each operation runs to completion and either applies its whole effect or
//! rejects with counters and statuses untouched. Rejections still set a
//! feedback message so the player is never left without a response.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{
    Action, Feedback, FeedbackKind, LevelProgress, LevelStatus, Session, SessionError,
};
use crate::settings::HintStyle;

const MSG_CORRECT: &str = "\u{2705} Correct. The darkness recedes\u{2026}";
const MSG_WRONG: &str = "\u{274c} Not yet. Listen to the wind or reveal a letter.";
const MSG_REVEALED: &str = "\u{1f50e} A letter emerges from the dark.";
const MSG_ALL_REVEALED: &str = "All letters are already revealed.";
const MSG_LOCKED: &str = "\u{1f512} This cipher is sealed. The answer was already revealed.";
const MSG_SOLVED: &str = "This cipher is already broken. Move on to the next.";
const MSG_FINISHED: &str = "\u{1f319} Every cipher has been faced. The night is yours.";
const MSG_RESET: &str = "Progress reset.";

/// Result of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
}

/// Hint artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Text(String),
    Letter(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed {
        position: usize,
        letter: char,
        /// Answer with undisclosed letters as `_`
        partial: String,
    },
    NothingToReveal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveUpOutcome {
    GaveUp { answer: String },
    AlreadyGivenUp,
}

/// Result of moving between levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { index: usize },
    /// Already at the first level
    AtStart,
    /// Advanced past the last level
    SessionComplete,
}

impl Session {
    fn set_feedback(&mut self, kind: FeedbackKind, message: impl Into<String>) {
        self.feedback = Feedback::new(kind, message);
    }

    /// Reject `action` if the current level is in a state that forbids it
    fn guard(&mut self, action: Action, forbidden: &[LevelStatus]) -> Result<(), SessionError> {
        let status = self.status();
        if !forbidden.contains(&status) {
            return Ok(());
        }

        let message = if status == LevelStatus::GivenUp { MSG_LOCKED } else { MSG_SOLVED };
        self.set_feedback(FeedbackKind::Error, message);
        log::warn!("Rejected {:?} on level {} ({:?})", action, self.current_index + 1, status);
        Err(SessionError::InvalidOperation {
            index: self.current_index,
            status,
            action,
        })
    }

    /// Score a guess against the current level
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        self.guard(Action::Submit, &[LevelStatus::GivenUp, LevelStatus::Completed])?;

        self.attempts += 1;
        if self.current_level().accepts(raw) {
            self.progress[self.current_index].status = LevelStatus::Completed;
            self.set_feedback(FeedbackKind::Ok, MSG_CORRECT);
            log::debug!("Level {} solved (attempt {})", self.current_index + 1, self.attempts);
            Ok(SubmitOutcome::Correct)
        } else {
            self.set_feedback(FeedbackKind::Error, MSG_WRONG);
            log::debug!("Level {} wrong guess", self.current_index + 1);
            Ok(SubmitOutcome::Incorrect)
        }
    }

    /// Hand out a hint; costs one hint
    pub fn request_hint(&mut self) -> Result<Hint, SessionError> {
        self.guard(Action::Hint, &[LevelStatus::GivenUp])?;

        let hint = match self.plan.hint_style {
            HintStyle::Fixed => Hint::Text(self.current_level().hint().to_string()),
            HintStyle::RandomLetter => Hint::Letter(self.random_answer_letter()),
        };
        self.hints_used += 1;

        let message = match &hint {
            Hint::Text(text) => format!("\u{1f4a1} Hint: {}", text),
            Hint::Letter(ch) => format!("\u{1f4a1} Hint: the answer contains '{}'.", ch),
        };
        self.set_feedback(FeedbackKind::Hint, message);
        log::debug!("Hint {} on level {}", self.hints_used, self.current_index + 1);
        Ok(hint)
    }

    /// Letter from the answer, chosen from a hash of the seed, level and hint count
    fn random_answer_letter(&self) -> char {
        let letters: Vec<char> = self
            .current_level()
            .answer()
            .chars()
            .filter(|ch| *ch != ' ')
            .collect();
        let hint_seed = (self.hints_used as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed)
            ^ ((self.current_index as u64) << 32);
        let mut rng = Pcg32::seed_from_u64(hint_seed);
        // Answers are never empty (checked when the level was built)
        letters[rng.random_range(0..letters.len())]
    }

    /// Disclose the leftmost hidden letter of the answer; costs one hint
    pub fn reveal_next_letter(&mut self) -> Result<RevealOutcome, SessionError> {
        self.guard(Action::Reveal, &[LevelStatus::GivenUp])?;

        let answer = self.current_level().answer();
        let progress = &mut self.progress[self.current_index];
        let next = answer
            .chars()
            .zip(progress.revealed.iter())
            .position(|(ch, &shown)| !shown && ch != ' ');

        let Some(position) = next else {
            self.set_feedback(FeedbackKind::Hint, MSG_ALL_REVEALED);
            return Ok(RevealOutcome::NothingToReveal);
        };

        progress.revealed[position] = true;
        let letter = answer.chars().nth(position).unwrap_or('_');
        self.hints_used += 1;
        self.set_feedback(FeedbackKind::Hint, MSG_REVEALED);
        log::debug!("Revealed position {} on level {}", position, self.current_index + 1);

        Ok(RevealOutcome::Revealed {
            position,
            letter,
            partial: self.masked_answer(),
        })
    }

    /// Disclose the whole answer and lock the level. Does not advance.
    pub fn give_up(&mut self) -> Result<GiveUpOutcome, SessionError> {
        if self.status() == LevelStatus::GivenUp {
            self.set_feedback(FeedbackKind::Error, MSG_LOCKED);
            return Ok(GiveUpOutcome::AlreadyGivenUp);
        }
        self.guard(Action::GiveUp, &[LevelStatus::Completed])?;

        let answer = self.current_level().answer();
        let progress = &mut self.progress[self.current_index];
        progress.status = LevelStatus::GivenUp;
        progress.revealed.iter_mut().for_each(|shown| *shown = true);

        self.set_feedback(FeedbackKind::Info, format!("The answer was: {}", answer));
        log::debug!("Gave up on level {}", self.current_index + 1);
        Ok(GiveUpOutcome::GaveUp { answer })
    }

    /// Move to the next level, or signal completion at the last one
    pub fn advance(&mut self) -> Navigation {
        if self.current_index + 1 < self.levels.len() {
            self.current_index += 1;
            self.set_feedback(FeedbackKind::Info, "");
            Navigation::Moved {
                index: self.current_index,
            }
        } else {
            self.set_feedback(FeedbackKind::Ok, MSG_FINISHED);
            log::info!(
                "Session complete: {}/{} solved, {} attempts, {} hints",
                self.solved_levels(),
                self.levels.len(),
                self.attempts,
                self.hints_used
            );
            Navigation::SessionComplete
        }
    }

    /// Move to the previous level (clamped at the first)
    pub fn retreat(&mut self) -> Navigation {
        if self.current_index == 0 {
            return Navigation::AtStart;
        }
        self.current_index -= 1;
        self.set_feedback(FeedbackKind::Info, "");
        Navigation::Moved {
            index: self.current_index,
        }
    }

    /// Jump to a level, clamped into range
    pub fn go_to(&mut self, index: usize) -> Navigation {
        self.current_index = index.min(self.levels.len() - 1);
        self.set_feedback(FeedbackKind::Info, "");
        Navigation::Moved {
            index: self.current_index,
        }
    }

    /// Mark the current level skipped and advance
    pub fn skip(&mut self) -> Navigation {
        self.progress[self.current_index].skipped = true;
        log::debug!("Skipped level {}", self.current_index + 1);
        self.advance()
    }

    /// Re-deal the levels from `seed` and zero every counter
    pub fn restart(&mut self, seed: u64) -> Result<(), SessionError> {
        let levels = self.plan.deal(seed, &self.levels)?;
        self.progress = levels.iter().map(LevelProgress::new).collect();
        self.levels = levels;
        self.seed = seed;
        self.current_index = 0;
        self.attempts = 0;
        self.hints_used = 0;
        self.set_feedback(FeedbackKind::Hint, MSG_RESET);
        log::info!("Session restarted with seed {}", seed);
        Ok(())
    }
}
