//! Display Profile
//!
//! A capability resolved once per session describing how much room and
//! patience the display has. Constrained displays get shorter delays,
//! compact prompts and button-based choice input; the state machine and
//! validation never branch on the profile beyond those three things.

use std::time::Duration;

use crate::catalog::QuestionDef;

/// Column threshold below which a terminal counts as constrained
pub const COMPACT_WIDTH_COLS: u16 = 80;

/// How the session is being displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayProfile {
    /// A regular terminal: full prompts, full pacing, free-text entry
    #[default]
    Full,
    /// A constrained display: compact prompts, halved pacing, choice buttons
    Compact,
}

impl DisplayProfile {
    /// Resolve the profile from the terminal width
    pub fn detect(width_cols: u16) -> Self {
        if width_cols < COMPACT_WIDTH_COLS {
            Self::Compact
        } else {
            Self::Full
        }
    }

    /// Scale a boot or transition delay for this profile
    ///
    /// Compact displays halve every scripted pause so the first question
    /// arrives quickly.
    pub fn scale(&self, delay: Duration) -> Duration {
        match self {
            Self::Full => delay,
            Self::Compact => delay / 2,
        }
    }

    /// The prompt to reveal for a question under this profile
    pub fn prompt_for<'a>(&self, question: &'a QuestionDef) -> &'a str {
        match self {
            Self::Full => question.prompt,
            Self::Compact => question.prompt_short.unwrap_or(question.prompt),
        }
    }

    /// Whether this profile presents a question's choices as buttons
    ///
    /// The engine accepts both input families either way; this only decides
    /// what the surface shows.
    pub fn uses_choice_buttons(&self, question: &QuestionDef) -> bool {
        *self == Self::Compact && question.has_choices()
    }
}
