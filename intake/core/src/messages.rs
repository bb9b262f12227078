//! Engine Messages
//!
//! Messages sent from the engine to a surface. The surface applies them in
//! order to rebuild the session view: the transcript mutations mirror the
//! engine's own buffer one-for-one, the rest carry phase and question
//! metadata.
//!
//! # Design Philosophy
//!
//! The engine is the single writer of session state. A surface holds no
//! business logic; it renders what these messages describe and forwards user
//! actions back as `InputEvent`s.

use serde::{Deserialize, Serialize};

use crate::transcript::LineKind;

/// The session's lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Running the boot script; no input accepted
    Booting,
    /// Revealing a prompt; no input accepted
    Typing,
    /// Waiting for the user's answer
    AwaitingAnswer,
    /// The one outbound submission call is in flight
    Submitting,
    /// Terminal: the submission succeeded; further submits are ignored
    Completed,
}

impl Phase {
    /// Human-readable description for status lines
    pub fn description(&self) -> &'static str {
        match self {
            Self::Booting => "Booting...",
            Self::Typing => "Typing...",
            Self::AwaitingAnswer => "Awaiting input",
            Self::Submitting => "Submitting...",
            Self::Completed => "Done",
        }
    }

    /// Whether the session accepts input in this phase
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }
}

/// A choice rendered by the surface, by value and label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    /// Stored value
    pub value: String,
    /// Human-readable label
    pub label: String,
}

/// Messages from the engine to a surface
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum EngineMessage {
    // ============================================
    // Transcript Mutations
    // ============================================
    /// A line was appended to the transcript
    LineAppended {
        /// Kind of the new line
        kind: LineKind,
        /// Line text
        text: String,
    },

    /// The most recent line's text was replaced (character reveal)
    LineReplaced {
        /// The new text of the last line
        text: String,
    },

    /// The most recent line was removed (loading placeholder retracted)
    LineRemoved,

    // ============================================
    // Session Metadata
    // ============================================
    /// The session moved to a new phase
    PhaseChanged {
        /// The phase just entered
        phase: Phase,
    },

    /// A question became current; sent before its prompt reveal starts
    QuestionPresented {
        /// 0-based index of the question
        index: usize,
        /// Total number of questions
        total: usize,
        /// Hint for the empty input
        placeholder: Option<String>,
        /// Choice set, empty for free-text questions
        choices: Vec<ChoiceView>,
        /// Whether several choices may be selected
        allow_multiple: bool,
    },

    /// The pending choice selection changed
    SelectionChanged {
        /// The currently selected values
        values: Vec<String>,
    },

    /// The submission succeeded and the session is complete
    SessionComplete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_awaiting_answer_is_interactive() {
        assert!(Phase::AwaitingAnswer.is_interactive());
        assert!(!Phase::Booting.is_interactive());
        assert!(!Phase::Typing.is_interactive());
        assert!(!Phase::Submitting.is_interactive());
        assert!(!Phase::Completed.is_interactive());
    }

    #[test]
    fn test_phase_descriptions() {
        assert_eq!(Phase::Booting.description(), "Booting...");
        assert_eq!(Phase::Completed.description(), "Done");
    }
}
