//! Display State
//!
//! The view state the TUI renders from, rebuilt by applying every
//! `EngineMessage` in arrival order. The engine owns the canonical session
//! state; this is the surface's mirror of it.

use intake_core::{ChoiceView, EngineMessage, LineKind, OutputLine, Phase};

/// The full display state for the TUI
#[derive(Debug)]
pub struct DisplayState {
    /// Transcript lines, oldest first
    pub lines: Vec<OutputLine>,
    /// Current session phase
    pub phase: Phase,
    /// 0-based index of the current question
    pub question_index: usize,
    /// Total question count; 0 until the first question is presented
    pub question_total: usize,
    /// Placeholder for the empty input
    pub placeholder: Option<String>,
    /// Choice set of the current question (empty for free text)
    pub choices: Vec<ChoiceView>,
    /// Whether several choices may be selected
    pub allow_multiple: bool,
    /// The unconfirmed choice selection
    pub selection: Vec<String>,
    /// Whether the submission succeeded
    pub completed: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            phase: Phase::Booting,
            question_index: 0,
            question_total: 0,
            placeholder: None,
            choices: Vec::new(),
            allow_multiple: false,
            selection: Vec::new(),
            completed: false,
        }
    }
}

impl DisplayState {
    /// Create a fresh display state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one engine message
    pub fn apply_message(&mut self, msg: EngineMessage) {
        match msg {
            EngineMessage::LineAppended { kind, text } => {
                self.lines.push(OutputLine::new(kind, text));
            }
            EngineMessage::LineReplaced { text } => {
                if let Some(last) = self.lines.last_mut() {
                    last.text = text;
                }
            }
            EngineMessage::LineRemoved => {
                self.lines.pop();
            }
            EngineMessage::PhaseChanged { phase } => {
                self.phase = phase;
            }
            EngineMessage::QuestionPresented {
                index,
                total,
                placeholder,
                choices,
                allow_multiple,
            } => {
                self.question_index = index;
                self.question_total = total;
                self.placeholder = placeholder;
                self.choices = choices;
                self.allow_multiple = allow_multiple;
                self.selection.clear();
            }
            EngineMessage::SelectionChanged { values } => {
                self.selection = values;
            }
            EngineMessage::SessionComplete => {
                self.completed = true;
            }
        }
    }

    /// Whether the session is taking input right now
    pub fn can_accept_input(&self) -> bool {
        self.phase.is_interactive() && !self.completed
    }

    /// Footer progress: (current 1-based, total)
    pub fn progress(&self) -> (usize, usize) {
        if self.question_total == 0 {
            return (0, 0);
        }
        (
            (self.question_index + 1).min(self.question_total),
            self.question_total,
        )
    }

    /// Whether a choice value is currently selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.iter().any(|v| v == value)
    }

    /// Whether the current question offers choices
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Whether any transcript line is a loading placeholder
    pub fn has_loading_line(&self) -> bool {
        self.lines.iter().any(|l| l.kind == LineKind::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state() {
        let state = DisplayState::new();
        assert!(state.lines.is_empty());
        assert_eq!(state.phase, Phase::Booting);
        assert_eq!(state.progress(), (0, 0));
        assert!(!state.can_accept_input());
    }

    #[test]
    fn test_line_mutations_mirror_engine() {
        let mut state = DisplayState::new();
        state.apply_message(EngineMessage::LineAppended {
            kind: LineKind::Question,
            text: "H".to_string(),
        });
        state.apply_message(EngineMessage::LineReplaced {
            text: "He".to_string(),
        });
        state.apply_message(EngineMessage::LineAppended {
            kind: LineKind::Loading,
            text: "> ".to_string(),
        });
        state.apply_message(EngineMessage::LineRemoved);

        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].text, "He");
        assert_eq!(state.lines[0].kind, LineKind::Question);
        assert!(!state.has_loading_line());
    }

    #[test]
    fn test_question_presented_resets_selection() {
        let mut state = DisplayState::new();
        state.selection = vec!["1".to_string()];

        state.apply_message(EngineMessage::QuestionPresented {
            index: 4,
            total: 11,
            placeholder: Some("E.g. 1,2".to_string()),
            choices: vec![ChoiceView {
                value: "1".to_string(),
                label: "Vibe Coder".to_string(),
            }],
            allow_multiple: true,
        });

        assert!(state.selection.is_empty());
        assert!(state.has_choices());
        assert!(state.allow_multiple);
        assert_eq!(state.progress(), (5, 11));
    }

    #[test]
    fn test_selection_changed() {
        let mut state = DisplayState::new();
        state.apply_message(EngineMessage::SelectionChanged {
            values: vec!["2".to_string(), "1".to_string()],
        });
        assert!(state.is_selected("1"));
        assert!(state.is_selected("2"));
        assert!(!state.is_selected("3"));
    }

    #[test]
    fn test_phase_gates_input() {
        let mut state = DisplayState::new();
        assert!(!state.can_accept_input());

        state.apply_message(EngineMessage::PhaseChanged {
            phase: Phase::AwaitingAnswer,
        });
        assert!(state.can_accept_input());

        state.apply_message(EngineMessage::PhaseChanged {
            phase: Phase::Typing,
        });
        assert!(!state.can_accept_input());
    }

    #[test]
    fn test_session_complete_locks_input() {
        let mut state = DisplayState::new();
        state.apply_message(EngineMessage::PhaseChanged {
            phase: Phase::AwaitingAnswer,
        });
        state.apply_message(EngineMessage::SessionComplete);
        assert!(state.completed);
        assert!(!state.can_accept_input());
    }

    #[test]
    fn test_progress_clamps_past_last_question() {
        let mut state = DisplayState::new();
        state.apply_message(EngineMessage::QuestionPresented {
            index: 10,
            total: 11,
            placeholder: None,
            choices: Vec::new(),
            allow_multiple: false,
        });
        state.question_index = 11; // past the end after the last accept
        assert_eq!(state.progress(), (11, 11));
    }
}
