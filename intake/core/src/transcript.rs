//! Output Transcript
//!
//! The ordered line buffer behind the terminal session. Boot messages,
//! question prompts, echoed answers and errors all land here, and stay for
//! the lifetime of the session view.
//!
//! # Design Philosophy
//!
//! The transcript is append-only with exactly two escape hatches:
//!
//! - [`Transcript::replace_last`], used by the typewriter to grow the line
//!   currently being revealed
//! - [`Transcript::pop_last`], used to retract a transient loading placeholder
//!
//! Lines are never reordered. A single writer (the engine task) owns the
//! transcript; surfaces keep their own copy built from `EngineMessage`s.

use serde::{Deserialize, Serialize};

/// What a transcript line is, which controls how surfaces style it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Boot script and status output
    System,
    /// A question prompt, typed out character by character
    Question,
    /// An echoed, accepted answer
    Answer,
    /// A validation or submission error
    Error,
    /// A transient "working" placeholder; surfaces animate trailing dots
    Loading,
}

/// One rendered line of session output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Kind of line
    pub kind: LineKind,
    /// Line text; may be empty, which renders as visual spacing
    pub text: String,
}

impl OutputLine {
    /// Create a new line
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The session's ordered output buffer
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(OutputLine::new(kind, text));
    }

    /// Replace the text of the most recent line, keeping its kind
    ///
    /// No-op on an empty transcript.
    pub fn replace_last(&mut self, text: impl Into<String>) {
        if let Some(last) = self.lines.last_mut() {
            last.text = text.into();
        }
    }

    /// Remove and return the most recent line
    pub fn pop_last(&mut self) -> Option<OutputLine> {
        self.lines.pop()
    }

    /// All lines, oldest first
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// The most recent line
    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the transcript has no lines yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Count lines of a given kind
    pub fn count_of(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::System, "first");
        transcript.push(LineKind::Question, "second");
        transcript.push(LineKind::Answer, "third");

        let texts: Vec<_> = transcript.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_replace_last_keeps_kind() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Question, "H");
        transcript.replace_last("He");
        transcript.replace_last("Hel");

        assert_eq!(transcript.len(), 1);
        let last = transcript.last().unwrap();
        assert_eq!(last.kind, LineKind::Question);
        assert_eq!(last.text, "Hel");
    }

    #[test]
    fn test_replace_last_on_empty_is_noop() {
        let mut transcript = Transcript::new();
        transcript.replace_last("ignored");
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_pop_last_removes_only_newest() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::System, "keep");
        transcript.push(LineKind::Loading, "> ");

        let popped = transcript.pop_last().unwrap();
        assert_eq!(popped.kind, LineKind::Loading);
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().unwrap().text, "keep");
    }

    #[test]
    fn test_empty_line_still_counts() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Question, "");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().unwrap().text, "");
    }

    #[test]
    fn test_count_of() {
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Error, "a");
        transcript.push(LineKind::System, "b");
        transcript.push(LineKind::Error, "c");

        assert_eq!(transcript.count_of(LineKind::Error), 2);
        assert_eq!(transcript.count_of(LineKind::Loading), 0);
    }
}
