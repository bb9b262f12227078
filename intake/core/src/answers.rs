//! Answer Sheet
//!
//! The collected answers, keyed by question id. Grows by one entry per
//! accepted answer and never shrinks; serializing it yields exactly the
//! JSON object the submission webhook expects (question ids as keys,
//! string values, empty string for an answered-but-empty optional field).

use std::collections::BTreeMap;

use serde::Serialize;

/// The collected answers of one session
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: BTreeMap<String, String>,
}

impl AnswerSheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer
    ///
    /// Re-recording the same id overwrites in place; the engine only does
    /// this when the user re-confirms the final question after a failed
    /// submission.
    pub fn record(&mut self, id: &str, value: impl Into<String>) {
        self.entries.insert(id.to_string(), value.into());
    }

    /// The answer for a question id, if recorded
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// The answer for a question id, or empty
    pub fn value_or_empty(&self, id: &str) -> &str {
        self.get(id).unwrap_or("")
    }

    /// Whether an answer exists for this id
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of recorded answers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
