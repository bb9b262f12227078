//! Typed-Output Rendering
//!
//! Reveals prompt text to the transcript one character at a time, and
//! appends instant lines (boot output, errors, loading placeholders) after
//! scripted pauses.
//!
//! # Design Philosophy
//!
//! The typewriter owns the canonical transcript and the message channel to
//! the surface, making it the session's single output writer. Every wait is
//! a tokio timer raced against the session's close signal, so an ESC during
//! a reveal aborts the remaining steps immediately; the abort surfaces as
//! [`Cancelled`] and propagates up with `?`. Reveals run strictly one after
//! another inside the engine task; two reveals never interleave.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::messages::EngineMessage;
use crate::transcript::{LineKind, Transcript};

/// Marker error: the session's close signal fired mid-operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session closed")
    }
}

impl std::error::Error for Cancelled {}

/// The session's output writer
pub struct Typewriter {
    transcript: Transcript,
    tx: mpsc::UnboundedSender<EngineMessage>,
    close_rx: watch::Receiver<bool>,
}

impl Typewriter {
    /// Create a typewriter over the given message channel and close signal
    pub fn new(tx: mpsc::UnboundedSender<EngineMessage>, close_rx: watch::Receiver<bool>) -> Self {
        Self {
            transcript: Transcript::new(),
            tx,
            close_rx,
        }
    }

    /// The canonical transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn send(&self, msg: EngineMessage) {
        // A dropped surface is handled through the close signal; losing a
        // mirror message here is harmless.
        let _ = self.tx.send(msg);
    }

    /// Wait for `delay`, aborting early if the session is closed
    pub async fn pause(&mut self, delay: Duration) -> Result<(), Cancelled> {
        if *self.close_rx.borrow() {
            return Err(Cancelled);
        }
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            _ = self.close_rx.changed() => Err(Cancelled),
        }
    }

    /// Append a complete line immediately
    pub fn append(&mut self, kind: LineKind, text: &str) {
        self.transcript.push(kind, text);
        self.send(EngineMessage::LineAppended {
            kind,
            text: text.to_string(),
        });
    }

    /// Append a complete line after a pause
    pub async fn append_after(
        &mut self,
        kind: LineKind,
        text: &str,
        delay: Duration,
    ) -> Result<(), Cancelled> {
        self.pause(delay).await?;
        self.append(kind, text);
        Ok(())
    }

    /// Remove the most recent line (retract a loading placeholder)
    pub fn remove_last(&mut self) {
        if self.transcript.pop_last().is_some() {
            self.send(EngineMessage::LineRemoved);
        }
    }

    /// Reveal one line character by character
    ///
    /// The first character appends a new `Question` line; each further
    /// character replaces the last line with the grown prefix after
    /// `char_delay`. An empty line still appends one empty `Question` line,
    /// used as visual spacing.
    pub async fn reveal_line(&mut self, text: &str, char_delay: Duration) -> Result<(), Cancelled> {
        if text.is_empty() {
            self.append(LineKind::Question, "");
            return Ok(());
        }

        let mut shown = String::new();
        for (i, ch) in text.chars().enumerate() {
            shown.push(ch);
            if i == 0 {
                self.transcript.push(LineKind::Question, shown.clone());
                self.send(EngineMessage::LineAppended {
                    kind: LineKind::Question,
                    text: shown.clone(),
                });
            } else {
                self.pause(char_delay).await?;
                self.transcript.replace_last(shown.clone());
                self.send(EngineMessage::LineReplaced {
                    text: shown.clone(),
                });
            }
        }
        Ok(())
    }

    /// Reveal a multi-line block, line by line, preserving order
    pub async fn reveal_block(&mut self, text: &str, char_delay: Duration) -> Result<(), Cancelled> {
        for line in text.split('\n') {
            self.reveal_line(line, char_delay).await?;
        }
        Ok(())
    }
}
