//! Submission Backends
//!
//! Trait definition for delivering a completed answer sheet to the outside
//! world, plus the webhook implementation used in production.
//!
//! # Design Philosophy
//!
//! The engine does not know where answers go. It calls [`SubmitBackend`]
//! exactly once per confirmed submission and reacts to the result; retries
//! are user-driven through the state machine, never automatic. Test
//! harnesses swap in a recording mock.

use async_trait::async_trait;
use thiserror::Error;

use crate::answers::AnswerSheet;

mod webhook;
pub use webhook::{WebhookBackend, WEBHOOK_URL_ENV};

/// Why a submission failed
///
/// A missing endpoint and a transport failure look the same to the user:
/// an error line plus the fallback contact address.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No submission endpoint configured
    #[error("no submission endpoint configured")]
    Unconfigured,

    /// The answer sheet could not be encoded
    #[error("could not encode submission payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The outbound request failed
    #[error("submission request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Submission backend trait
///
/// Implementations deliver the full answer sheet in one outbound call. The
/// call is fire-and-forget: the external collaborator's side effects (row
/// append, notification emails) cannot be observed beyond the call's own
/// success signal.
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Deliver the answer sheet
    ///
    /// Each call produces one externally recorded submission; the engine's
    /// sticky `Completed` phase is what prevents duplicates, not this
    /// method.
    async fn submit(&self, sheet: &AnswerSheet) -> Result<(), SubmitError>;
}
