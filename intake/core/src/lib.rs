//! Intake Core - Headless Question-Flow Engine for the Hacker House Terminal
//!
//! This crate drives the scripted registration session behind the Hacker
//! House intake terminal, completely independent of any UI framework. It can
//! power a TUI, a web surface, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Surfaces                           │
//! │        ┌─────────┐   ┌──────────┐   ┌──────────┐          │
//! │        │   TUI   │   │   Web    │   │ Headless │          │
//! │        │(render) │   │          │   │ (tests)  │          │
//! │        └────┬────┘   └────┬─────┘   └────┬─────┘          │
//! │             └─────────────┴──────────────┘                │
//! │                          │                                │
//! │                   InputEvent (up)                         │
//! │                  EngineMessage (down)                     │
//! └──────────────────────────┼────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┼────────────────────────────────┐
//! │                     INTAKE CORE                           │
//! │  ┌───────────────────────┴─────────────────────────────┐  │
//! │  │                      Engine                         │  │
//! │  │  ┌─────────┐  ┌──────────┐  ┌────────┐  ┌─────────┐ │  │
//! │  │  │ Catalog │  │Typewriter│  │Answers │  │ Backend │ │  │
//! │  │  └─────────┘  └──────────┘  └────────┘  └─────────┘ │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Engine`]: the session state machine; boots, reveals questions,
//!   validates answers, submits once
//! - [`EngineMessage`]: messages sent from the engine to a surface
//! - [`InputEvent`]: events sent from a surface to the engine
//! - [`QuestionDef`]: one entry of the fixed question catalog
//! - [`SubmitBackend`]: delivery of the completed answer sheet
//!
//! # Quick Start
//!
//! ```ignore
//! use intake_core::{catalog, Engine, EngineConfig, WebhookBackend};
//! use tokio::sync::{mpsc, watch};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
//!     let (events_tx, events_rx) = mpsc::channel(32);
//!     let (close_tx, close_rx) = watch::channel(false);
//!
//!     let config = EngineConfig::load(None).unwrap_or_default();
//!     let backend = WebhookBackend::from_config(&config);
//!     let engine = Engine::new(backend, config, msg_tx, close_rx);
//!     tokio::spawn(engine.run(events_rx));
//!
//!     // Forward user actions through events_tx, render msg_rx,
//!     // flip close_tx on ESC.
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`catalog`]: the fixed, ordered question definitions
//! - [`transcript`]: the session's output line buffer
//! - [`typewriter`]: character-by-character prompt reveal
//! - [`engine`]: the session state machine
//! - [`answers`]: the collected answer sheet
//! - [`events`] / [`messages`]: the surface protocol
//! - [`profile`]: full vs. compact display capability
//! - [`config`]: TOML file + environment configuration
//! - [`backend`]: submission delivery (webhook)
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on any terminal rendering library,
//! terminal-input crate, or other UI framework. It's pure session logic that
//! can be driven from anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod answers;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod events;
pub mod messages;
pub mod profile;
pub mod transcript;
pub mod typewriter;

// Re-exports for convenience
pub use answers::AnswerSheet;
pub use backend::{SubmitBackend, SubmitError, WebhookBackend, WEBHOOK_URL_ENV};
pub use catalog::{catalog, Choice, QuestionDef, Validator};
pub use config::{ConfigError, ConfigOverrides, EngineConfig, IntakeToml, Pacing};
pub use engine::Engine;
pub use events::InputEvent;
pub use messages::{ChoiceView, EngineMessage, Phase};
pub use profile::{DisplayProfile, COMPACT_WIDTH_COLS};
pub use transcript::{LineKind, OutputLine, Transcript};
pub use typewriter::{Cancelled, Typewriter};
