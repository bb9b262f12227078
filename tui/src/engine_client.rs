//! Engine Client
//!
//! Thin wrapper around the intake engine for TUI integration. The engine
//! runs embedded as its own tokio task (no network); this client keeps the
//! channel ends and provides a convenient interface for sending events and
//! draining messages.
//!
//! # Architecture
//!
//! The TUI is a thin client with no business logic. Its job is:
//! 1. Convert terminal events to `InputEvent`s
//! 2. Send them to the engine task
//! 3. Drain `EngineMessage`s every frame
//! 4. Render display state built from those messages

use tokio::sync::{mpsc, watch};

use intake_core::{Engine, EngineConfig, EngineMessage, InputEvent, WebhookBackend};

/// Client for communicating with the embedded engine task
pub struct EngineClient {
    events_tx: mpsc::Sender<InputEvent>,
    messages_rx: mpsc::UnboundedReceiver<EngineMessage>,
    close_tx: watch::Sender<bool>,
}

impl EngineClient {
    /// Spawn the engine task for this session
    pub fn new(config: EngineConfig) -> Self {
        let (messages_tx, messages_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::channel(32);
        let (close_tx, close_rx) = watch::channel(false);

        let backend = WebhookBackend::from_config(&config);
        let engine = Engine::new(backend, config, messages_tx, close_rx);
        tokio::spawn(engine.run(events_rx));

        Self {
            events_tx,
            messages_rx,
            close_tx,
        }
    }

    /// Submit a line of free text
    pub async fn submit_text(&self, text: String) {
        let _ = self.events_tx.send(InputEvent::SubmitText { text }).await;
    }

    /// Toggle one choice value
    pub async fn toggle_choice(&self, value: String) {
        let _ = self.events_tx.send(InputEvent::ToggleChoice { value }).await;
    }

    /// Confirm the pending choice selection
    pub async fn confirm_selection(&self) {
        let _ = self.events_tx.send(InputEvent::ConfirmSelection).await;
    }

    /// Signal the session to close
    ///
    /// Honored at every engine suspension point; an in-flight submission is
    /// left to finish on its own (fire-and-forget).
    pub fn close(&self) {
        let _ = self.close_tx.send(true);
    }

    /// Drain all pending messages from the engine (non-blocking)
    pub fn recv_all(&mut self) -> Vec<EngineMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.messages_rx.try_recv() {
            messages.push(msg);
        }
        messages
    }
}
