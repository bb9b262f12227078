//! Intake Engine - The Session State Machine
//!
//! Drives one registration session: the boot script, the typed question
//! sequence, answer validation, choice selection, and the single outbound
//! submission at the end.
//!
//! # Design Philosophy
//!
//! The engine is surface-agnostic. It owns the canonical transcript (through
//! its [`Typewriter`]) and all session state, emits [`EngineMessage`]s for a
//! surface to render, and consumes [`InputEvent`]s the surface forwards. It
//! runs as a single task: every scripted pause and per-character reveal is a
//! suspension point inside that task, so output operations execute strictly
//! in program order and two reveals never interleave.
//!
//! # Phases
//!
//! ```text
//! Booting ──▶ Typing ──▶ AwaitingAnswer ──▶ ... ──▶ Submitting ──▶ Completed
//!               ▲              │                         │
//!               └──────────────┘ (next question)         │ (failure)
//!                      AwaitingAnswer ◀──────────────────┘
//! ```
//!
//! `Completed` is sticky: once the submission succeeds, further submit
//! actions are ignored. A failed submission re-enters `AwaitingAnswer` past
//! the last question; a fresh confirm action there re-sends the same answer
//! sheet, one outbound call per retry.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::answers::AnswerSheet;
use crate::backend::SubmitBackend;
use crate::catalog::{catalog, QuestionDef};
use crate::config::{EngineConfig, Pacing};
use crate::events::InputEvent;
use crate::messages::{ChoiceView, EngineMessage, Phase};
use crate::profile::DisplayProfile;
use crate::transcript::{LineKind, Transcript};
use crate::typewriter::{Cancelled, Typewriter};

const BANNER: &str = "> HACKER HOUSE REGISTRATION SHELL v2.0";
const REQUIRED_ERROR: &str = "! ERROR: This field is required";
const SUBMIT_FAILED: &str = "! ERROR: Could not submit the form";
const EMPTY_ANSWER_ECHO: &str = "(empty)";

/// The question-flow engine for one session
pub struct Engine<B: SubmitBackend> {
    config: EngineConfig,
    backend: B,
    catalog: &'static [QuestionDef],
    typewriter: Typewriter,
    close_rx: watch::Receiver<bool>,
    tx: mpsc::UnboundedSender<EngineMessage>,
    phase: Phase,
    question_index: usize,
    answers: AnswerSheet,
    pending_selection: Vec<String>,
    booted: bool,
}

impl<B: SubmitBackend> Engine<B> {
    /// Create a new engine
    ///
    /// `tx` carries [`EngineMessage`]s to the surface; `close_rx` is the
    /// session's close signal, honored at every suspension point.
    pub fn new(
        backend: B,
        config: EngineConfig,
        tx: mpsc::UnboundedSender<EngineMessage>,
        close_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            typewriter: Typewriter::new(tx.clone(), close_rx.clone()),
            config,
            backend,
            catalog: catalog(),
            close_rx,
            tx,
            phase: Phase::Booting,
            question_index: 0,
            answers: AnswerSheet::new(),
            pending_selection: Vec::new(),
            booted: false,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 0-based index of the current question; equals the question count
    /// once every answer has been accepted
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Total number of questions
    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    /// The collected answers so far
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// The unconfirmed choice selection for the current question
    pub fn pending_selection(&self) -> &[String] {
        &self.pending_selection
    }

    /// The canonical transcript
    pub fn transcript(&self) -> &Transcript {
        self.typewriter.transcript()
    }

    /// Whether the boot script has run
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// The question currently awaiting an answer, if any
    pub fn current_question(&self) -> Option<&'static QuestionDef> {
        self.catalog.get(self.question_index)
    }

    fn send(&self, msg: EngineMessage) {
        let _ = self.tx.send(msg);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "phase transition");
            self.phase = phase;
            self.send(EngineMessage::PhaseChanged { phase });
        }
    }

    fn scaled(&self, ms: u64) -> Duration {
        self.config.scaled(Duration::from_millis(ms))
    }

    /// A pause that does not shrink on compact displays, only under
    /// instant pacing
    fn fixed(&self, ms: u64) -> Duration {
        match self.config.pacing {
            Pacing::Instant => Duration::ZERO,
            Pacing::Animated => Duration::from_millis(ms),
        }
    }

    /// Run the boot script and reveal the first question
    ///
    /// Idempotent: a second call is a no-op, so duplicate initialization
    /// triggers cannot replay the intro.
    pub async fn boot(&mut self) -> Result<(), Cancelled> {
        if self.booted {
            return Ok(());
        }
        self.booted = true;
        self.set_phase(Phase::Booting);

        self.typewriter
            .append_after(
                LineKind::System,
                "> Initializing registration system...",
                self.scaled(300),
            )
            .await?;
        self.typewriter
            .append_after(LineKind::Loading, "> ", self.scaled(800))
            .await?;
        self.typewriter.remove_last();
        self.typewriter
            .append_after(LineKind::System, "> Link established", self.scaled(200))
            .await?;
        self.typewriter
            .append_after(LineKind::System, BANNER, self.scaled(400))
            .await?;
        self.typewriter
            .append_after(LineKind::System, "> ", self.scaled(100))
            .await?;

        let instructions = match self.config.profile {
            DisplayProfile::Full => {
                "> Answer the questions below. Press ENTER to send each reply."
            }
            DisplayProfile::Compact => "> Answer the questions. Hit SEND to continue.",
        };
        self.typewriter
            .append_after(LineKind::System, instructions, self.scaled(600))
            .await?;
        self.typewriter
            .append_after(LineKind::System, "> ", self.scaled(200))
            .await?;
        self.typewriter
            .append_after(
                LineKind::Error,
                "! NOTICE: We'll ask for a short video (<2 min) at the end.",
                self.scaled(400),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::Error,
                "  Record it ahead of time at loom.com",
                self.scaled(300),
            )
            .await?;
        self.typewriter
            .append_after(LineKind::System, "> ", self.scaled(300))
            .await?;

        self.present_question().await
    }

    /// Handle one event from the surface
    ///
    /// Events are ignored unless the session is awaiting an answer;
    /// `Completed` is sticky against everything.
    pub async fn handle_event(&mut self, event: InputEvent) -> Result<(), Cancelled> {
        if !self.phase.is_interactive() {
            tracing::debug!(?event, phase = ?self.phase, "event ignored outside answer window");
            return Ok(());
        }
        match event {
            InputEvent::SubmitText { text } => self.submit_text(&text).await,
            InputEvent::ToggleChoice { value } => {
                self.toggle_choice(value);
                Ok(())
            }
            InputEvent::ConfirmSelection => self.confirm_selection().await,
        }
    }

    /// Drive the full session: boot, then process events until the session
    /// closes or the surface hangs up
    ///
    /// Input that arrived while the session was non-interactive is stale
    /// and gets dropped before the next wait, never replayed into an answer
    /// window.
    pub async fn run(mut self, mut events: mpsc::Receiver<InputEvent>) {
        if self.boot().await.is_err() {
            tracing::debug!("session closed during boot");
            return;
        }

        loop {
            // Anything queued while we were revealing or submitting is stale.
            while events.try_recv().is_ok() {}

            let event = tokio::select! {
                _ = self.close_rx.changed() => break,
                maybe = events.recv() => match maybe {
                    Some(event) => event,
                    None => break,
                },
            };

            if self.handle_event(event).await.is_err() {
                break;
            }
        }
        tracing::debug!("session ended");
    }

    /// Free-text submission path
    async fn submit_text(&mut self, raw: &str) -> Result<(), Cancelled> {
        // Past the last question: a confirm re-sends the recorded sheet.
        if self.question_index >= self.catalog.len() {
            return self.submit_form().await;
        }

        let catalog = self.catalog;
        let question = &catalog[self.question_index];
        let input = raw.trim();

        if let Some(validator) = question.validator {
            if let Some(error) = validator(input) {
                self.typewriter
                    .append(LineKind::Error, &format!("! ERROR: {error}"));
                return Ok(());
            }
        }

        if input.is_empty() && !question.is_optional() {
            self.typewriter.append(LineKind::Error, REQUIRED_ERROR);
            return Ok(());
        }

        let echo = if input.is_empty() {
            EMPTY_ANSWER_ECHO.to_string()
        } else {
            input.to_string()
        };
        self.accept_answer(input.to_string(), &echo).await
    }

    /// Toggle one choice value of the current choice question
    ///
    /// Multi-select toggles membership; single-select replaces. Values not
    /// in the question's choice set are ignored.
    fn toggle_choice(&mut self, value: String) {
        let catalog = self.catalog;
        let Some(question) = catalog.get(self.question_index) else {
            return;
        };
        if !question.has_choices() || question.label_for(&value).is_none() {
            return;
        }

        if question.allow_multiple {
            if let Some(pos) = self.pending_selection.iter().position(|v| *v == value) {
                self.pending_selection.remove(pos);
            } else {
                self.pending_selection.push(value);
            }
        } else {
            self.pending_selection.clear();
            self.pending_selection.push(value);
        }

        self.send(EngineMessage::SelectionChanged {
            values: self.pending_selection.clone(),
        });
    }

    /// Confirm the pending choice selection
    ///
    /// Requires at least one chosen value; stores the sorted, comma-joined
    /// values and echoes the matching labels.
    async fn confirm_selection(&mut self) -> Result<(), Cancelled> {
        if self.question_index >= self.catalog.len() {
            return self.submit_form().await;
        }

        let catalog = self.catalog;
        let question = &catalog[self.question_index];
        if !question.has_choices() || self.pending_selection.is_empty() {
            return Ok(());
        }

        let mut values = self.pending_selection.clone();
        values.sort_unstable();
        let stored = values.join(",");
        let labels: Vec<&str> = values
            .iter()
            .filter_map(|v| question.label_for(v))
            .collect();
        let echo = labels.join(", ");

        self.accept_answer(stored, &echo).await
    }

    /// Record an accepted answer, echo it, and advance or submit
    async fn accept_answer(&mut self, value: String, echo: &str) -> Result<(), Cancelled> {
        let catalog = self.catalog;
        let question = &catalog[self.question_index];
        self.answers.record(question.id, value);
        self.typewriter
            .append(LineKind::Answer, &format!("> {echo}"));

        self.pending_selection.clear();
        self.send(EngineMessage::SelectionChanged { values: Vec::new() });

        self.question_index += 1;

        if self.question_index < self.catalog.len() {
            self.transition_pause().await?;
            self.present_question().await
        } else {
            self.submit_form().await
        }
    }

    /// The short breathing pause between questions
    async fn transition_pause(&mut self) -> Result<(), Cancelled> {
        self.typewriter
            .append_after(LineKind::System, ">", self.scaled(200))
            .await?;
        self.typewriter
            .append_after(LineKind::Loading, "> ", self.scaled(400))
            .await?;
        self.typewriter.remove_last();
        Ok(())
    }

    /// Announce and reveal the current question, then open the answer window
    async fn present_question(&mut self) -> Result<(), Cancelled> {
        let catalog = self.catalog;
        let question = &catalog[self.question_index];

        self.send(EngineMessage::QuestionPresented {
            index: self.question_index,
            total: catalog.len(),
            placeholder: question.placeholder.map(str::to_string),
            choices: question
                .choices
                .iter()
                .map(|c| ChoiceView {
                    value: c.value.to_string(),
                    label: c.label.to_string(),
                })
                .collect(),
            allow_multiple: question.allow_multiple,
        });

        self.set_phase(Phase::Typing);
        let prompt = self.config.profile.prompt_for(question);
        let char_delay = self.config.effective_char_delay();
        self.typewriter.reveal_block(prompt, char_delay).await?;
        self.set_phase(Phase::AwaitingAnswer);
        Ok(())
    }

    /// Deliver the answer sheet through the backend, once
    async fn submit_form(&mut self) -> Result<(), Cancelled> {
        if self.phase == Phase::Completed {
            return Ok(());
        }
        self.set_phase(Phase::Submitting);

        self.typewriter
            .append_after(LineKind::System, ">", self.fixed(300))
            .await?;
        self.typewriter
            .append_after(LineKind::Loading, "> ", self.fixed(500))
            .await?;

        let result = self.backend.submit(&self.answers).await;
        self.typewriter.remove_last();

        match result {
            Ok(()) => {
                tracing::info!(backend = self.backend.name(), "registration submitted");
                self.success_epilogue().await?;
                self.set_phase(Phase::Completed);
                self.send(EngineMessage::SessionComplete);
            }
            Err(error) => {
                tracing::warn!(%error, backend = self.backend.name(), "submission failed");
                self.typewriter.append(LineKind::Error, SUBMIT_FAILED);
                self.typewriter.append(
                    LineKind::Error,
                    &format!("! Try again or write to: {}", self.config.contact),
                );
                // Back to the answer window past the last question; a fresh
                // confirm re-sends the same sheet.
                self.set_phase(Phase::AwaitingAnswer);
            }
        }
        Ok(())
    }

    /// The confirmation summary printed after a successful submission
    async fn success_epilogue(&mut self) -> Result<(), Cancelled> {
        let email = self.answers.value_or_empty("email").to_string();
        let name = self.answers.value_or_empty("name").to_string();
        let project = self.answers.value_or_empty("project").to_string();
        let video = self.answers.value_or_empty("loom").to_string();

        self.typewriter
            .append_after(
                LineKind::System,
                "> Registration complete",
                self.fixed(200),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::System,
                &format!("> We'll reach out within 24-48h at: {email}"),
                self.fixed(300),
            )
            .await?;
        self.typewriter
            .append_after(LineKind::System, ">", self.fixed(200))
            .await?;
        self.typewriter
            .append_after(
                LineKind::System,
                "> Application summary:",
                self.fixed(300),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::Answer,
                &format!("  Name: {name}"),
                self.fixed(100),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::Answer,
                &format!("  Email: {email}"),
                self.fixed(100),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::Answer,
                &format!("  Project: {project}"),
                self.fixed(100),
            )
            .await?;
        self.typewriter
            .append_after(
                LineKind::Answer,
                &format!("  Video: {video}"),
                self.fixed(100),
            )
            .await?;
        self.typewriter
            .append_after(LineKind::System, ">", self.fixed(200))
            .await?;
        self.typewriter
            .append(LineKind::System, "> Press ESC to close");
        Ok(())
    }
}
