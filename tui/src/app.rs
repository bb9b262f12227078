//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize, frame ticks)
//! - EngineClient for the embedded question-flow engine
//! - DisplayState for rendering
//!
//! The App converts terminal events to `InputEvent`s, drains
//! `EngineMessage`s every frame, and renders from DisplayState. All session
//! logic (validation, sequencing, submission) lives in the engine task.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use intake_core::{DisplayProfile, EngineConfig, Phase};

use crate::display::DisplayState;
use crate::engine_client::EngineClient;
use crate::theme;
use crate::widgets::{TranscriptState, TranscriptView};

/// Header + footer rows around the transcript viewport
const CHROME_HEIGHT: u16 = 2;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Client for the embedded engine task
    client: EngineClient,
    /// Display state derived from EngineMessages
    display: DisplayState,
    /// Profile resolved once at startup
    profile: DisplayProfile,
    /// User input buffer
    input_buffer: String,
    /// Transcript viewport state
    transcript_state: TranscriptState,
    /// Frame counter for the loading-dots animation
    tick: u64,
    /// Terminal size
    size: (u16, u16),
}

impl App {
    /// Create a new App instance and spawn the engine
    pub fn new() -> anyhow::Result<Self> {
        let size = crossterm::terminal::size()?;
        let config = EngineConfig::load(Some(size.0))?;
        let profile = config.profile;
        tracing::debug!(?profile, "session starting");

        let client = EngineClient::new(config);

        Ok(Self {
            running: true,
            client,
            display: DisplayState::new(),
            profile,
            input_buffer: String::new(),
            transcript_state: TranscriptState::default(),
            tick: 0,
            size,
        })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~10 FPS is plenty for terminal-style animations
        let frame_duration = Duration::from_millis(100);
        let mut event_stream = EventStream::new();

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key).await;
                            }
                            Event::Resize(w, h) => {
                                self.size = (w, h);
                            }
                            _ => {}
                        }
                    }
                }

                _ = tokio::time::sleep(frame_duration) => {}
            }

            // Apply everything the engine produced since the last frame
            for msg in self.client.recv_all() {
                self.display.apply_message(msg);
            }

            self.tick = self.tick.wrapping_add(1);
            terminal.draw(|frame| render(frame, self))?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Whether the current question is presented as choice buttons
    fn choice_mode(&self) -> bool {
        self.profile == DisplayProfile::Compact
            && self.display.has_choices()
            && self.display.can_accept_input()
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            // Close works in every state
            KeyCode::Esc => {
                self.client.close();
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.client.close();
                self.running = false;
            }

            KeyCode::Enter => {
                // The final-question retry window has no choices on display,
                // so both paths reduce to a plain confirm.
                if self.choice_mode() {
                    if !self.display.selection.is_empty() {
                        self.client.confirm_selection().await;
                        self.transcript_state.scroll_to_bottom();
                    }
                } else if self.display.can_accept_input() {
                    let text = std::mem::take(&mut self.input_buffer);
                    self.client.submit_text(text).await;
                    self.transcript_state.scroll_to_bottom();
                }
            }

            KeyCode::Char(c) => {
                if self.choice_mode() {
                    // Digits toggle the matching choice
                    if let Some(choice) = self
                        .display
                        .choices
                        .iter()
                        .find(|choice| choice.value == c.to_string())
                    {
                        let value = choice.value.clone();
                        self.client.toggle_choice(value).await;
                    }
                } else if self.display.can_accept_input() {
                    self.input_buffer.push(c);
                }
            }

            KeyCode::Backspace => {
                self.input_buffer.pop();
            }

            KeyCode::PageUp => {
                self.transcript_state.scroll_up(self.size.1 as usize / 2);
            }
            KeyCode::PageDown => {
                self.transcript_state.scroll_down(self.size.1 as usize / 2);
            }

            _ => {}
        }
    }
}

/// Render one frame
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < 10 || area.height < CHROME_HEIGHT + 2 {
        return;
    }

    let show_buttons = app.choice_mode();
    let button_rows: u16 = if show_buttons { 2 } else { 0 };

    let [header_area, transcript_area, buttons_area, input_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(button_rows),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    render_header(frame, header_area);
    render_transcript(frame, transcript_area, app);
    if show_buttons {
        render_choice_buttons(frame, buttons_area, app);
    }
    render_input(frame, input_area, app, show_buttons);
    render_footer(frame, footer_area, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("terminal@hackerhouse", Style::default().fg(theme::NEON_GREEN)),
        Span::styled(":~/register", theme::chrome_style()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &mut App) {
    let view = TranscriptView::new(&app.display.lines).tick(app.tick);
    frame.render_stateful_widget(view, area, &mut app.transcript_state);
}

fn render_choice_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for choice in &app.display.choices {
        let style = if app.display.is_selected(&choice.value) {
            theme::choice_selected_style()
        } else {
            theme::choice_style()
        };
        spans.push(Span::styled(
            format!("[{}] {}", choice.value, choice.label),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    let hint = if app.display.allow_multiple {
        "numbers toggle, several allowed - ENTER to send"
    } else {
        "numbers pick one - ENTER to send"
    };

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(hint, theme::chrome_style())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, show_buttons: bool) {
    if show_buttons || !app.display.can_accept_input() {
        return;
    }

    let prompt_style = Style::default().fg(theme::NEON_GREEN);
    let mut spans = vec![Span::styled("> ", prompt_style)];

    if app.input_buffer.is_empty() {
        if let Some(placeholder) = &app.display.placeholder {
            spans.push(Span::styled(placeholder.clone(), theme::chrome_style()));
        }
    } else {
        // Keep the tail visible when the input outgrows the line
        let max_width = area.width.saturating_sub(4) as usize;
        let mut shown = app.input_buffer.as_str();
        while shown.width() > max_width {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }
        spans.push(Span::styled(
            shown.to_string(),
            Style::default().fg(theme::FOREGROUND),
        ));
    }

    spans.push(Span::styled("▋", prompt_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let (current, total) = app.display.progress();
    let progress = if total > 0 {
        format!(" {current}/{total}")
    } else {
        " booting".to_string()
    };

    let status = if app.display.completed {
        Phase::Completed.description()
    } else {
        app.display.phase.description()
    };

    let scroll_hint = if app.transcript_state.scroll_offset > 0 {
        format!(" [^{} lines - PgDn]", app.transcript_state.scroll_offset)
    } else {
        String::new()
    };

    let footer = format!("{progress} | {status} | ESC to exit{scroll_hint}");
    frame.render_widget(
        Paragraph::new(Span::styled(footer, theme::chrome_style())),
        area,
    );
}
