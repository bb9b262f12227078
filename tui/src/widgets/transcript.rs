//! Transcript Widget
//!
//! A borderless, bottom-anchored viewport over the session transcript.
//! Lines wrap to the viewport width, keep their kind's color, and loading
//! placeholders get animated trailing dots.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;

use intake_core::{LineKind, OutputLine};

use crate::theme;

/// State for the transcript viewport
#[derive(Default)]
pub struct TranscriptState {
    /// Scroll offset in wrapped lines from the bottom (0 = latest)
    pub scroll_offset: usize,
    /// Total wrapped lines at the last render
    pub total_lines: usize,
}

impl TranscriptState {
    /// Scroll towards older content
    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.total_lines.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    /// Scroll towards the latest content
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Jump back to the latest content
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

/// The bottom-anchored transcript viewport
pub struct TranscriptView<'a> {
    lines: &'a [OutputLine],
    tick: u64,
}

impl<'a> TranscriptView<'a> {
    /// View over the given transcript lines
    pub fn new(lines: &'a [OutputLine]) -> Self {
        Self { lines, tick: 0 }
    }

    /// Animation tick, used for the loading dots
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn display_text(&self, line: &OutputLine) -> String {
        if line.kind == LineKind::Loading {
            let dots = 1 + (self.tick % 3) as usize;
            format!("{}{}", line.text, ".".repeat(dots))
        } else {
            line.text.clone()
        }
    }
}

impl StatefulWidget for TranscriptView<'_> {
    type State = TranscriptState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width < 2 || area.height < 1 {
            return;
        }

        // Wrap every transcript line to the viewport width
        let width = area.width as usize;
        let mut wrapped: Vec<(String, LineKind)> = Vec::new();
        for line in self.lines {
            let text = self.display_text(line);
            if text.is_empty() {
                wrapped.push((String::new(), line.kind));
            } else {
                for piece in wrap(&text, width) {
                    wrapped.push((piece.to_string(), line.kind));
                }
            }
        }

        state.total_lines = wrapped.len();

        // Bottom-anchored visible window, offset lines up from the latest
        let height = area.height as usize;
        let max_scroll = wrapped.len().saturating_sub(height);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        let end = wrapped.len().saturating_sub(state.scroll_offset);
        let start = end.saturating_sub(height);

        for (i, (text, kind)) in wrapped[start..end].iter().enumerate() {
            let y = area.y + i as u16;
            buf.set_string(area.x, y, text, theme::line_style(*kind));
        }
    }
}
