//! Theme and Colors
//!
//! The intake terminal's neon-on-black palette: green for prompts and
//! input, blue for system chatter, pink for errors and notices.

use ratatui::style::{Color, Modifier, Style};

use intake_core::LineKind;

// ============================================================================
// Neon Palette
// ============================================================================

/// Prompts, input, accents
pub const NEON_GREEN: Color = Color::Rgb(134, 239, 172);

/// System/boot chatter and loading dots
pub const NEON_BLUE: Color = Color::Rgb(103, 232, 249);

/// Errors and notices
pub const NEON_PINK: Color = Color::Rgb(244, 114, 182);

/// Echoed answers and regular text
pub const FOREGROUND: Color = Color::Rgb(229, 231, 235);

/// Dim chrome text (footer, placeholder)
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

// ============================================================================
// Styles
// ============================================================================

/// Style for a transcript line of the given kind
pub fn line_style(kind: LineKind) -> Style {
    let color = match kind {
        LineKind::System => NEON_BLUE,
        LineKind::Question => NEON_GREEN,
        LineKind::Answer => FOREGROUND,
        LineKind::Error => NEON_PINK,
        LineKind::Loading => NEON_BLUE,
    };
    Style::default().fg(color)
}

/// Style for an unselected choice button
pub fn choice_style() -> Style {
    Style::default().fg(NEON_GREEN)
}

/// Style for a selected choice button
pub fn choice_selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(NEON_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Style for chrome (header/footer) text
pub fn chrome_style() -> Style {
    Style::default().fg(DIM_GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_palette() {
        assert_eq!(line_style(LineKind::Question).fg, Some(NEON_GREEN));
        assert_eq!(line_style(LineKind::Error).fg, Some(NEON_PINK));
        assert_eq!(line_style(LineKind::System).fg, Some(NEON_BLUE));
        assert_eq!(line_style(LineKind::Answer).fg, Some(FOREGROUND));
    }
}
