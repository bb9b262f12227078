//! Intake TUI entry point
//!
//! Sets up logging and the terminal, runs the session, and restores the
//! terminal on the way out.

use std::io;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use intake_tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the alternate screen stays clean; silence by
    // default, opt in with INTAKE_LOG=debug etc.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("INTAKE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = match App::new() {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(e) => Err(e),
    };

    // Always restore the terminal, even when the session errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
