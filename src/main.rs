//! Folio TUI - a personal portfolio page in the terminal
//!
//! A Ratatui-based TUI that renders portfolio content as one scrolling page
//! with section navigation, scroll reveals and a validated contact form.

mod app;
mod config;
mod platform;
mod state;
mod transport;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::FolioConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::Portfolio;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use transport::SimulatedSubmitter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval while something is animating (~60fps)
const FAST_POLL: Duration = Duration::from_millis(16);
/// Poll interval when idle
const IDLE_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
                .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| "folio_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FolioConfig::load().context("Failed to load configuration")?;
    let portfolio = Portfolio::load(config.content_path.as_deref())?;
    tracing::info!(
        name = %portfolio.owner.name,
        contact = portfolio.contact_email().unwrap_or("-"),
        "Welcome to the portfolio"
    );
    let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, portfolio, submitter, Instant::now());
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Keep the layout in step with the terminal size
        let term_size = terminal.size()?;
        if app.terminal_size != Some((term_size.height, term_size.width)) {
            app.resize(term_size.width, term_size.height);
        }

        // Update splash animation if active
        if app.in_splash() {
            app.update_splash(now, term_size.height);
        }
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        let poll_duration = if app.is_animating(now) {
            FAST_POLL
        } else {
            IDLE_POLL
        };

        // Handle crossterm events; submissions run on the runtime's worker threads
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key, Instant::now())?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, Instant::now())?;
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
