//! Terminal UI for laser tic-tac-toe.
//!
//! A blocking task forwards key presses over a channel; the main loop
//! redraws on every key and on a short animation tick, which is also what
//! hands settled lasers back to the engine.

mod app;
mod effects;
mod input;
mod ui;

pub use app::{App, Flow};
pub use effects::{LaserAnimation, LaserPhase};
pub use input::move_cursor;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

const TICK: Duration = Duration::from_millis(50);
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting laser tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let app = App::new(&config);
    let res = run_app(&mut terminal, app, &mut key_rx).await;

    // Dropping the receiver stops the reader at its next poll.
    drop(key_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match reader.await {
        Ok(Err(e)) => error!(error = %e, "Key reader failed"),
        Err(e) => error!(error = %e, "Key reader panicked"),
        Ok(Ok(())) => debug!("Key reader stopped"),
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    key_rx: &mut mpsc::UnboundedReceiver<KeyCode>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(TICK);

    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, &app, now))?;

        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    debug!("Key channel closed");
                    return Ok(());
                };
                if app.handle_key(key, Instant::now()) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            _ = ticker.tick() => app.tick(Instant::now()),
        }
    }
}

/// Reads key presses until the receiving side goes away.
fn read_keys(tx: mpsc::UnboundedSender<KeyCode>) -> io::Result<()> {
    while !tx.is_closed() {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && tx.send(key.code).is_err()
        {
            break;
        }
    }
    Ok(())
}
