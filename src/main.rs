mod app;
mod config;
mod logging;
mod redirect;
mod registration;
mod ui;
mod webhook;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::route::Route;
use crate::app::state::AppState;
use crate::webhook::delivery::BestEffortDelivery;
use crate::webhook::manager::WebhookManager;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_path = logging::init_tracing(&cfg.logging);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        webhook = %cfg.webhook.url,
        log = ?log_path,
        "Starting"
    );

    let route = std::env::args()
        .nth(1)
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Landing);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg.clone(), route).await;

    // Restore terminal
    restore_terminal()?;

    match result {
        Ok(Some(url)) => {
            println!("Registration submitted. Continue at: {}", url);
            if cfg.redirect.open_browser {
                if let Err(e) = redirect::open_in_browser(&url) {
                    tracing::warn!(error = %e, "Could not open browser");
                }
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "Exited with error");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the event loop until the user quits or a redirect is due. Returns the
/// redirect URL, if any.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    route: Route,
) -> Result<Option<String>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let delivery = BestEffortDelivery::new(cfg.webhook.url.clone())
        .context("Failed to build the webhook HTTP client")?;
    let webhook_manager = WebhookManager::new(delivery, event_tx.clone());
    let tick_ms = cfg.ui.tick_ms.max(1);
    let mut state = AppState::new(cfg, route);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::Submit { form_id, payload } => {
                    webhook_manager.submit(form_id, payload);
                }
                Action::ScheduleRedirect { url, delay } => {
                    redirect::schedule(url, delay, event_tx.clone());
                }
                Action::Redirect { url } => {
                    state.redirect_to = Some(url);
                    state.should_quit = true;
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(state.redirect_to.take())
}
