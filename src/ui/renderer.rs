//! Terminal setup and the main event loop
//!
//! The loop is the sole owner of all UI state. It waits on the union of
//! terminal events, the change feed, the error channel, and the error
//! expiry timer, applies exactly one event at a time, and renders once per
//! iteration. Store commands run on their own tasks and report back only
//! through the channels.

use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::config::Config;
use crate::store::{document, local::LocalStore, Command, Item, StoreGateway};

use super::actions::Action;
use super::app::App;
use super::components::{ErrorBar, InputDialog, StatusBar, TaskList};
use super::events::handle_event;
use super::layout::LayoutManager;

/// Run the TUI application against the bundled local store
pub async fn run_app(config: Config) -> Result<()> {
    let store = LocalStore::connect(&config.store).await?;
    let gateway: Arc<dyn StoreGateway> = Arc::new(store);

    // One-slot change feed: a slow consumer only ever sees the latest
    // snapshot, older pending ones are overwritten rather than queued.
    let (feed_tx, feed_rx) = watch::channel(Vec::new());
    let (error_tx, error_rx) = mpsc::channel(8);

    let query = Command::visible_items_query(&config.store.collection);
    let observer = gateway
        .observe(
            &query,
            Box::new(move |docs| {
                feed_tx.send_replace(document::decode_snapshot(&docs));
            }),
        )
        .await
        .context("Failed to register store observer")?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_ui(&mut terminal, &mut app, &config, gateway, feed_rx, error_rx, error_tx).await;

    // Cleanup
    drop(observer);
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main event loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    config: &Config,
    gateway: Arc<dyn StoreGateway>,
    mut feed_rx: watch::Receiver<Vec<Item>>,
    mut error_rx: mpsc::Receiver<String>,
    error_tx: mpsc::Sender<String>,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(action) = handle_event(&event, app) {
                            dispatch(&gateway, &config.store.collection, action, &error_tx);
                        }
                    }
                    Some(Err(err)) => return Err(err).context("Terminal event stream failed"),
                    None => break,
                }
            }
            changed = feed_rx.changed() => {
                if changed.is_ok() {
                    app.apply_snapshot(feed_rx.borrow_and_update().clone());
                }
            }
            Some(message) = error_rx.recv() => {
                app.set_error(message);
            }
            () = error_expiry(app.error_deadline()) => {
                app.clear_error();
            }
        }

        if app.should_quit {
            break;
        }
    }

    log::info!("Event loop terminated");
    Ok(())
}

/// Fire-and-forget dispatch. Failures come back through the error channel,
/// never by blocking the keystroke that triggered them; once dispatched, a
/// command cannot be cancelled.
fn dispatch(gateway: &Arc<dyn StoreGateway>, collection: &str, action: Action, errors: &mpsc::Sender<String>) {
    let command = match action {
        Action::CreateItem(item) => Command::insert_item(collection, &item),
        Action::EditTitle { id, title } => Command::set_title(collection, &id, &title),
        Action::ToggleDone { id, done } => Command::set_done(collection, &id, done),
        Action::SoftDelete { id } => Command::soft_delete(collection, &id),
    };

    let gateway = Arc::clone(gateway);
    let errors = errors.clone();
    tokio::spawn(async move {
        if let Err(err) = gateway.execute(command).await {
            log::error!("Store command failed: {err}");
            // Delivery is abandoned when the loop has already exited.
            let _ = errors.send(err.to_string()).await;
        }
    });
}

/// Resolves when the active error should be cleared; pends forever while no
/// error is showing so the select arm stays quiet.
async fn error_expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = LayoutManager::main_layout(f.area(), app.error_message().is_some());

    TaskList::render(f, chunks[0], app);
    ErrorBar::render(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);
    InputDialog::render(f, app);
}
