mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::ChatConfig;
use controller::AppController;
use model::{AppModel, DiskManager, FsItemSource};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== greenfield-rs starting ===");

    let work_dir = resolve_work_dir()?;
    tracing::info!(work_dir = %work_dir.display(), "work directory resolved");

    let chat_config = ChatConfig::load();
    if chat_config.is_configured() {
        // Persist so an env-seeded key survives restarts
        if let Err(e) = chat_config.save() {
            tracing::warn!(error = %e, "could not persist chat config");
        }
    }

    let disk = DiskManager::new(Arc::new(FsItemSource), work_dir.clone());
    let model = Arc::new(AppModel::new(disk, chat_config));
    let controller = AppController::new(model.clone());

    controller.load_initial_content().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, &work_dir).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("greenfield-rs shutting down");
    Ok(())
}

/// Work directory for the disk browser: `GREENFIELD_WORK_DIR` if set,
/// otherwise the current directory.
fn resolve_work_dir() -> Result<PathBuf> {
    match std::env::var_os("GREENFIELD_WORK_DIR") {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
    work_dir: &std::path::Path,
) -> io::Result<()> {
    let work_dir = work_dir.display().to_string();

    loop {
        // Get current state snapshots
        let ui_state = model.get_ui_state().await;
        let disk_state = model.disk.state().await;
        let feed_state = model.get_feed_state().await;
        let chat_state = model.get_chat_state().await;
        let should_quit = model.should_quit().await;

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &disk_state, &feed_state, &chat_state, &work_dir);
        })?;

        // Handle input with short poll time for smooth UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
