//! Rangeform TUI: edit the parameters of a TOML parameter document.
//!
//! Usage: `rangeform-tui [DOCUMENT]`. Without an argument the document
//! from the previous session is reopened.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use rangeform_core::{ParameterDocument, ParseMode};
use rangeform_tui::app::{AppState, Overlay};
use rangeform_tui::{input, persistence, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangeform");
    let state_path = config_dir.join("state.json");
    init_logging(&config_dir.join("rangeform-tui.log"));

    // Load persisted state
    let persisted = persistence::load(&state_path);

    let document_path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match &persisted.last_document {
            Some(path) => path.clone(),
            None => bail!("usage: rangeform-tui <DOCUMENT>"),
        },
    };
    let document = ParameterDocument::from_file(&document_path)
        .with_context(|| format!("open {}", document_path.display()))?;

    // Build app state
    let mut app = AppState::new(document, document_path, ParseMode::Lenient)?;
    persistence::apply(&mut app, &persisted);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save session state before exit
    let help_dismissed = persisted.help_dismissed || app.overlay != Overlay::Help;
    let state = persistence::extract(&app, help_dismissed);
    if let Err(e) = persistence::save(&state_path, &state) {
        log::warn!("could not save session state: {e:#}");
    }
    if app.dirty {
        log::info!("quit with unsaved edits to {}", app.document_path.display());
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    if std::fs::create_dir_all(parent).is_err() {
        return;
    }
    if let Ok(file) = File::create(path) {
        let config = ConfigBuilder::new().set_time_format_rfc3339().build();
        let _ = WriteLogger::init(LevelFilter::Debug, config, file);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Apply parameter change notifications
        app.drain_events();

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
