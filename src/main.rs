// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! # Audioshelf.
//!
//! A terminal music library: browse, filter, play and edit the tracks of a
//! local SQLite catalogue.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! libmpv playback worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the library
//!   database and renders the UI.
//! * The **Playback Worker** drives libmpv and reports media events back.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the threads is handled via `std::sync::mpsc` channels.

mod actions;
mod browser;
mod commander;
mod components;
mod config;
mod db;
mod editor;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    browser::Browser,
    commander::Commander,
    components::{FilterPanel, dialog::Dialog},
    editor::Editor,
    events::{AppEvent, forward_terminal_events, process_events},
    player::{MpvEngine, PlaybackEngine},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Application state.
struct App<P: PlaybackEngine> {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub browser: Browser<P>,

    pub filter_panel: FilterPanel,
    pub editor: Option<Editor>,
    pub dialog: Option<Dialog>,

    pub commander: Commander,
}

impl<P: PlaybackEngine> App<P> {
    /// Create a new instance of application state around an opened library.
    pub fn new(
        browser: Browser<P>,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
    ) -> Self {
        let filter_panel = FilterPanel::new(browser.genres().to_vec());

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            browser,
            filter_panel,
            editor: None,
            dialog: None,
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, opens the library, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    logging::init_logging(&config.log_file).context("Failed to initialise logging")?;
    log::info!("Starting with library root {}", config.library_root.display());

    let (event_tx, event_rx) = mpsc::channel();

    let engine = MpvEngine::new(event_tx.clone());

    let conn = db::init_db(&config.database_path()).context("Failed to open the library")?;
    let browser = Browser::new(conn, engine, config.library_paths(), config.default_volume)
        .context("Failed to load the library")?;

    let mut app = App::new(browser, event_tx, event_rx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal<P: PlaybackEngine>(
    app: &App<P>,
) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function does not return a result, as it is called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// * An input thread forwards keyboard and mouse events.
/// * A tick thread drives the position display while a track plays.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run<P: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<P>,
) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || forward_terminal_events(event::read, &tx_input));

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
