//! The terminal application.
//!
//! Owns the event loop: a one-second clock tick, the refresh tick (which
//! fires immediately at startup, then every configured interval), and the
//! keyboard. Both timer chains consult the controller's running flag;
//! Escape (or Ctrl-C, the closest thing a terminal has to closing the
//! window) asks the controller to stop, and the next refresh tick tears
//! the terminal down and returns.
//!
//! The fetch is awaited inline in the refresh arm, so while a request is
//! in flight no other arm runs: a slow network call freezes the clock and
//! queues keypresses until it returns (bounded by the client timeout).

use std::io;
use std::time::Duration;

use chrono::Local;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::board::{BoardController, LineBuffer};
use crate::config::Config;
use crate::darwin::BoardSource;
use crate::domain::Crs;

use super::draw::{self, BoardView};
use super::style::Palette;

/// The running application.
pub struct App {
    crs: Crs,
    rows: usize,
    refresh_secs: u64,
    padding: u16,
    palette: Palette,
    source: BoardSource,
    controller: BoardController,
    buffer: LineBuffer,
    status_row: usize,
    clock: String,
    notices: Option<Vec<String>>,
    title_applied: bool,
}

impl App {
    pub fn new(config: &Config, palette: Palette, source: BoardSource) -> Self {
        Self {
            crs: config.crs,
            rows: config.rows,
            refresh_secs: config.refresh_secs,
            padding: config.style.padding,
            palette,
            source,
            controller: BoardController::new(config.rows),
            buffer: LineBuffer::new(config.rows),
            status_row: 0,
            clock: Local::now().format("%H:%M:%S").to_string(),
            notices: None,
            title_applied: false,
        }
    }

    /// Set up the terminal, run the event loop, restore the terminal.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        // Keyboard events are read on a blocking task and forwarded here
        let (tx, mut rx) = mpsc::channel::<Event>(64);
        tokio::task::spawn_blocking(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        let mut clock = tokio::time::interval(Duration::from_secs(1));
        clock.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // The first tick is immediate, so the board populates at startup
        let mut refresh = tokio::time::interval(Duration::from_secs(self.refresh_secs));
        refresh.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| draw::draw(f, &self.view()))?;

            tokio::select! {
                Some(ev) = rx.recv() => self.handle_event(ev),

                _ = clock.tick() => {
                    if self.controller.is_running() {
                        self.clock = Local::now().format("%H:%M:%S").to_string();
                    }
                }

                _ = refresh.tick() => {
                    if !self.controller.is_running() {
                        info!("stop requested, shutting down");
                        break;
                    }
                    self.refresh().await;
                    if !self.title_applied {
                        if let Some(title) = self.controller.title() {
                            execute!(io::stdout(), SetTitle(title))?;
                            self.title_applied = true;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// One refresh cycle: fetch, then hand the outcome to the controller.
    async fn refresh(&mut self) {
        match self.source.get_departure_board(&self.crs, self.rows as u8).await {
            Ok(board) => {
                debug!(
                    services = board.services.len(),
                    notices = board.notices.len(),
                    "board received"
                );
                if let Some(messages) = self.controller.first_refresh_notices(Some(&board)) {
                    self.notices = Some(messages);
                }
                // Set before rendering so a field-error report wins
                self.controller.set_status("OK");
                let update = self.controller.render(Some(&board));
                self.buffer.apply(&update.ops);
                self.status_row = update.status_row;
            }
            Err(e) => {
                warn!(error = %e, "departure board fetch failed");
                self.controller.first_refresh_notices(None);
                let update = self.controller.render(None);
                self.buffer.apply(&update.ops);
                self.status_row = update.status_row;
                // Set after rendering so the error text is what remains
                self.controller.set_status(format!("Web service error: {e}"));
            }
        }
    }

    fn handle_event(&mut self, ev: Event) {
        let Event::Key(key) = ev else { return };
        if key.kind == KeyEventKind::Release {
            return;
        }

        // The notices overlay swallows every key
        if self.notices.is_some() {
            self.notices = None;
            return;
        }

        match key.code {
            KeyCode::Esc => self.controller.stop(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.stop();
            }
            _ => {}
        }
    }

    fn view(&self) -> BoardView<'_> {
        BoardView {
            clock: &self.clock,
            buffer: &self.buffer,
            status: self.controller.status(),
            status_row: self.status_row,
            notices: self.notices.as_deref(),
            palette: &self.palette,
            padding: self.padding,
        }
    }
}
