//! The interactive directory browser: a raw-mode crossterm loop that
//! feeds key events into the gallery state and redraws each tick.

mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rolodeck_engine::{Gallery, NavDirection};
use std::io;
use std::time::Duration;

use app::{AppState, GRID_COLUMNS};

pub(crate) fn run(gallery: Gallery, notice: Option<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = AppState::new(gallery, notice);
    let tick_rate = Duration::from_millis(250);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    app.should_quit = true;
                } else if app.overlay_open() {
                    // The overlay captures input, like a modal dialog.
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('x') => app.close_overlay(),
                        KeyCode::Left => app.step_overlay(NavDirection::Prev),
                        KeyCode::Right => app.step_overlay(NavDirection::Next),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Esc => app.on_escape(),
                        KeyCode::Enter => app.open_selected(),
                        KeyCode::Backspace => app.filter_backspace(),
                        KeyCode::Left => app.move_cursor(-1),
                        KeyCode::Right => app.move_cursor(1),
                        KeyCode::Up => app.move_cursor(-(GRID_COLUMNS as isize)),
                        KeyCode::Down => app.move_cursor(GRID_COLUMNS as isize),
                        KeyCode::Char(c) => app.filter_push(c),
                        _ => {}
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
