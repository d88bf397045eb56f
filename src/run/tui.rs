use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::LedgerSource;
use crate::models::BudgetTable;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(source: &dyn LedgerSource, budget: BudgetTable, currency: String) -> Result<()> {
    let mut app = App::new(budget, currency);
    app.reload(source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, source);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "dashboard exited with an error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &dyn LedgerSource,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + selector + status + command bars, table borders and header
            let content_height = f.area().height.saturating_sub(7) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, source),
                InputMode::Command => handle_command_input(key, app, source)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, source: &dyn LedgerSource) {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        // Also covers Ctrl-q
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => scroll_down(
            &mut app.record_index,
            &mut app.record_scroll,
            app.records.len(),
            app.visible_rows,
        ),
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.record_index, &mut app.record_scroll)
        }
        KeyCode::Char('g') | KeyCode::Home => {
            scroll_to_top(&mut app.record_index, &mut app.record_scroll)
        }
        KeyCode::Char('G') | KeyCode::End => scroll_to_bottom(
            &mut app.record_index,
            &mut app.record_scroll,
            app.records.len(),
            app.visible_rows,
        ),
        KeyCode::Char('H') | KeyCode::Left => app.shift_month(-1),
        KeyCode::Char('L') | KeyCode::Right => app.shift_month(1),
        KeyCode::Char('[') => app.shift_year(-1),
        KeyCode::Char(']') => app.shift_year(1),
        KeyCode::Char('1') => switch_screen(app, Screen::Records),
        KeyCode::Char('2') => switch_screen(app, Screen::Report),
        KeyCode::Tab | KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, screens[next]);
        }
        KeyCode::Enter => {
            if app.selected_period().is_some() {
                app.generate_report();
            } else {
                app.set_status("Please select month and year first");
            }
        }
        KeyCode::Char('r') => app.reload(source),
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(
    key: event::KeyEvent,
    app: &mut App,
    source: &dyn LedgerSource,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, source)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.set_status(format!("{screen}"));
}
