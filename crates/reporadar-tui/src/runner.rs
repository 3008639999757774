// TUI event loop and terminal management
use crate::{App, InputMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop: draw, wait for a key, mutate state, repeat. Every state
    // mutation happens on this one thread, so each draw sees a state that
    // was applied as a whole.
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.detail_open() {
                match key.code {
                    KeyCode::Esc | KeyCode::Backspace => {
                        app.close_detail();
                    }
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    _ => {}
                }
                continue;
            }

            match app.input_mode {
                InputMode::Searching => match key.code {
                    KeyCode::Enter => {
                        // Guard lives in the controller too; checking here
                        // keeps the mode switch out of the empty case
                        if !app.search_input.is_empty() {
                            let language = app.search_input.clone();
                            run_search(&mut terminal, &mut app, &language).await?;
                            app.enter_normal_mode();
                        }
                    }
                    KeyCode::Char(c) => {
                        app.search_input.push(c);
                    }
                    KeyCode::Backspace => {
                        app.search_input.pop();
                    }
                    KeyCode::Esc => {
                        app.enter_normal_mode();
                    }
                    _ => {}
                },
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Char('/') => {
                        app.enter_search_mode();
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.next_result();
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.previous_result();
                    }
                    KeyCode::Enter => {
                        app.open_highlighted();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Run one search, drawing the in-progress frame before the request goes
/// out so the status line actually shows "Searching...".
async fn run_search(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    language: &str,
) -> anyhow::Result<()> {
    let Some(ticket) = app.controller.begin_search(language) else {
        return Ok(());
    };
    terminal.draw(|f| crate::ui::render(f, app))?;

    let result = app.controller.perform(&ticket).await;
    app.controller.finish_search(ticket, result);
    app.reset_highlight();
    Ok(())
}
