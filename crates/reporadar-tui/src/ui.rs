// UI rendering logic - a search/list view and a detail view
use crate::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use reporadar_core::{models::Repository, SearchPhase};

/// Fixed placeholders for fields the server left empty. Options never
/// leak past this module.
const NO_LANGUAGE: &str = "N/A";
const NO_DESCRIPTION: &str = "No description";

pub fn render(frame: &mut Frame, app: &mut App) {
    if let Some(repo) = app.controller.selected_repository() {
        render_detail(frame, repo);
    } else {
        render_search(frame, app);
    }
}

fn render_search(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Language input
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Result list
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_search_input(frame, app, chunks[1]);
    render_status_line(frame, app, chunks[2]);
    render_results_list(frame, app, chunks[3]);
    render_key_hints(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "RepoRadar - popular repositories of the last 30 days",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input_mode == InputMode::Searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(app.search_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Language (e.g. kotlin, python)"),
    );
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Searching {
        // Cursor sits right after the typed text
        frame.set_cursor_position((
            area.x + input_cursor_offset(&app.search_input, area),
            area.y + 1,
        ));
    }
}

/// Column offset of the cursor within the input box: one past the typed
/// text, counted in chars (byte length misplaces it on multi-byte input)
/// and clamped so long input cannot walk past the border.
fn input_cursor_offset(input: &str, area: Rect) -> u16 {
    let typed = input.chars().count().min(u16::MAX as usize) as u16;
    (typed + 1).min(area.width.saturating_sub(2))
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let color = match state.phase {
        SearchPhase::Idle => Color::DarkGray,
        SearchPhase::Searching => Color::Yellow,
        SearchPhase::Results { .. } => Color::Green,
        SearchPhase::Failed => Color::Red,
    };

    let status = Paragraph::new(Line::from(Span::styled(
        state.status.as_str(),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(status, area);
}

fn render_results_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .controller
        .state()
        .repositories
        .iter()
        .map(result_row)
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn result_row(repo: &Repository) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            repo.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("⭐ {}", repo.stars),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            repo.language.as_deref().unwrap_or(NO_LANGUAGE),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]))
}

fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Searching => "Enter: search | Esc: browse results",
        InputMode::Normal => "/: edit language | j/k: move | Enter: details | q: quit",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

fn render_detail(frame: &mut Frame, repo: &Repository) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(1), // Owner
            Constraint::Length(1), // Stars
            Constraint::Length(2), // Language
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let name = Paragraph::new(Span::styled(
        repo.name.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(name, chunks[0]);

    let owner = Paragraph::new(format!("by {}", repo.owner))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(owner, chunks[1]);

    let stars = Paragraph::new(format!("⭐ {} stars", repo.stars))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(stars, chunks[2]);

    let language = Paragraph::new(format!(
        "Language: {}",
        repo.language.as_deref().unwrap_or(NO_LANGUAGE)
    ))
    .style(Style::default().add_modifier(Modifier::ITALIC));
    frame.render_widget(language, chunks[3]);

    let description = Paragraph::new(
        repo.description.as_deref().unwrap_or(NO_DESCRIPTION),
    )
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Description"));
    frame.render_widget(description, chunks[4]);

    let hints = Paragraph::new("Esc/Backspace: back | q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn bare_repo() -> Repository {
        Repository {
            name: "A".to_string(),
            description: None,
            stars: 10,
            language: None,
            owner: "u1".to_string(),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn detail_view_renders_placeholders_for_absent_fields() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let repo = bare_repo();

        terminal.draw(|f| render_detail(f, &repo)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Language: N/A"));
        assert!(text.contains("No description"));
        assert!(text.contains("by u1"));
    }

    #[test]
    fn detail_view_shows_real_fields_when_present() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut repo = bare_repo();
        repo.description = Some("desc".to_string());
        repo.language = Some("Kotlin".to_string());

        terminal.draw(|f| render_detail(f, &repo)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Language: Kotlin"));
        assert!(text.contains("desc"));
        assert!(!text.contains("No description"));
    }

    #[test]
    fn result_row_renders_language_placeholder() {
        let backend = TestBackend::new(60, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let repo = bare_repo();

        terminal
            .draw(|f| {
                let list = List::new(vec![result_row(&repo)]);
                f.render_widget(list, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains('A'));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn cursor_offset_counts_chars_not_bytes() {
        let area = Rect::new(0, 0, 40, 3);
        // 5 chars, 6 bytes
        assert_eq!(input_cursor_offset("héllo", area), 6);
        assert_eq!(input_cursor_offset("", area), 1);
    }

    #[test]
    fn cursor_offset_is_clamped_to_the_box() {
        let area = Rect::new(0, 0, 10, 3);
        let long = "x".repeat(50);
        assert_eq!(input_cursor_offset(&long, area), 8);
    }
}
