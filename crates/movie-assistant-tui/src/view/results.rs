use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use movie_assistant_core::state::{NO_MATCHES_TEXT, PLACEHOLDER_TEXT};
use movie_assistant_core::{Movie, ResultsView};

use crate::app::App;
use crate::model::form::Focus;
use crate::theme::Theme;
use crate::view::{clamp_lines, truncate};

/// Overview lines shown per card before clamping.
const OVERVIEW_LINES: usize = 2;

/// Render the results panel according to the session's results view.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Results;
    let border_style = if focused {
        theme.focus_border_style()
    } else {
        theme.border_style()
    };

    let count = app.session.results.len();
    let title = if count > 0 {
        format!(" Recommendations ({}) ", count)
    } else {
        " Recommendations ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    match app.session.results_view() {
        ResultsView::Placeholder => {
            render_message(f, area, block, PLACEHOLDER_TEXT, theme);
        }
        ResultsView::NoMatches => {
            render_message(f, area, block, NO_MATCHES_TEXT, theme);
        }
        ResultsView::Grid => {
            let card_width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = app
                .session
                .results
                .iter()
                .map(|m| ListItem::new(card_text(m, card_width, theme)))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(theme.highlight_style())
                .highlight_symbol("\u{258C}");

            let mut state = ListState::default();
            if focused {
                state.select(Some(app.results_cursor.min(count.saturating_sub(1))));
            }
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, block: Block, message: &str, theme: &Theme) {
    let top_pad = (area.height.saturating_sub(2) / 2).saturating_sub(1) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); top_pad];
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
    )));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// One result card: title with year and match badge, clamped overview, spacer.
fn card_text(movie: &Movie, width: usize, theme: &Theme) -> Text<'static> {
    let pct = movie.match_percent();
    let badge = format!(" {}% Match ", pct);
    let year = if movie.year.is_empty() {
        String::new()
    } else {
        format!(" ({})", movie.year)
    };
    let title_room = width
        .saturating_sub(badge.chars().count() + year.chars().count() + 2)
        .max(8);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            truncate(&movie.title, title_room),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(year, Style::default().fg(theme.dim)),
        Span::raw(" "),
        Span::styled(
            badge,
            Style::default()
                .fg(theme.score_color(pct))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
    ])];

    let overview = clamp_lines(&movie.overview, width.saturating_sub(2), OVERVIEW_LINES);
    for i in 0..OVERVIEW_LINES {
        let text = overview.get(i).cloned().unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(""));
    Text::from(lines)
}
