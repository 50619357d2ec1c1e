use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{centered_rect, truncate};

/// Render the movie detail modal for the session's active selection.
pub fn render(f: &mut Frame, app: &App) {
    let Some(movie) = app.session.selected.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let area = f.area();
    let width = area.width.saturating_sub(8).clamp(30, 80);
    let height = area.height.saturating_sub(4).clamp(10, 24);
    let popup = centered_rect(width, height, area);

    let mut lines: Vec<Line> = Vec::new();

    // Meta row
    let mut meta = Vec::new();
    if !movie.year.is_empty() {
        meta.push(format!("\u{1F4C5} {}", movie.year));
    }
    meta.push(format!("\u{23F1} {} min", movie.runtime));
    meta.push(format!("\u{2B50} {}/10", movie.rating));
    lines.push(Line::from(Span::styled(
        format!("  {}", meta.join("   ")),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::from(""));

    // Tags
    let pct = movie.match_percent();
    let mut tags = vec![
        Span::raw("  "),
        Span::styled(
            format!(" {}% Match ", pct),
            Style::default()
                .fg(theme.score_color(pct))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
    ];
    for genre in movie.genre_tags() {
        tags.push(Span::raw(" "));
        tags.push(Span::styled(
            format!(" {} ", genre),
            Style::default().fg(theme.tag).add_modifier(Modifier::REVERSED),
        ));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));

    section_header(&mut lines, "Plot Summary", theme);
    lines.push(Line::from(Span::styled(
        format!("  {}", movie.overview),
        Style::default().fg(theme.text),
    )));

    let position = app
        .session
        .selected_index()
        .map(|i| format!(" {}/{} ", i + 1, app.session.results.len()))
        .unwrap_or_default();
    let title = format!(
        " {} ",
        truncate(&movie.title, (width as usize).saturating_sub(12))
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.focus_border_style())
                .title(Span::styled(
                    title,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(position).right_aligned()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header(lines: &mut Vec<Line>, title: &str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
    )));
}
