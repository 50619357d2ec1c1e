use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use movie_assistant_core::PreferenceField;

use crate::app::App;
use crate::model::form::{self, Focus};
use crate::theme::Theme;
use crate::view::{spinner_char, truncate};

/// Render the "Your Preferences" panel.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let session = &app.session;
    let form_focused = app.focus != Focus::Results;
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Customize your search",
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    for &field in PreferenceField::all() {
        let focused = app.focus == Focus::from_field(field);
        lines.push(label_line(field.label(), focused, theme));

        match field {
            PreferenceField::Genre | PreferenceField::Mood => {
                let options = if field == PreferenceField::Genre {
                    &session.options.genres
                } else {
                    &session.options.moods
                };
                lines.push(selector_line(
                    session.preferences.get(field),
                    options.is_empty(),
                    focused,
                    inner_width,
                    theme,
                ));
            }
            PreferenceField::Content | PreferenceField::Element => {
                lines.push(text_input_line(
                    session.preferences.get(field),
                    form::placeholder(field),
                    focused,
                    app.tick,
                    inner_width,
                    theme,
                ));
                if let Some(hint) = form::hint(field) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", truncate(hint, inner_width.saturating_sub(2))),
                        Style::default().fg(theme.dim),
                    )));
                }
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(submit_line(app, theme));

    let border_style = if form_focused {
        theme.focus_border_style()
    } else {
        theme.border_style()
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Your Preferences "),
    );
    f.render_widget(paragraph, area);
}

fn label_line(label: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if focused { "\u{25B8} " } else { "  " };
    let style = if focused {
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(Span::styled(format!("{}{}", marker, label), style))
}

fn selector_line(
    value: &str,
    no_options: bool,
    focused: bool,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    if no_options {
        return Line::from(Span::styled(
            "  (no choices)",
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        ));
    }
    let value = truncate(value, width.saturating_sub(6));
    if focused {
        Line::from(vec![
            Span::styled("  \u{2039} ", Style::default().fg(theme.active)),
            Span::styled(value, theme.highlight_style().fg(theme.text)),
            Span::styled(" \u{203A}", Style::default().fg(theme.active)),
        ])
    } else {
        Line::from(Span::styled(
            format!("    {}", value),
            Style::default().fg(theme.text),
        ))
    }
}

fn text_input_line(
    value: &str,
    placeholder: &str,
    focused: bool,
    tick: usize,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let avail = width.saturating_sub(5);
    if value.is_empty() && !focused {
        return Line::from(Span::styled(
            format!("  [ {} ]", truncate(placeholder, avail)),
            Style::default().fg(theme.dim),
        ));
    }

    // Show the tail of long input so the caret stays visible.
    let count = value.chars().count();
    let shown: String = if count > avail {
        value.chars().skip(count - avail).collect()
    } else {
        value.to_string()
    };
    let mut spans = vec![
        Span::styled("  [ ", Style::default().fg(theme.border)),
        Span::styled(shown, Style::default().fg(theme.text)),
    ];
    if focused {
        let caret = if (tick / 5) % 2 == 0 { "\u{2588}" } else { " " };
        spans.push(Span::styled(caret, Style::default().fg(theme.active)));
    }
    spans.push(Span::styled(" ]", Style::default().fg(theme.border)));
    Line::from(spans)
}

fn submit_line(app: &App, theme: &Theme) -> Line<'static> {
    let session = &app.session;
    let focused = app.focus == Focus::Submit;

    if session.loading {
        return Line::from(vec![
            Span::styled(
                format!("  {} ", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            ),
            Span::styled(
                session.submit_label(),
                Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
            ),
        ]);
    }

    let style = if focused {
        theme.header_style()
    } else {
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} \u{2728} ", session.submit_label()), style),
    ])
}
