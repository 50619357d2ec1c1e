use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

const TITLE: &str = " AI MOVIE ASSISTANT ";
const TAGLINE: &str = "Tell me what you like, and I'll find the perfect match.";

/// Render the two-row title bar and return the area below it.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) -> Rect {
    if area.height < 4 {
        return area;
    }

    let bar = Rect { height: 2, ..area };
    let lines = vec![
        Line::from(vec![
            Span::styled(TITLE, theme.header_style()),
            Span::raw(" "),
            Span::styled(TAGLINE, Style::default().fg(theme.dim)),
        ]),
        Line::from(Span::styled(
            "\u{2500}".repeat(area.width as usize),
            theme.border_style(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), bar);

    Rect {
        y: area.y + 2,
        height: area.height - 2,
        ..area
    }
}
