mod backend;
mod update;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use movie_assistant_core::Session;

use crate::model::config::DisplayState;
use crate::model::form::Focus;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// A text field has focus: printable keys edit it.
    TextInput,
}

/// Main application state.
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub input_mode: InputMode,
    /// Highlighted card in the results list.
    pub results_cursor: usize,
    pub detail_scroll: u16,
    pub tick: usize,
    pub theme: Theme,
    pub display: DisplayState,
    pub should_quit: bool,
    pub show_help: bool,
    /// One-line notice in the footer (config saved, etc.).
    pub flash: Option<String>,
    /// Number of result cards that fit on screen (set on resize, used for page up/down).
    pub visible_cards: usize,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            session: Session::new(),
            focus: Focus::Genre,
            input_mode: InputMode::Normal,
            results_cursor: 0,
            detail_scroll: 0,
            tick: 0,
            theme,
            display: DisplayState::default(),
            should_quit: false,
            show_help: false,
            flash: None,
            visible_cards: 5,
            backend_cmd_tx: None,
        }
    }

    // update() is in update.rs

    // handle_backend_event() is in backend.rs

    fn send_command(&self, cmd: BackendCommand) {
        match &self.backend_cmd_tx {
            Some(tx) => {
                if tx.send(cmd).is_err() {
                    tracing::warn!("backend listener is gone; command dropped");
                }
            }
            None => tracing::debug!(?cmd, "no backend attached"),
        }
    }

    /// Ask the backend for the selector option lists. Called once at start.
    pub fn load_options(&self) {
        self.send_command(BackendCommand::FetchOptions);
    }

    /// Start a search with the current preferences. Ignored while one is loading.
    pub fn submit_search(&mut self) {
        if !self.session.can_submit() {
            return;
        }
        let ticket = self.session.begin_search();
        self.detail_scroll = 0;
        tracing::info!(
            seq = ticket.seq,
            genre = %ticket.preferences.genre,
            mood = %ticket.preferences.mood,
            "search submitted"
        );
        self.send_command(BackendCommand::Recommend {
            seq: ticket.seq,
            preferences: ticket.preferences,
        });
    }

    /// Move focus, keeping the input mode in step with the focused control.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input_mode = if focus.is_text_input() {
            InputMode::TextInput
        } else {
            InputMode::Normal
        };
    }

    /// Whether the results list can take focus.
    fn results_focusable(&self) -> bool {
        !self.session.results.is_empty()
    }

    fn footer_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.session.selected.is_some() {
            return vec![
                ("\u{2191}\u{2193}", "prev/next movie"),
                ("PgUp/PgDn", "scroll"),
                ("Esc", "close"),
            ];
        }
        match self.focus {
            Focus::Genre | Focus::Mood => vec![
                ("\u{2190}\u{2192}", "change"),
                ("Tab", "next"),
                ("Enter", "search"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Focus::Content | Focus::Element => vec![
                ("type", "edit"),
                ("Ctrl+u", "clear"),
                ("Tab", "next"),
                ("Enter", "search"),
            ],
            Focus::Submit => vec![
                ("Enter", "search"),
                ("Tab", "next"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Focus::Results => vec![
                ("\u{2191}\u{2193}", "move"),
                ("Enter", "read more"),
                ("Esc", "back to form"),
                ("q", "quit"),
            ],
        }
    }

    fn build_footer(&self) -> Line<'static> {
        let theme = &self.theme;
        let mut spans = Vec::new();
        if let Some(msg) = &self.flash {
            spans.push(Span::styled(format!(" {} ", msg), theme.header_style()));
            spans.push(Span::raw(" "));
        }
        for (key, desc) in self.footer_hints() {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(theme.active),
            ));
            spans.push(Span::styled(format!(":{} ", desc), theme.footer_style()));
        }
        Line::from(spans)
    }

    /// Render the whole screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        let content_area = crate::view::header::render(f, area, &self.theme);

        let footer_area = Rect {
            x: content_area.x,
            y: content_area.y + content_area.height.saturating_sub(1),
            width: content_area.width,
            height: 1.min(content_area.height),
        };
        let body_area = Rect {
            height: content_area.height.saturating_sub(1),
            ..content_area
        };

        let form_width = if body_area.width > 100 {
            44
        } else {
            (body_area.width / 2).max(30)
        };
        let chunks = Layout::horizontal([Constraint::Length(form_width), Constraint::Min(30)])
            .split(body_area);

        crate::view::form::render_in(f, self, chunks[0]);
        crate::view::results::render_in(f, self, chunks[1]);

        f.render_widget(Paragraph::new(self.build_footer()), footer_area);

        if self.session.selected.is_some() {
            crate::view::detail::render(f, self);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
