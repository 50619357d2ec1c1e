use super::App;
use crate::action::Action;
use crate::model::form::{Focus, cycle_option};
use crate::theme::Theme;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            Action::Resize(_w, h) => {
                // Header (2) + footer (1) + panel borders (2); each card is 4 rows.
                self.visible_cards = ((h as usize).saturating_sub(5) / 4).max(1);
                return false;
            }
            Action::SaveConfig => {
                self.save_config();
                return false;
            }
            _ => {}
        }

        // Help overlay intercepts
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack) {
                self.show_help = false;
            }
            return false;
        }

        // Detail modal intercepts
        if self.session.selected.is_some() {
            self.update_detail(action);
            return false;
        }

        self.flash = None;

        match action {
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::CycleTheme => self.cycle_theme(),
            Action::FocusNext => self.focus_step(true),
            Action::FocusPrev => self.focus_step(false),
            Action::MoveDown => {
                if self.focus == Focus::Results {
                    self.move_results_cursor(1);
                } else {
                    self.focus_step(true);
                }
            }
            Action::MoveUp => {
                if self.focus == Focus::Results {
                    if self.results_cursor == 0 {
                        self.set_focus(Focus::Submit);
                    } else {
                        self.move_results_cursor(-1);
                    }
                } else if self.focus != Focus::Genre {
                    self.focus_step(false);
                }
            }
            Action::PageDown if self.focus == Focus::Results => {
                self.move_results_cursor(self.visible_cards as isize);
            }
            Action::PageUp if self.focus == Focus::Results => {
                self.move_results_cursor(-(self.visible_cards as isize));
            }
            Action::CycleLeft => self.cycle_selector(false),
            Action::CycleRight => self.cycle_selector(true),
            Action::Confirm => {
                if self.focus == Focus::Results {
                    if self.session.select_index(self.results_cursor) {
                        self.detail_scroll = 0;
                    }
                } else {
                    self.submit_search();
                }
            }
            Action::NavigateBack => {
                if self.focus == Focus::Results || self.focus.is_text_input() {
                    self.set_focus(Focus::Submit);
                }
            }
            Action::InsertChar(c) => self.edit_text(|value| value.push(c)),
            Action::Backspace => self.edit_text(|value| {
                value.pop();
            }),
            Action::ClearField => self.edit_text(String::clear),
            _ => {}
        }

        false
    }

    /// Keys while the detail modal is open. Up/Down swap to the neighbouring
    /// movie without closing.
    fn update_detail(&mut self, action: Action) {
        match action {
            Action::NavigateBack | Action::Confirm => {
                self.session.dismiss();
            }
            Action::MoveDown | Action::MoveUp => {
                let Some(current) = self.session.selected_index() else {
                    return;
                };
                let target = if action == Action::MoveDown {
                    current + 1
                } else {
                    current.saturating_sub(1)
                };
                if target != current && self.session.select_index(target) {
                    self.results_cursor = target;
                    self.detail_scroll = 0;
                }
            }
            Action::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(5);
            }
            Action::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(5);
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    fn focus_step(&mut self, forward: bool) {
        let mut next = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
        if next == Focus::Results && !self.results_focusable() {
            next = if forward { next.next() } else { next.prev() };
        }
        self.set_focus(next);
    }

    fn move_results_cursor(&mut self, delta: isize) {
        let len = self.session.results.len();
        if len == 0 {
            self.results_cursor = 0;
            return;
        }
        let cur = self.results_cursor as isize + delta;
        self.results_cursor = cur.clamp(0, len as isize - 1) as usize;
    }

    fn cycle_selector(&mut self, forward: bool) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if !self.focus.is_selector() {
            return;
        }
        let options = match self.focus {
            Focus::Genre => &self.session.options.genres,
            _ => &self.session.options.moods,
        };
        if let Some(value) = cycle_option(options, self.session.preferences.get(field), forward) {
            let value = value.to_string();
            self.session.update_field(field, value);
        }
    }

    /// Apply `edit` to the focused text field's value.
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        if !self.focus.is_text_input() {
            return;
        }
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.session.preferences.get(field).to_string();
        edit(&mut value);
        self.session.update_field(field, value);
    }

    fn cycle_theme(&mut self) {
        let name = self.display.next_theme_name();
        self.display.theme_name = name.to_string();
        self.display.dirty = true;
        self.theme = Theme::by_name(name);
    }

    fn save_config(&mut self) {
        match self.display.save() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "config saved");
                self.display.dirty = false;
                self.flash = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save config");
                self.flash = Some(e);
            }
        }
    }
}
