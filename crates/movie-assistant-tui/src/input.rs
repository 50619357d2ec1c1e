use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::TextInput => map_key_text_input(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left => Action::CycleLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::CycleRight,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SaveConfig,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        _ => Action::None,
    }
}

fn map_key_text_input(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Action::SaveConfig,
            KeyCode::Char('u') => Action::ClearField,
            _ => Action::None,
        };
    }
    match key.code {
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Tab | KeyCode::Down => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrev,
        KeyCode::Char(c) => Action::InsertChar(c),
        KeyCode::Backspace => Action::Backspace,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ev = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&ev, &InputMode::Normal), Action::Quit);
        assert_eq!(map_event(&ev, &InputMode::TextInput), Action::Quit);
    }

    #[test]
    fn letters_are_text_while_typing() {
        let ev = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event(&ev, &InputMode::Normal), Action::Quit);
        assert_eq!(map_event(&ev, &InputMode::TextInput), Action::InsertChar('q'));

        let upper = key(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(
            map_event(&upper, &InputMode::TextInput),
            Action::InsertChar('R')
        );
    }

    #[test]
    fn text_mode_control_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char('u'), KeyModifiers::CONTROL), &InputMode::TextInput),
            Action::ClearField
        );
        assert_eq!(
            map_event(&key(KeyCode::Backspace, KeyModifiers::NONE), &InputMode::TextInput),
            Action::Backspace
        );
        assert_eq!(
            map_event(&key(KeyCode::Down, KeyModifiers::NONE), &InputMode::TextInput),
            Action::FocusNext
        );
    }

    #[test]
    fn selectors_cycle_with_arrows() {
        assert_eq!(
            map_event(&key(KeyCode::Left, KeyModifiers::NONE), &InputMode::Normal),
            Action::CycleLeft
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('l'), KeyModifiers::NONE), &InputMode::Normal),
            Action::CycleRight
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(
            map_event(&Event::Key(release), &InputMode::Normal),
            Action::None
        );
    }
}
