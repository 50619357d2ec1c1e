use movie_assistant_core::{ApiError, AppOptions, Movie, ResultsView};

use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

/// Create a minimal App for testing (no backend attached).
fn test_app() -> App {
    App::new(Theme::hacker())
}

/// App with a command channel so tests can observe what would be sent.
fn app_with_channel() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let mut app = test_app();
    let (tx, rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("{title} overview"),
        score: 0.5,
        genres: "Drama Thriller".into(),
        year: "2001".into(),
        rating: 7.0,
        runtime: 100,
    }
}

fn load_options(app: &mut App) {
    app.handle_backend_event(BackendEvent::OptionsLoaded(Ok(AppOptions {
        genres: vec!["Action".into(), "Drama".into(), "Horror".into()],
        moods: vec!["Funny".into(), "Dark".into()],
    })));
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: None,
    }
}

// ── Options ─────────────────────────────────────────────────────

#[test]
fn load_options_sends_fetch_command() {
    let (app, mut rx) = app_with_channel();
    app.load_options();
    assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchOptions)));
}

#[test]
fn options_event_seeds_selectors() {
    let mut app = test_app();
    load_options(&mut app);
    assert_eq!(app.session.preferences.genre, "Action");
    assert_eq!(app.session.preferences.mood, "Funny");
}

#[test]
fn failed_options_leave_selectors_empty() {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::OptionsLoaded(Err(server_error())));
    assert!(app.session.options.genres.is_empty());
    assert_eq!(app.session.preferences.genre, "");

    // Cycling with no choices is a no-op.
    app.update(Action::CycleRight);
    assert_eq!(app.session.preferences.genre, "");
}

// ── Form editing ────────────────────────────────────────────────

#[test]
fn selector_cycles_through_options() {
    let mut app = test_app();
    load_options(&mut app);

    app.update(Action::CycleRight);
    assert_eq!(app.session.preferences.genre, "Drama");
    app.update(Action::CycleLeft);
    app.update(Action::CycleLeft);
    assert_eq!(app.session.preferences.genre, "Horror");

    app.update(Action::FocusNext);
    assert_eq!(app.focus, Focus::Mood);
    app.update(Action::CycleRight);
    assert_eq!(app.session.preferences.mood, "Dark");
}

#[test]
fn typing_edits_focused_text_field() {
    let mut app = test_app();
    app.set_focus(Focus::Content);
    assert_eq!(app.input_mode, InputMode::TextInput);

    for c in "Spacey".chars() {
        app.update(Action::InsertChar(c));
    }
    app.update(Action::Backspace);
    assert_eq!(app.session.preferences.content, "Space");

    app.update(Action::FocusNext);
    assert_eq!(app.focus, Focus::Element);
    app.update(Action::InsertChar('q'));
    assert_eq!(app.session.preferences.element, "q");
    assert!(!app.should_quit);

    app.update(Action::ClearField);
    assert_eq!(app.session.preferences.element, "");
}

#[test]
fn text_actions_ignored_on_selectors() {
    let mut app = test_app();
    load_options(&mut app);
    app.update(Action::InsertChar('x'));
    app.update(Action::Backspace);
    assert_eq!(app.session.preferences.genre, "Action");
}

#[test]
fn esc_from_text_field_returns_to_normal_mode() {
    let mut app = test_app();
    app.set_focus(Focus::Element);
    app.update(Action::NavigateBack);
    assert_eq!(app.focus, Focus::Submit);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn focus_skips_empty_results() {
    let mut app = test_app();
    app.set_focus(Focus::Submit);
    app.update(Action::FocusNext);
    assert_eq!(app.focus, Focus::Genre);

    app.session.results = vec![movie(1, "Heat")];
    app.set_focus(Focus::Submit);
    app.update(Action::FocusNext);
    assert_eq!(app.focus, Focus::Results);
}

// ── Search ──────────────────────────────────────────────────────

#[test]
fn confirm_submits_current_preferences() {
    let (mut app, mut rx) = app_with_channel();
    load_options(&mut app);
    app.set_focus(Focus::Content);
    app.update(Action::InsertChar('X'));

    app.update(Action::Confirm);

    assert!(app.session.loading);
    assert!(app.session.has_searched);
    match rx.try_recv() {
        Ok(BackendCommand::Recommend { seq, preferences }) => {
            assert_eq!(seq, 1);
            assert_eq!(preferences.genre, "Action");
            assert_eq!(preferences.mood, "Funny");
            assert_eq!(preferences.content, "X");
            assert_eq!(preferences.element, "");
        }
        other => panic!("expected recommend command, got {other:?}"),
    }
}

#[test]
fn submit_is_disabled_while_loading() {
    let (mut app, mut rx) = app_with_channel();
    app.update(Action::Confirm);
    app.update(Action::Confirm);

    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
    assert_eq!(app.session.latest_search(), 1);
}

#[test]
fn successful_search_shows_grid_and_focuses_results() {
    let mut app = test_app();
    app.set_focus(Focus::Submit);
    app.update(Action::Confirm);

    let payload = vec![movie(3, "Heat"), movie(1, "Ronin")];
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(payload.clone()),
    });

    assert!(!app.session.loading);
    assert_eq!(app.session.results, payload);
    assert_eq!(app.session.results_view(), ResultsView::Grid);
    assert_eq!(app.focus, Focus::Results);
    assert_eq!(app.results_cursor, 0);
}

#[test]
fn empty_search_shows_no_matches_message() {
    let mut app = test_app();
    app.update(Action::Confirm);
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(vec![]),
    });
    assert_eq!(app.session.results_view(), ResultsView::NoMatches);
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut app = test_app();
    app.update(Action::Confirm);
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(vec![movie(1, "Heat")]),
    });

    app.set_focus(Focus::Submit);
    app.update(Action::Confirm);
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 2,
        result: Err(server_error()),
    });

    assert!(!app.session.loading);
    assert_eq!(app.session.results.len(), 1);
    assert_eq!(app.session.results[0].title, "Heat");
}

#[test]
fn stale_search_completion_is_discarded() {
    let mut app = test_app();
    app.update(Action::Confirm);
    // Force a second search while the first is still in flight.
    app.session.loading = false;
    app.update(Action::Confirm);
    assert_eq!(app.session.latest_search(), 2);

    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(vec![movie(9, "Old")]),
    });
    assert!(app.session.loading);
    assert!(app.session.results.is_empty());

    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 2,
        result: Ok(vec![movie(2, "New")]),
    });
    assert_eq!(app.session.results[0].title, "New");
}

// ── Results & detail ───────────────────────────────────────────

fn app_with_results() -> App {
    let mut app = test_app();
    app.update(Action::Confirm);
    app.set_focus(Focus::Submit);
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(vec![movie(1, "Alien"), movie(2, "Heat"), movie(3, "Ran")]),
    });
    app
}

#[test]
fn results_cursor_clamps() {
    let mut app = app_with_results();
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.results_cursor, 2);

    app.update(Action::PageUp);
    assert_eq!(app.results_cursor, 0);

    // Up from the first card returns to the form.
    app.update(Action::MoveUp);
    assert_eq!(app.focus, Focus::Submit);
}

#[test]
fn enter_on_result_opens_detail_and_esc_closes() {
    let mut app = app_with_results();
    app.update(Action::MoveDown);
    app.update(Action::Confirm);
    assert_eq!(app.session.selected.as_ref().map(|m| m.id), Some(2));

    app.update(Action::NavigateBack);
    assert!(app.session.selected.is_none());
    assert_eq!(app.focus, Focus::Results);
}

#[test]
fn detail_swaps_movie_without_dismiss() {
    let mut app = app_with_results();
    app.update(Action::Confirm);
    assert_eq!(app.session.selected_index(), Some(0));

    app.update(Action::MoveDown);
    assert_eq!(app.session.selected.as_ref().map(|m| m.id), Some(2));
    assert_eq!(app.results_cursor, 1);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.session.selected_index(), Some(2));

    app.update(Action::MoveUp);
    assert_eq!(app.session.selected_index(), Some(1));
}

#[test]
fn detail_walks_results_with_duplicate_ids() {
    let mut app = test_app();
    app.update(Action::Confirm);
    app.set_focus(Focus::Submit);
    app.handle_backend_event(BackendEvent::SearchComplete {
        seq: 1,
        result: Ok(vec![movie(7, "A"), movie(7, "B"), movie(8, "C")]),
    });

    app.update(Action::MoveDown);
    app.update(Action::Confirm);
    assert_eq!(app.session.selected_index(), Some(1));

    app.update(Action::MoveDown);
    assert_eq!(app.session.selected.as_ref().map(|m| m.title.as_str()), Some("C"));
    assert_eq!(app.results_cursor, 2);

    app.update(Action::MoveUp);
    assert_eq!(app.session.selected.as_ref().map(|m| m.title.as_str()), Some("B"));
    assert_eq!(app.results_cursor, 1);
}

#[test]
fn detail_scroll_resets_on_swap() {
    let mut app = app_with_results();
    app.update(Action::Confirm);
    app.update(Action::PageDown);
    assert_eq!(app.detail_scroll, 5);
    app.update(Action::MoveDown);
    assert_eq!(app.detail_scroll, 0);
}

#[test]
fn new_search_clears_selection() {
    let (mut app, _rx) = app_with_channel();
    app.session.results = vec![movie(1, "Alien")];
    app.session.select_index(0);

    app.submit_search();
    assert!(app.session.selected.is_none());
}

// ── Global keys ─────────────────────────────────────────────────

#[test]
fn help_overlay_swallows_keys() {
    let mut app = test_app();
    load_options(&mut app);
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    app.update(Action::CycleRight);
    assert_eq!(app.session.preferences.genre, "Action");

    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn quit_works_from_modal() {
    let mut app = app_with_results();
    app.update(Action::Confirm);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn theme_cycles_and_marks_dirty() {
    let mut app = test_app();
    app.update(Action::CycleTheme);
    assert_eq!(app.display.theme_name, "modern");
    assert!(app.display.dirty);
    app.update(Action::CycleTheme);
    assert_eq!(app.display.theme_name, "hacker");
}

#[test]
fn resize_sets_visible_cards() {
    let mut app = test_app();
    app.update(Action::Resize(120, 45));
    assert_eq!(app.visible_cards, 10);
    app.update(Action::Resize(80, 3));
    assert_eq!(app.visible_cards, 1);
}
