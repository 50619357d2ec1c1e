use movie_assistant_core::CompletionOutcome;

use super::App;
use crate::model::form::Focus;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::OptionsLoaded(result) => {
                self.session.apply_options(result);
            }
            BackendEvent::SearchComplete { seq, result } => {
                match self.session.complete_search(seq, result) {
                    CompletionOutcome::Applied { count } => {
                        self.results_cursor = 0;
                        self.detail_scroll = 0;
                        if count > 0 && self.focus == Focus::Submit {
                            self.set_focus(Focus::Results);
                        } else if count == 0 && self.focus == Focus::Results {
                            self.set_focus(Focus::Submit);
                        }
                    }
                    CompletionOutcome::Failed | CompletionOutcome::Stale => {}
                }
            }
        }
    }
}
