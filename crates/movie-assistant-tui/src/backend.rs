use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use movie_assistant_core::{RecommendationApi, UserPreferences};

use crate::tui_event::{BackendCommand, BackendEvent};

/// Receive commands from the TUI and run each request on its own task.
///
/// Requests are never cancelled individually; a search that is overtaken by a
/// newer one still completes and is discarded by the session.
pub async fn run_listener(
    api: Arc<dyn RecommendationApi>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
) {
    loop {
        let cmd = tokio::select! {
            _ = cancel.cancelled() => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
        };

        match cmd {
            BackendCommand::FetchOptions => {
                tokio::spawn(fetch_options(api.clone(), tx.clone()));
            }
            BackendCommand::Recommend { seq, preferences } => {
                tokio::spawn(run_search(api.clone(), seq, preferences, tx.clone()));
            }
        }
    }
    tracing::debug!("backend listener stopped");
}

pub async fn fetch_options(api: Arc<dyn RecommendationApi>, tx: mpsc::UnboundedSender<BackendEvent>) {
    let result = api.fetch_options().await;
    let _ = tx.send(BackendEvent::OptionsLoaded(result));
}

pub async fn run_search(
    api: Arc<dyn RecommendationApi>,
    seq: u64,
    preferences: UserPreferences,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    let result = api.recommend(&preferences).await;
    let _ = tx.send(BackendEvent::SearchComplete { seq, result });
}
