use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ClientSettings, FeedSource, RestFeedSource};
use crate::settings::{ServerStatus, SettingsClient};
use crate::types::ApiError;
use viewer_core::{FeedQuery, FeedRecord};

/// Maintenance actions on the settings collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Scan,
    GenerateThumbnails,
    Clean,
    SetDataDir(String),
}

enum ClientCommand {
    FetchFeeds { query: FeedQuery },
    FetchStatus,
    RunAction(SettingsAction),
}

/// Completion events reported back to the shell's message loop.
#[derive(Debug)]
pub enum ClientEvent {
    /// The request issued for `query` resolved. The tag lets the
    /// reconciler discard results that a newer query superseded.
    FeedsLoaded {
        query: FeedQuery,
        result: Result<Vec<FeedRecord>, ApiError>,
    },
    StatusLoaded {
        result: Result<ServerStatus, ApiError>,
    },
    ActionFinished {
        action: SettingsAction,
        result: Result<(), ApiError>,
    },
}

/// Owns the background tokio runtime that executes backend requests.
///
/// Commands go in over a channel and completions come back as events;
/// in-flight requests are never cancelled, they simply resolve into
/// events the reconciler may discard as stale.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let source = Arc::new(RestFeedSource::new(settings.clone())?);
        let settings_client = Arc::new(SettingsClient::new(settings)?);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    viewer_logging::viewer_error!("tokio runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let settings_client = settings_client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), &settings_client, command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_feeds(&self, query: FeedQuery) {
        let _ = self.cmd_tx.send(ClientCommand::FetchFeeds { query });
    }

    pub fn fetch_status(&self) {
        let _ = self.cmd_tx.send(ClientCommand::FetchStatus);
    }

    pub fn run_action(&self, action: SettingsAction) {
        let _ = self.cmd_tx.send(ClientCommand::RunAction(action));
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn FeedSource,
    settings_client: &SettingsClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::FetchFeeds { query } => {
            let result = source.fetch_feeds(&query).await;
            let _ = event_tx.send(ClientEvent::FeedsLoaded { query, result });
        }
        ClientCommand::FetchStatus => {
            let result = settings_client.status().await;
            let _ = event_tx.send(ClientEvent::StatusLoaded { result });
        }
        ClientCommand::RunAction(action) => {
            let result = match &action {
                SettingsAction::Scan => settings_client.scan().await,
                SettingsAction::GenerateThumbnails => settings_client.generate_thumbnails().await,
                SettingsAction::Clean => settings_client.clean().await,
                SettingsAction::SetDataDir(data_dir) => {
                    settings_client.set_data_dir(data_dir).await
                }
            };
            let _ = event_tx.send(ClientEvent::ActionFinished { action, result });
        }
    }
}
