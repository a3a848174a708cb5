use viewer_api::{ApiError, ClientEvent, ClientHandle, ClientSettings, SettingsAction};
use viewer_core::Effect;
use viewer_logging::{viewer_info, viewer_warn};

use crate::render;

/// Executes the effects the update function asks for: feed fetches go
/// to the background client, everything else is terminal output.
pub struct EffectRunner {
    handle: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        Ok(Self {
            handle: ClientHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { query } => {
                    viewer_info!("fetch page={} user={:?}", query.page, query.user_name);
                    self.handle.fetch_feeds(query);
                }
                Effect::ReplaceHash(fragment) => {
                    // The terminal has no address bar; printing the
                    // canonical route keeps it copyable all the same.
                    println!("route: #{fragment}");
                }
                Effect::Render(records) => render::print_page(&records),
                Effect::OpenSettings => {
                    self.handle.fetch_status();
                }
            }
        }
    }

    pub fn run_action(&self, action: SettingsAction) {
        self.handle.run_action(action);
    }

    pub fn fetch_status(&self) {
        self.handle.fetch_status();
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.handle.try_recv()
    }
}

/// Prints the outcome of a settings action or status request.
pub fn report_event(event: &ClientEvent) {
    match event {
        ClientEvent::FeedsLoaded { .. } => {}
        ClientEvent::StatusLoaded { result } => match result {
            Ok(status) => render::print_status(status),
            Err(err) => {
                viewer_warn!("status request failed: {err}");
                println!("status request failed: {err}");
            }
        },
        ClientEvent::ActionFinished { action, result } => match result {
            Ok(()) => println!("{action:?}: ok"),
            Err(err) => {
                viewer_warn!("{action:?} failed: {err}");
                println!("{action:?} failed: {err}");
            }
        },
    }
}
