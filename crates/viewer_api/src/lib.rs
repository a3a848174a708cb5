//! Viewer API: REST fetch pipeline and settings client.
mod client;
mod handle;
mod settings;
mod types;

pub use client::{ClientSettings, FeedSource, RestFeedSource};
pub use handle::{ClientEvent, ClientHandle, SettingsAction};
pub use settings::{ServerStatus, SettingsClient};
pub use types::ApiError;
