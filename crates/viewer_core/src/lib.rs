//! Viewer core: pure browsing-session state machine and classification helpers.
mod classify;
mod codec;
mod effect;
mod feed;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use classify::{classify, media_file_url, media_preview_url};
pub use codec::{decode_fragment, encode_fragment, Route};
pub use effect::Effect;
pub use feed::{FeedRecord, MediaRef, MediaType};
pub use msg::{FetchFailure, FormField, FormSnapshot, Msg};
pub use query::FeedQuery;
pub use state::{SessionState, SessionView};
pub use update::update;
pub use view_model::{MediaVariant, MediaView, PreviewSource, RetweetInfo, ViewRecord};
