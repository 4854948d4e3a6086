//! Core of the "share to Music Sharity" flow.
//!
//! The OS hands the app a text share; [`IntentReceiver`] filters it and pulls
//! out the first URL; [`ShareBridge`] keeps at most one undelivered URL and
//! forwards it to the single attached [`ShareSink`].

mod bridge;
mod config;
mod error;
mod extract;
pub mod logging;
mod receiver;

pub use bridge::{BridgeState, ListenerHandle, PublishOutcome, ShareBridge, ShareSink};
pub use config::{
    load_config, save_config, BridgeConfig, ACTION_SEND, DEFAULT_CHANNEL, MIME_TEXT_PLAIN,
};
pub use error::{DeliveryError, Result, SharityError};
pub use extract::{extract_url, ExtractedUrl};
pub use receiver::{IntentEvent, IntentKind, IntentReceiver, ReceiveOutcome};
