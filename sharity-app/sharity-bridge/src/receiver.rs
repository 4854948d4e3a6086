use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bridge::{PublishOutcome, ShareBridge};
use crate::config::{BridgeConfig, ACTION_SEND, MIME_TEXT_PLAIN};
use crate::extract::extract_url;

/// How the host process received the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentKind {
    /// The process was started with this intent.
    Launch,
    /// The intent was delivered to an already running process.
    Resume,
}

/// An intent as reported by the host, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentEvent {
    pub kind: IntentKind,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl IntentEvent {
    /// A plain-text share, as the OS share sheet would send it.
    pub fn shared_text(kind: IntentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            action: Some(ACTION_SEND.to_string()),
            mime_type: Some(MIME_TEXT_PLAIN.to_string()),
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReceiveOutcome {
    /// Not a text share, or no text attached.
    Ignored,
    /// Text arrived but held no URL.
    NoUrl,
    Delivered,
    Buffered,
}

impl From<PublishOutcome> for ReceiveOutcome {
    fn from(outcome: PublishOutcome) -> Self {
        match outcome {
            PublishOutcome::Delivered => ReceiveOutcome::Delivered,
            PublishOutcome::Buffered => ReceiveOutcome::Buffered,
        }
    }
}

/// Turns host intents into bridge publishes.
///
/// Launch and resume intents take the same path. Redelivered intents are
/// published again; nothing here deduplicates.
#[derive(Debug, Clone)]
pub struct IntentReceiver {
    bridge: Arc<ShareBridge>,
    share_action: String,
    mime_type: String,
}

impl IntentReceiver {
    pub fn new(bridge: Arc<ShareBridge>, config: &BridgeConfig) -> Self {
        Self {
            bridge,
            share_action: config.share_action.clone(),
            mime_type: config.mime_type.clone(),
        }
    }

    pub fn bridge(&self) -> &Arc<ShareBridge> {
        &self.bridge
    }

    pub fn handle_intent(&self, event: &IntentEvent) -> ReceiveOutcome {
        let is_share = event.action.as_deref() == Some(self.share_action.as_str());
        let is_text = event.mime_type.as_deref() == Some(self.mime_type.as_str());
        if !is_share || !is_text {
            debug!(
                "Ignoring {:?} intent (action: {:?}, type: {:?})",
                event.kind, event.action, event.mime_type
            );
            return ReceiveOutcome::Ignored;
        }

        self.handle_incoming(event.text.as_deref())
    }

    pub fn handle_incoming(&self, payload: Option<&str>) -> ReceiveOutcome {
        let Some(text) = payload else {
            return ReceiveOutcome::Ignored;
        };

        match extract_url(text) {
            Some(url) => self.bridge.publish(url).into(),
            None => {
                debug!("Shared text ({} bytes) contains no URL", text.len());
                ReceiveOutcome::NoUrl
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeState;

    fn receiver() -> IntentReceiver {
        IntentReceiver::new(Arc::new(ShareBridge::new()), &BridgeConfig::default())
    }

    #[test]
    fn test_absent_payload_is_ignored() {
        let receiver = receiver();
        assert_eq!(receiver.handle_incoming(None), ReceiveOutcome::Ignored);
        assert!(!receiver.bridge().has_pending());
    }

    #[test]
    fn test_text_without_url_is_dropped() {
        let receiver = receiver();
        assert_eq!(receiver.handle_incoming(Some("")), ReceiveOutcome::NoUrl);
        assert_eq!(
            receiver.handle_incoming(Some("no links here")),
            ReceiveOutcome::NoUrl
        );
        assert!(!receiver.bridge().has_pending());
    }

    #[test]
    fn test_url_is_buffered_without_listener() {
        let receiver = receiver();
        let outcome = receiver.handle_incoming(Some("Listen https://open.spotify.com/track/42"));
        assert_eq!(outcome, ReceiveOutcome::Buffered);
        assert!(receiver.bridge().has_pending());
        assert_eq!(receiver.bridge().state(), BridgeState::Idle);
    }

    #[test]
    fn test_non_text_mime_type_is_ignored() {
        let receiver = receiver();
        let mut event = IntentEvent::shared_text(IntentKind::Launch, "http://a.b/c");
        event.mime_type = Some("image/png".into());
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);

        // Exact match only.
        event.mime_type = Some("text/*".into());
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);

        event.mime_type = None;
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);
        assert!(!receiver.bridge().has_pending());
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let receiver = receiver();
        let mut event = IntentEvent::shared_text(IntentKind::Resume, "http://a.b/c");
        event.action = Some("android.intent.action.VIEW".into());
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);

        event.action = None;
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);
    }

    #[test]
    fn test_share_without_text_is_ignored() {
        let receiver = receiver();
        let mut event = IntentEvent::shared_text(IntentKind::Launch, "");
        event.text = None;
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);
    }

    #[test]
    fn test_launch_and_resume_take_same_path() {
        let receiver = receiver();
        let launch = IntentEvent::shared_text(IntentKind::Launch, "http://a");
        let resume = IntentEvent::shared_text(IntentKind::Resume, "http://b");
        assert_eq!(receiver.handle_intent(&launch), ReceiveOutcome::Buffered);
        assert_eq!(receiver.handle_intent(&resume), ReceiveOutcome::Buffered);
    }

    #[test]
    fn test_configured_mime_type_is_respected() {
        let config = BridgeConfig {
            mime_type: "text/x-uri".into(),
            ..BridgeConfig::default()
        };
        let receiver = IntentReceiver::new(Arc::new(ShareBridge::with_config(&config)), &config);

        let mut event = IntentEvent::shared_text(IntentKind::Launch, "http://a.b");
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Ignored);

        event.mime_type = Some("text/x-uri".into());
        assert_eq!(receiver.handle_intent(&event), ReceiveOutcome::Buffered);
    }

    #[test]
    fn test_intent_event_from_json() {
        let event: IntentEvent = serde_json::from_str(
            r#"{ "kind": "resume", "action": "android.intent.action.SEND", "mimeType": "text/plain", "text": "hi http://x" }"#,
        )
        .unwrap();
        assert_eq!(event, IntentEvent::shared_text(IntentKind::Resume, "hi http://x"));

        let bare: IntentEvent = serde_json::from_str(r#"{ "kind": "launch" }"#).unwrap();
        assert!(bare.action.is_none() && bare.mime_type.is_none() && bare.text.is_none());
    }
}
