use serde::{Deserialize, Serialize};
use sharity_bridge::{BridgeState, IntentEvent, IntentKind, ListenerHandle};

/// Response from the native `takePendingIntent` call.
///
/// The native layer keeps the intent the activity was created or resumed
/// with and hands it over once; every field is empty when there is none.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingIntentResponse {
    pub action: Option<String>,
    pub mime_type: Option<String>,
    pub text: Option<String>,
}

impl PendingIntentResponse {
    pub fn into_event(self, kind: IntentKind) -> Option<IntentEvent> {
        if self.action.is_none() && self.mime_type.is_none() && self.text.is_none() {
            return None;
        }
        Some(IntentEvent {
            kind,
            action: self.action,
            mime_type: self.mime_type,
            text: self.text,
        })
    }
}

/// Snapshot of the bridge returned by the `get_status` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeStatus {
    pub channel: String,
    pub state: BridgeState,
    pub has_pending: bool,
    pub active_handle: Option<ListenerHandle>,
}
