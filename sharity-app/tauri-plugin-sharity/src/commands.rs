use sharity_bridge::{ExtractedUrl, IntentEvent, ListenerHandle, ReceiveOutcome};
use tauri::{command, ipc::Channel, AppHandle, Runtime};

use crate::models::*;
use crate::Result;
use crate::SharityExt;

/// Attach the frontend as the share listener.
///
/// A URL shared before the webview was ready is sent on `on_share` right
/// away. Any previously attached listener stops receiving.
#[command]
pub(crate) async fn subscribe<R: Runtime>(
    app: AppHandle<R>,
    on_share: Channel<ExtractedUrl>,
) -> Result<ListenerHandle> {
    Ok(app.sharity().subscribe_channel(on_share))
}

/// Detach the listener. Returns `false` if `handle` was already replaced or
/// detached.
#[command]
pub(crate) async fn unsubscribe<R: Runtime>(
    app: AppHandle<R>,
    handle: ListenerHandle,
) -> Result<bool> {
    Ok(app.sharity().unsubscribe(handle))
}

/// Feed an intent in from the host shell.
#[command]
pub(crate) async fn handle_intent<R: Runtime>(
    app: AppHandle<R>,
    intent: IntentEvent,
) -> Result<ReceiveOutcome> {
    Ok(app.sharity().handle_intent(&intent))
}

#[command]
pub(crate) async fn get_status<R: Runtime>(app: AppHandle<R>) -> Result<BridgeStatus> {
    Ok(app.sharity().status())
}
