use serde::de::DeserializeOwned;
use sharity_bridge::{IntentEvent, IntentKind};
use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tracing::debug;

/// Initialize the desktop intent source (share intents are mobile-only).
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<IntentSource<R>> {
    Ok(IntentSource(app.clone()))
}

/// Desktop stand-in for the native share intent source.
///
/// Desktop has no share sheet, so there is never a pending intent. Hosts can
/// still push intents through the `handle_intent` command.
pub struct IntentSource<R: Runtime>(AppHandle<R>);

impl<R: Runtime> IntentSource<R> {
    pub fn take_pending_intent(&self, kind: IntentKind) -> crate::Result<Option<IntentEvent>> {
        debug!(
            "{}: no native share source on desktop ({:?})",
            self.0.package_info().name,
            kind
        );
        Ok(None)
    }
}
