use serde::de::DeserializeOwned;
use sharity_bridge::{IntentEvent, IntentKind};
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::models::*;

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_sharity);

/// Initialize the mobile intent source by registering with the native layer.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<IntentSource<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin("fr.byteroast.music_sharity.plugins", "SharityPlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_sharity)?;
    Ok(IntentSource(handle))
}

/// The native side of the share flow.
pub struct IntentSource<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> IntentSource<R> {
    /// Take the intent the activity was created or resumed with, if any.
    ///
    /// The native layer forgets the intent once it has been taken, so each
    /// share is read at most once from here.
    pub fn take_pending_intent(&self, kind: IntentKind) -> crate::Result<Option<IntentEvent>> {
        let response: PendingIntentResponse = self.0.run_mobile_plugin("takePendingIntent", ())?;
        Ok(response.into_event(kind))
    }
}
