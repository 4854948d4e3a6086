use std::sync::Arc;

use sharity_bridge::{
    BridgeConfig, DeliveryError, ExtractedUrl, IntentEvent, IntentKind, IntentReceiver,
    ListenerHandle, ReceiveOutcome, ShareBridge, ShareSink,
};
use tauri::{
    ipc::Channel,
    plugin::{Builder, TauriPlugin},
    AppHandle, Manager, RunEvent, Runtime,
};
use tracing::{info, warn};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod error;
mod models;

pub use error::{Error, Result};

#[cfg(desktop)]
use desktop::IntentSource;
#[cfg(mobile)]
use mobile::IntentSource;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the sharity APIs.
pub trait SharityExt<R: Runtime> {
    fn sharity(&self) -> &Sharity<R>;
}

impl<R: Runtime, T: Manager<R>> crate::SharityExt<R> for T {
    fn sharity(&self) -> &Sharity<R> {
        self.state::<Sharity<R>>().inner()
    }
}

/// Share bridge plus the platform source that feeds it.
pub struct Sharity<R: Runtime> {
    source: IntentSource<R>,
    receiver: IntentReceiver,
}

impl<R: Runtime> Sharity<R> {
    fn new(source: IntentSource<R>, config: &BridgeConfig) -> Result<Self> {
        config.validate()?;
        let bridge = Arc::new(ShareBridge::with_config(config));
        Ok(Self {
            source,
            receiver: IntentReceiver::new(bridge, config),
        })
    }

    pub fn bridge(&self) -> &Arc<ShareBridge> {
        self.receiver.bridge()
    }

    pub fn subscribe<S>(&self, sink: S) -> ListenerHandle
    where
        S: ShareSink + 'static,
    {
        self.bridge().subscribe(sink)
    }

    /// Attach a frontend IPC channel as the listener.
    pub fn subscribe_channel(&self, channel: Channel<ExtractedUrl>) -> ListenerHandle {
        self.subscribe(ChannelSink(channel))
    }

    pub fn unsubscribe(&self, handle: ListenerHandle) -> bool {
        self.bridge().unsubscribe(handle)
    }

    pub fn handle_intent(&self, intent: &IntentEvent) -> ReceiveOutcome {
        self.receiver.handle_intent(intent)
    }

    pub fn status(&self) -> BridgeStatus {
        let bridge = self.bridge();
        BridgeStatus {
            channel: bridge.channel().to_string(),
            state: bridge.state(),
            has_pending: bridge.has_pending(),
            active_handle: bridge.active_handle(),
        }
    }

    /// Pull the intent the platform is holding, if any, through the receiver.
    pub fn poll_platform(&self, kind: IntentKind) -> Result<ReceiveOutcome> {
        match self.source.take_pending_intent(kind)? {
            Some(intent) => Ok(self.receiver.handle_intent(&intent)),
            None => Ok(ReceiveOutcome::Ignored),
        }
    }
}

/// Forwards delivered URLs to the webview over a Tauri IPC channel.
struct ChannelSink(Channel<ExtractedUrl>);

impl ShareSink for ChannelSink {
    fn deliver(&self, url: &ExtractedUrl) -> std::result::Result<(), DeliveryError> {
        self.0
            .send(url.clone())
            .map_err(|e| DeliveryError::Failed(e.to_string()))
    }
}

fn poll_on_lifecycle<R: Runtime>(app: &AppHandle<R>, kind: IntentKind) {
    let Some(sharity) = app.try_state::<Sharity<R>>() else {
        return;
    };
    match sharity.poll_platform(kind) {
        Ok(ReceiveOutcome::Ignored) => {}
        Ok(outcome) => info!("sharity: {:?} intent handled: {:?}", kind, outcome),
        Err(e) => warn!("sharity: failed to read {:?} intent: {}", kind, e),
    }
}

/// Initializes the sharity plugin.
///
/// Reads the share intent the app was launched with once the app is ready,
/// and the one it was resumed with on every resume. Plugin configuration
/// (`plugins > sharity` in `tauri.conf.json`) is optional.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<BridgeConfig>> {
    Builder::<R, Option<BridgeConfig>>::new("sharity")
        .invoke_handler(tauri::generate_handler![
            commands::subscribe,
            commands::unsubscribe,
            commands::handle_intent,
            commands::get_status,
        ])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            #[cfg(mobile)]
            let source = mobile::init(app, api)?;
            #[cfg(desktop)]
            let source = desktop::init(app, api)?;
            app.manage(Sharity::new(source, &config)?);
            Ok(())
        })
        .on_event(|app, event| match event {
            RunEvent::Ready => poll_on_lifecycle(app, IntentKind::Launch),
            RunEvent::Resumed => poll_on_lifecycle(app, IntentKind::Resume),
            _ => {}
        })
        .build()
}
