//! Single-slot hand-off between the share intent receiver and the UI.
//!
//! A share can arrive before anything is listening (cold start from the
//! share sheet) or while a listener is attached (app already running). The
//! bridge covers both:
//! - with a listener attached, `publish` delivers synchronously
//! - without one, the URL waits in a one-element slot that the next
//!   `subscribe` drains
//!
//! The slot is last-write-wins. There is no queue and no acknowledgment from
//! the listener.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::error::DeliveryError;
use crate::extract::ExtractedUrl;

/// Receives URLs from the bridge.
///
/// `deliver` runs while the bridge lock is held, so it must not call back
/// into the same bridge.
pub trait ShareSink: Send + Sync {
    fn deliver(&self, url: &ExtractedUrl) -> Result<(), DeliveryError>;
}

impl<F> ShareSink for F
where
    F: Fn(&ExtractedUrl) + Send + Sync,
{
    fn deliver(&self, url: &ExtractedUrl) -> Result<(), DeliveryError> {
        self(url);
        Ok(())
    }
}

/// Identifies one subscription. Stale handles are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BridgeState {
    Idle,
    Attached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishOutcome {
    Delivered,
    Buffered,
}

struct Listener {
    handle: ListenerHandle,
    sink: Box<dyn ShareSink>,
}

#[derive(Default)]
struct Inner {
    pending: Option<ExtractedUrl>,
    listener: Option<Listener>,
    last_handle: u64,
}

pub struct ShareBridge {
    inner: Mutex<Inner>,
    channel: String,
    log_urls: bool,
}

impl ShareBridge {
    pub fn new() -> Self {
        Self::with_config(&BridgeConfig::default())
    }

    pub fn with_config(config: &BridgeConfig) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            channel: config.channel.clone(),
            log_urls: config.log_shared_urls,
        }
    }

    /// Hands `url` to the attached listener, or parks it until one attaches.
    ///
    /// A parked URL replaces whatever was parked before.
    pub fn publish(&self, url: ExtractedUrl) -> PublishOutcome {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if let Some(listener) = inner.listener.as_ref() {
            self.deliver_to(listener, &url);
            return PublishOutcome::Delivered;
        }

        if let Some(previous) = inner.pending.replace(url) {
            debug!(
                "[{}] Pending share overwritten, dropped {}",
                self.channel,
                self.describe(&previous)
            );
        } else {
            debug!("[{}] No listener attached, share buffered", self.channel);
        }
        PublishOutcome::Buffered
    }

    /// Attaches `sink` as the only listener, detaching any previous one.
    ///
    /// A buffered URL is delivered to the new listener before this returns.
    pub fn subscribe<S>(&self, sink: S) -> ListenerHandle
    where
        S: ShareSink + 'static,
    {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        inner.last_handle += 1;
        let handle = ListenerHandle(inner.last_handle);

        let replaced = inner.listener.replace(Listener {
            handle,
            sink: Box::new(sink),
        });
        match replaced {
            Some(old) => info!(
                "[{}] Share listener {} replaced by {}",
                self.channel, old.handle, handle
            ),
            None => info!("[{}] Share listener {} attached", self.channel, handle),
        }

        if let (Some(url), Some(listener)) = (inner.pending.take(), inner.listener.as_ref()) {
            self.deliver_to(listener, &url);
        }

        handle
    }

    /// Detaches the listener if `handle` is the active one.
    ///
    /// Returns `false` for a stale handle; nothing changes in that case.
    pub fn unsubscribe(&self, handle: ListenerHandle) -> bool {
        let mut inner = self.inner.lock();

        let is_active = inner
            .listener
            .as_ref()
            .is_some_and(|listener| listener.handle == handle);
        if !is_active {
            debug!(
                "[{}] Ignoring unsubscribe for stale listener {}",
                self.channel, handle
            );
            return false;
        }

        inner.listener = None;
        info!("[{}] Share listener {} detached", self.channel, handle);
        true
    }

    pub fn state(&self) -> BridgeState {
        if self.inner.lock().listener.is_some() {
            BridgeState::Attached
        } else {
            BridgeState::Idle
        }
    }

    pub fn has_pending(&self) -> bool {
        self.inner.lock().pending.is_some()
    }

    pub fn active_handle(&self) -> Option<ListenerHandle> {
        self.inner.lock().listener.as_ref().map(|l| l.handle)
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    fn deliver_to(&self, listener: &Listener, url: &ExtractedUrl) {
        match listener.sink.deliver(url) {
            Ok(()) => info!(
                "[{}] Delivered {} to listener {}",
                self.channel,
                self.describe(url),
                listener.handle
            ),
            Err(e) => warn!(
                "[{}] Listener {} did not take {}: {}",
                self.channel,
                listener.handle,
                self.describe(url),
                e
            ),
        }
    }

    fn describe(&self, url: &ExtractedUrl) -> String {
        if self.log_urls {
            url.to_string()
        } else {
            format!("<url, {} bytes>", url.as_str().len())
        }
    }
}

impl Default for ShareBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShareBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ShareBridge")
            .field("channel", &self.channel)
            .field("has_pending", &inner.pending.is_some())
            .field("listener", &inner.listener.as_ref().map(|l| l.handle))
            .finish()
    }
}
