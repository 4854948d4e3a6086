use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SharityError};

/// Intent action the OS uses for "share with".
pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// The only payload type the receiver accepts.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Logical name of the share event channel.
pub const DEFAULT_CHANNEL: &str = "fr.byteroast.music_sharity/share";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    pub channel: String,
    pub share_action: String,
    pub mime_type: String,
    /// Log full URLs instead of just their length.
    pub log_shared_urls: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            share_action: ACTION_SEND.to_string(),
            mime_type: MIME_TEXT_PLAIN.to_string(),
            log_shared_urls: false,
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.share_action.trim().is_empty() {
            return Err(SharityError::Config("shareAction must not be empty".into()));
        }
        if self.mime_type.trim().is_empty() {
            return Err(SharityError::Config("mimeType must not be empty".into()));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<BridgeConfig> {
    if !path.exists() {
        return Ok(BridgeConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: BridgeConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &BridgeConfig) -> Result<()> {
    config.validate()?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
