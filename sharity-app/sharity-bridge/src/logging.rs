use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, SharityError};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "sharity_bridge=info,tauri_plugin_sharity=info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directives`. Fails instead of panicking if
/// a subscriber is already installed.
pub fn init(default_directives: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| SharityError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init(DEFAULT_DIRECTIVES);
        assert!(matches!(
            init(DEFAULT_DIRECTIVES),
            Err(SharityError::Logging(_))
        ));
    }
}
