use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharityError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl serde::Serialize for SharityError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharityError>;

/// Reported by a [`ShareSink`](crate::ShareSink) that could not take a URL.
///
/// The bridge logs these and moves on; they never reach the publisher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Listener is closed")]
    Closed,

    #[error("Delivery failed: {0}")]
    Failed(String),
}
