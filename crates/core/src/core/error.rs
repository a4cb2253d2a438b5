use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window or document available")]
    NoDocument,

    #[error("failed to register '{event}' listener: {reason}")]
    Listener { event: String, reason: String },

    #[error("invalid host settings: {0}")]
    Settings(#[from] serde_json::Error),
}
