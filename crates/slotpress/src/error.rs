use slotpress_core::raw::RawError;
use slotpress_core::SlotError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout file {path}: {reason}")]
    LayoutFile { path: String, reason: String },

    #[error("Rejected: {0}")]
    Slot(#[from] SlotError),

    #[error("Malformed articles: {0}")]
    Raw(#[from] RawError),
}
