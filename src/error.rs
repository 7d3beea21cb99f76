// src/error.rs
use lectern_layout::LayoutError;
use thiserror::Error;

/// Errors raised while loading settings or building layout objects from them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("No list style named '{0}'")]
    UnknownListStyle(String),
}
