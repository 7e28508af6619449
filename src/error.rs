// src/error.rs
use thiserror::Error;

// Variants carry the formatted source error as a string; the type has to
// stay Clone to travel inside iced messages.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("read failed: {0}")]
    Io(String),

    #[error("CSV parse failed: {0}")]
    Parse(String),
}
