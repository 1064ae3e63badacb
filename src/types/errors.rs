//! Error types used across copyplan.
use thiserror::Error;

/// Leaf error categories for type-level operations and adapters.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("missing or invalid configuration")]
    Config,
    #[error("invalid path")]
    InvalidPath,
    #[error("io error")]
    Io,
    #[error("serialization error")]
    Serde,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }

    /// Prefix the message with the dataset/file context it occurred in.
    #[must_use]
    pub fn context(mut self, ctx: impl AsRef<str>) -> Self {
        self.msg = format!("{}: {}", ctx.as_ref(), self.msg);
        self
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
