use thiserror::Error;

/// Terminal failure of a planning run.
///
/// A run either produces a complete, internally consistent work-unit sequence
/// or surfaces exactly one of these; the planner performs no retries and
/// swallows no errors.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A required property is missing or invalid; raised before any dataset work.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Finder construction or dataset enumeration failed; no partial output.
    #[error("discovery error: {0}")]
    Discovery(String),
    /// A copyable file or dataset descriptor could not be encoded or decoded.
    /// Fatal rather than skipped, since a missing work unit would silently
    /// drop data from the copy job.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<crate::types::Error> for PlanError {
    fn from(e: crate::types::Error) -> Self {
        use crate::types::ErrorKind::{Config, InvalidPath, Io, Serde};
        match e.kind {
            Config => PlanError::Configuration(e.msg),
            InvalidPath | Io => PlanError::Discovery(e.msg),
            Serde => PlanError::Serialization(e.msg),
        }
    }
}
