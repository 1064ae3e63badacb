pub mod audit;
pub mod facts;

pub use facts::{AuditSink, FactsEmitter, JsonlSink, LogSink};

/// Fixed timestamp stamped into emitted facts so planning output for an
/// unchanged source is byte-reproducible.
pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";
