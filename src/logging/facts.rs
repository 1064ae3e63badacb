//! Observability seams: structured facts and leveled audit lines.
//!
//! The planner emits one structured fact per assembled work unit plus a run
//! summary; embedders route them to their metrics pipeline by implementing
//! [`FactsEmitter`]. [`AuditSink`] carries the human-readable planning log.
use std::sync::Arc;

use log::Level;
use serde_json::Value;

/// Structured fact sink; the planner's metric-tag surface.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Leveled human-readable audit sink.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

impl<T: FactsEmitter + ?Sized> FactsEmitter for Arc<T> {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        (**self).emit(subsystem, event, decision, fields);
    }
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn log(&self, level: Level, msg: &str) {
        (**self).log(level, msg);
    }
}

/// No-op sink for both seams; handy default for embedders and tests.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Audit sink that forwards to the `log` macros.
#[derive(Default)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
