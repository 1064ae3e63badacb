#![forbid(unsafe_code)]
//! Copyplan: deterministic work-unit planning for distributed, resumable bulk file copies.
//!
//! Planning model highlights:
//! - Discovery-to-work-unit translation: exactly one immutable, serializable [`types::WorkUnit`]
//!   per copyable file, grouped into partitions by file set, each partition sharing one
//!   [`types::Extract`] identity.
//! - Destination hierarchies mirror the relative layout of datasets under their shared
//!   discovery root, independent of the source store's absolute paths or URI scheme.
//! - Content-derived guids: a retried planning run reproduces the same identity for the same
//!   logical copy, letting the execution layer recognize already-completed files.
//! - No byte transfer happens here. Datasets and dataset finders are external collaborators
//!   behind the traits in [`adapters`]; the planner only consumes them.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod config;
pub mod logging;
pub mod types;

pub use api::*;
