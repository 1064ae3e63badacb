//! Shared helpers for integration tests: in-memory datasets, a failing
//! dataset, and collecting sinks.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use copyplan::adapters::{
    CopyableDataset, DatasetFinder, SourceFile, StaticDataset, StaticDatasetFinder,
};
use copyplan::config::{CopyConfiguration, Properties};
use copyplan::constants::DATA_PUBLISHER_FINAL_DIR;
use copyplan::logging::{AuditSink, FactsEmitter};
use copyplan::types::{CopyableFile, Error, ErrorKind, Result};
use copyplan::CopyPlanner;
use log::Level;
use serde_json::Value;

/// Recorded fact: (event, decision, fields).
pub type Fact = (String, String, Value);

/// Sink recording every fact and audit line for assertions.
#[derive(Default)]
pub struct CollectingSink {
    pub facts: Mutex<Vec<Fact>>,
    pub lines: Mutex<Vec<(Level, String)>>,
}

impl CollectingSink {
    pub fn facts_named(&self, event: &str) -> Vec<Fact> {
        self.facts
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _, _)| e == event)
            .cloned()
            .collect()
    }
}

impl FactsEmitter for CollectingSink {
    fn emit(&self, _subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.facts
            .lock()
            .unwrap()
            .push((event.to_string(), decision.to_string(), fields));
    }
}

impl AuditSink for CollectingSink {
    fn log(&self, level: Level, msg: &str) {
        self.lines.lock().unwrap().push((level, msg.to_string()));
    }
}

pub fn job_props(publish_dir: &str) -> Properties {
    let mut p = Properties::new();
    p.set(DATA_PUBLISHER_FINAL_DIR, publish_dir);
    p
}

/// Planner over a fixed finder, with the collecting sink exposed for assertions.
pub fn planner_for(
    finder: StaticDatasetFinder,
) -> (
    CopyPlanner<Arc<CollectingSink>, Arc<CollectingSink>>,
    Arc<CollectingSink>,
) {
    let sink = Arc::new(CollectingSink::default());
    let factory = move |_props: &Properties| -> Result<Box<dyn DatasetFinder>> {
        Ok(Box::new(finder.clone()))
    };
    let planner = CopyPlanner::new(Arc::clone(&sink), Arc::clone(&sink), Box::new(factory));
    (planner, sink)
}

/// One dataset `/data/a` under common root `/data`: two `p1` files and one
/// `p2` file.
pub fn single_dataset_finder() -> StaticDatasetFinder {
    StaticDatasetFinder::new(
        "/data",
        vec![StaticDataset::new(
            "/data/a",
            vec![
                SourceFile::new("/data/a/x1", "p1"),
                SourceFile::new("/data/a/sub/x2", "p1"),
                SourceFile::new("/data/a/y1", "p2"),
            ],
        )],
    )
}

/// Dataset whose enumeration always fails with an I/O error.
#[derive(Clone, Debug)]
pub struct FailingDataset {
    pub root: PathBuf,
}

impl CopyableDataset for FailingDataset {
    fn dataset_root(&self) -> &Path {
        &self.root
    }

    fn copyable_files(&self, _configuration: &CopyConfiguration) -> Result<Vec<CopyableFile>> {
        Err(Error::new(ErrorKind::Io, "source store unreachable"))
    }
}

/// Finder yielding a single [`FailingDataset`].
#[derive(Clone, Debug)]
pub struct FailingFinder {
    pub common_root: PathBuf,
    pub dataset_root: PathBuf,
}

impl DatasetFinder for FailingFinder {
    fn find_datasets(&self) -> Result<Vec<Box<dyn CopyableDataset>>> {
        Ok(vec![Box::new(FailingDataset {
            root: self.dataset_root.clone(),
        })])
    }

    fn common_dataset_root(&self) -> PathBuf {
        self.common_root.clone()
    }
}
