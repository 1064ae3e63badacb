//! Failure semantics: preconditions fail before discovery, discovery failures
//! abort the run, and empty inputs are not errors.
mod util;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use copyplan::adapters::{DatasetFinder, SourceFile, StaticDataset, StaticDatasetFinder};
use copyplan::config::Properties;
use copyplan::errors::PlanError;
use copyplan::logging::JsonlSink;
use copyplan::types::Result;
use copyplan::CopyPlanner;
use util::{job_props, planner_for, CollectingSink, FailingFinder};

#[test]
fn missing_publish_dir_fails_before_the_finder_is_constructed() {
    let called = Arc::new(AtomicBool::new(false));
    let observed = Arc::clone(&called);
    let factory = move |_props: &Properties| -> Result<Box<dyn DatasetFinder>> {
        observed.store(true, Ordering::SeqCst);
        Ok(Box::new(StaticDatasetFinder::new("/data", vec![])))
    };
    let planner = CopyPlanner::new(JsonlSink, JsonlSink, Box::new(factory));

    let err = planner.plan(&Properties::new()).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)));
    assert!(
        err.to_string().contains("data.publisher.final.dir"),
        "error should name the missing key: {err}"
    );
    assert!(!called.load(Ordering::SeqCst), "finder must not be constructed");
}

#[test]
fn empty_dataset_produces_zero_work_units_and_partitions() {
    let finder = StaticDatasetFinder::new(
        "/data",
        vec![StaticDataset::new("/data/a", vec![])],
    );
    let (planner, facts) = planner_for(finder);
    let units = planner.plan(&job_props("/out")).unwrap();
    assert!(units.is_empty());

    let summary = &facts.facts_named("plan.summary")[0].2;
    assert_eq!(summary["work_unit_count"], 0);
    assert_eq!(summary["partition_count"], 0);
    assert_eq!(summary["dataset_count"], 1);
}

#[test]
fn enumeration_failure_aborts_the_whole_run() {
    let finder = FailingFinder {
        common_root: "/data".into(),
        dataset_root: "/data/a".into(),
    };
    let sink = Arc::new(CollectingSink::default());
    let factory = move |_props: &Properties| -> Result<Box<dyn DatasetFinder>> {
        Ok(Box::new(finder.clone()))
    };
    let planner = CopyPlanner::new(Arc::clone(&sink), Arc::clone(&sink), Box::new(factory));

    let err = planner.plan(&job_props("/out")).unwrap_err();
    assert!(matches!(err, PlanError::Discovery(_)));
    assert!(
        err.to_string().contains("/data/a"),
        "error should name the dataset: {err}"
    );
    assert!(
        sink.facts_named("plan.summary").is_empty(),
        "a failed run must not report a summary"
    );
}

#[test]
fn dataset_outside_the_common_root_is_a_discovery_error() {
    let finder = StaticDatasetFinder::new(
        "/data",
        vec![StaticDataset::new(
            "/elsewhere/a",
            vec![SourceFile::new("/elsewhere/a/f", "p1")],
        )],
    );
    let (planner, _) = planner_for(finder);
    let err = planner.plan(&job_props("/out")).unwrap_err();
    assert!(matches!(err, PlanError::Discovery(_)));
}

#[test]
fn finder_construction_failure_surfaces_as_discovery_error() {
    let factory = |_props: &Properties| -> Result<Box<dyn DatasetFinder>> {
        Err(copyplan::types::Error::new(
            copyplan::types::ErrorKind::Io,
            "store unreachable",
        ))
    };
    let planner = CopyPlanner::new(JsonlSink, JsonlSink, Box::new(factory));
    let err = planner.plan(&job_props("/out")).unwrap_err();
    assert!(matches!(err, PlanError::Discovery(_)));
    assert!(err.to_string().contains("constructing dataset finder"));
}

#[test]
fn the_factory_dispatches_on_job_properties() {
    let factory = |props: &Properties| -> Result<Box<dyn DatasetFinder>> {
        match props.get(copyplan::constants::DATASET_FINDER_KEY) {
            Some("empty") => Ok(Box::new(StaticDatasetFinder::new("/data", vec![]))),
            other => Err(copyplan::types::Error::new(
                copyplan::types::ErrorKind::Config,
                format!("unknown dataset finder {other:?}"),
            )),
        }
    };
    let planner = CopyPlanner::new(JsonlSink, JsonlSink, Box::new(factory));

    let mut props = job_props("/out");
    props.set(copyplan::constants::DATASET_FINDER_KEY, "empty");
    assert!(planner.plan(&props).unwrap().is_empty());

    let err = planner.plan(&job_props("/out")).unwrap_err();
    assert!(matches!(err, PlanError::Configuration(_)));
}
