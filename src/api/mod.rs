// Facade for API module; delegates to submodules under src/api/

use crate::adapters::DatasetFinderFactory;
use crate::config::Properties;
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::WorkUnit;

pub mod errors;
mod partition;
mod paths;
mod plan;

pub use partition::partition_copyable_files;
pub use paths::resolve_target_root;
pub use plan::{
    compute_and_set_work_unit_guid, deserialize_copyable_dataset, deserialize_copyable_file,
    serialize_copyable_dataset, serialize_copyable_file, work_unit_guid,
};

/// Plans copy work units from discovered datasets.
///
/// Each call to [`plan`](CopyPlanner::plan) is one self-contained planning
/// run: it starts fresh, shares nothing with prior runs except through the
/// guid mechanism, and either returns the complete ordered work-unit sequence
/// or an error with no partial output.
pub struct CopyPlanner<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    finder_factory: Box<dyn DatasetFinderFactory>,
}

impl<E: FactsEmitter, A: AuditSink> CopyPlanner<E, A> {
    pub fn new(facts: E, audit: A, finder_factory: Box<dyn DatasetFinderFactory>) -> Self {
        Self {
            facts,
            audit,
            finder_factory,
        }
    }

    /// Run one planning pass over `properties` and return the ordered
    /// work-unit sequence: dataset order, then partition order, then file
    /// order within each partition.
    ///
    /// # Example
    /// ```rust
    /// use copyplan::adapters::{DatasetFinder, SourceFile, StaticDataset, StaticDatasetFinder};
    /// use copyplan::config::Properties;
    /// use copyplan::logging::JsonlSink;
    /// use copyplan::types::Result;
    /// use copyplan::CopyPlanner;
    ///
    /// let finder = StaticDatasetFinder::new(
    ///     "/data",
    ///     vec![StaticDataset::new(
    ///         "/data/a",
    ///         vec![SourceFile::new("/data/a/f", "p1")],
    ///     )],
    /// );
    /// let factory = move |_props: &Properties| -> Result<Box<dyn DatasetFinder>> {
    ///     Ok(Box::new(finder.clone()))
    /// };
    /// let planner = CopyPlanner::new(JsonlSink, JsonlSink, Box::new(factory));
    ///
    /// let mut props = Properties::new();
    /// props.set(copyplan::constants::DATA_PUBLISHER_FINAL_DIR, "/out");
    /// let work_units = planner.plan(&props)?;
    /// assert_eq!(work_units.len(), 1);
    /// # Ok::<(), copyplan::errors::PlanError>(())
    /// ```
    pub fn plan(&self, properties: &Properties) -> Result<Vec<WorkUnit>, errors::PlanError> {
        plan::build(self, properties)
    }
}
