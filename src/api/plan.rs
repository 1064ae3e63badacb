//! api/plan.rs — the planning pass: datasets in, ordered work units out.
use std::path::PathBuf;
use std::sync::Arc;

use log::Level;
use serde_json::json;

use crate::config::{CopyConfiguration, CopyContext, Properties};
use crate::constants::{
    CONVERTER_CLASSES_KEY, COPY_PREFIX, DATASET_ROOT_KEY, DATASET_URN_KEY,
    DATA_PUBLISHER_FINAL_DIR, PARTITION_KEY, SERIALIZED_COPYABLE_DATASET,
    SERIALIZED_COPYABLE_FILE, WORK_UNIT_GUID,
};
use crate::logging::audit::{emit_plan_fact, emit_plan_summary, AuditCtx};
use crate::logging::{AuditSink, FactsEmitter};
use crate::types::ids::{plan_id, Guid};
use crate::types::{
    CopyableDatasetMetadata, CopyableFile, Error, ErrorKind, Extract, Result, TableType, WorkUnit,
};

use super::errors::PlanError;
use super::partition::partition_copyable_files;
use super::paths::resolve_target_root;

/// Build the full ordered work-unit sequence for one planning run.
///
/// Order: dataset discovery order, then partition order, then file order
/// within each partition. Any failure aborts the run; partially built output
/// is discarded, never returned.
pub(super) fn build<E: FactsEmitter, A: AuditSink>(
    api: &super::CopyPlanner<E, A>,
    properties: &Properties,
) -> std::result::Result<Vec<WorkUnit>, PlanError> {
    // Precondition, checked before the finder is even constructed.
    let base_publish_dir = properties.get(DATA_PUBLISHER_FINAL_DIR).ok_or_else(|| {
        PlanError::Configuration(format!("missing property {DATA_PUBLISHER_FINAL_DIR}"))
    })?;
    let base_publish_dir = PathBuf::from(base_publish_dir);

    let finder = api
        .finder_factory
        .create(properties)
        .map_err(|e| e.context("constructing dataset finder"))?;
    let datasets = finder
        .find_datasets()
        .map_err(|e| e.context("discovering datasets"))?;
    let common_root = finder.common_dataset_root();

    // One shared context for the whole run; later datasets observe copy
    // decisions made by earlier ones through it.
    let copy_context = Arc::new(CopyContext::new());

    let mut work_units: Vec<WorkUnit> = Vec::new();
    let mut partition_count = 0usize;

    for dataset in &datasets {
        let dataset_root = dataset.dataset_root().to_path_buf();
        let target_root = resolve_target_root(&base_publish_dir, &dataset_root, &common_root)
            .map_err(|e| e.context(format!("dataset {}", dataset_root.display())))?;
        let configuration = CopyConfiguration::builder(properties)
            .target_root(&target_root)
            .copy_context(Arc::clone(&copy_context))
            .build()?;
        let files = dataset
            .copyable_files(&configuration)
            .map_err(|e| e.context(format!("enumerating dataset {}", dataset_root.display())))?;
        let partitions = partition_copyable_files(files);
        let metadata = CopyableDatasetMetadata::new(&dataset_root, &target_root);

        for partition in partitions {
            partition_count += 1;
            let extract = Extract::new(TableType::Snapshot, COPY_PREFIX, partition.name());
            for file in partition.into_files() {
                let unit = assemble_work_unit(&extract, properties, &file, &metadata)
                    .map_err(|e| e.context(format!("file {}", file.origin.display())))?;
                work_units.push(unit);
            }
        }
    }

    emit_facts(api, &work_units, datasets.len(), partition_count);
    api.audit.log(
        Level::Info,
        &format!(
            "created {} work units across {} datasets",
            work_units.len(),
            datasets.len()
        ),
    );

    Ok(work_units)
}

/// Assemble one work unit for one (dataset, partition, file) triple.
fn assemble_work_unit(
    extract: &Extract,
    properties: &Properties,
    file: &CopyableFile,
    metadata: &CopyableDatasetMetadata,
) -> Result<WorkUnit> {
    let mut unit = WorkUnit::new(extract.clone());
    unit.add_all(properties);
    serialize_copyable_file(&mut unit, file)?;
    serialize_copyable_dataset(&mut unit, metadata)?;
    unit.set_prop(
        DATASET_ROOT_KEY,
        metadata.dataset_root.display().to_string(),
    );
    unit.set_prop(DATASET_URN_KEY, metadata.dataset_urn());
    unit.set_prop(PARTITION_KEY, &file.file_set);
    compute_and_set_work_unit_guid(&mut unit)?;
    Ok(unit)
}

/// Store the JSON form of `file` on the work unit under the wire-contract key.
pub fn serialize_copyable_file(unit: &mut WorkUnit, file: &CopyableFile) -> Result<()> {
    unit.set_prop(SERIALIZED_COPYABLE_FILE, file.encode()?);
    Ok(())
}

/// Read back the copyable file stored by [`serialize_copyable_file`].
pub fn deserialize_copyable_file(unit: &WorkUnit) -> Result<CopyableFile> {
    let raw = unit.prop(SERIALIZED_COPYABLE_FILE).ok_or_else(|| {
        Error::new(
            ErrorKind::Serde,
            format!("work unit has no {SERIALIZED_COPYABLE_FILE} property"),
        )
    })?;
    CopyableFile::decode(raw)
}

/// Store the JSON form of `metadata` on the work unit under the wire-contract key.
pub fn serialize_copyable_dataset(
    unit: &mut WorkUnit,
    metadata: &CopyableDatasetMetadata,
) -> Result<()> {
    unit.set_prop(SERIALIZED_COPYABLE_DATASET, metadata.encode()?);
    Ok(())
}

/// Read back the dataset metadata stored by [`serialize_copyable_dataset`].
pub fn deserialize_copyable_dataset(unit: &WorkUnit) -> Result<CopyableDatasetMetadata> {
    let raw = unit.prop(SERIALIZED_COPYABLE_DATASET).ok_or_else(|| {
        Error::new(
            ErrorKind::Serde,
            format!("work unit has no {SERIALIZED_COPYABLE_DATASET} property"),
        )
    })?;
    CopyableDatasetMetadata::decode(raw)
}

/// Derive and store the work unit's guid.
///
/// Seeded with the unit's own converter chain descriptor (empty when none),
/// then folded with the serialized copyable file, so two units name the same
/// logical copy exactly when both match. Other per-unit configuration, writer
/// settings included, is deliberately excluded; downstream resumption depends
/// on this narrow definition.
pub fn compute_and_set_work_unit_guid(unit: &mut WorkUnit) -> Result<()> {
    let guid = {
        let converters = unit.prop(CONVERTER_CLASSES_KEY).unwrap_or("");
        let serialized = unit.prop(SERIALIZED_COPYABLE_FILE).ok_or_else(|| {
            Error::new(
                ErrorKind::Serde,
                "cannot compute a guid before the copyable file is serialized onto the work unit",
            )
        })?;
        Guid::from_strings([converters]).append(serialized.as_bytes())
    };
    unit.set_prop(WORK_UNIT_GUID, guid.to_string());
    Ok(())
}

/// Guid lookup for a work unit; `Ok(None)` when never computed.
pub fn work_unit_guid(unit: &WorkUnit) -> Result<Option<Guid>> {
    match unit.prop(WORK_UNIT_GUID) {
        Some(raw) => Ok(Some(Guid::parse(raw)?)),
        None => Ok(None),
    }
}

fn emit_facts<E: FactsEmitter, A: AuditSink>(
    api: &super::CopyPlanner<E, A>,
    work_units: &[WorkUnit],
    dataset_count: usize,
    partition_count: usize,
) {
    let guids: Vec<Guid> = work_units
        .iter()
        .filter_map(|u| u.prop(WORK_UNIT_GUID))
        .filter_map(|s| Guid::parse(s).ok())
        .collect();
    let ctx = AuditCtx::new(&api.facts as &dyn FactsEmitter, plan_id(&guids).to_string());
    for unit in work_units {
        emit_plan_fact(&ctx, unit);
    }
    emit_plan_summary(
        &ctx,
        json!({
            "dataset_count": dataset_count,
            "partition_count": partition_count,
            "work_unit_count": work_units.len(),
        }),
    );
}
