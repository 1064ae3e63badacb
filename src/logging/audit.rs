// Audit helpers that emit planning facts.
//
// Every fact carries a minimal envelope: `schema_version`, `ts`, `plan_id`,
// `decision`. Timestamps are fixed to `TS_ZERO`, so re-planning an unchanged
// source emits byte-identical facts under the same plan id.
use serde_json::{json, Value};

use crate::constants::{DATASET_ROOT_KEY, PARTITION_KEY, WORK_UNIT_GUID};
use crate::logging::{FactsEmitter, TS_ZERO};
use crate::types::WorkUnit;

pub(crate) const SCHEMA_VERSION: i64 = 1;
const SUBSYSTEM: &str = "copyplan";

pub(crate) struct AuditCtx<'a> {
    facts: &'a dyn FactsEmitter,
    plan_id: String,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, plan_id: String) -> Self {
        Self { facts, plan_id }
    }
}

fn envelope_and_emit(ctx: &AuditCtx, event: &str, decision: &str, mut fields: Value) {
    if let Some(obj) = fields.as_object_mut() {
        obj.entry("schema_version").or_insert(json!(SCHEMA_VERSION));
        obj.entry("ts").or_insert(json!(TS_ZERO));
        obj.entry("plan_id").or_insert(json!(ctx.plan_id));
        obj.entry("decision").or_insert(json!(decision));
    }
    ctx.facts.emit(SUBSYSTEM, event, decision, fields);
}

/// One fact per assembled work unit.
pub(crate) fn emit_plan_fact(ctx: &AuditCtx, unit: &WorkUnit) {
    let fields = json!({
        "stage": "plan",
        "work_unit_guid": unit.prop(WORK_UNIT_GUID),
        "dataset_root": unit.prop(DATASET_ROOT_KEY),
        "partition": unit.prop(PARTITION_KEY),
    });
    envelope_and_emit(ctx, "plan", "success", fields);
}

/// Run-level summary fact with dataset/partition/work-unit counts.
pub(crate) fn emit_plan_summary(ctx: &AuditCtx, extra: Value) {
    let mut fields = json!({ "stage": "plan.summary" });
    if let (Some(obj), Some(eobj)) = (fields.as_object_mut(), extra.as_object()) {
        for (k, v) in eobj {
            obj.insert(k.clone(), v.clone());
        }
    }
    envelope_and_emit(ctx, "plan.summary", "success", fields);
}
