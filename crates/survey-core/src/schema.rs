use serde_json::Value;

use crate::snapshot::FormSnapshot;

/// JSON schema of the persisted submission document.
///
/// Field names match the stored record exactly; integrators reading the
/// document store can validate against this shape.
pub fn submission_schema() -> Value {
    serde_json::to_value(schemars::schema_for!(FormSnapshot)).unwrap_or_default()
}
