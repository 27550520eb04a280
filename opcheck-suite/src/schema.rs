//! JSON schema validation
//!
//! Schemas are derived from the response types themselves, so a body that
//! decodes but carries wrongly typed or missing required fields is caught.

use schemars::JsonSchema;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("response does not match schema: {}", .0.join("; "))]
    Violations(Vec<String>),
}

/// JSON schema describing `T`
pub fn schema_for<T: JsonSchema>() -> serde_json::Value {
    schemars::schema_for!(T).to_value()
}

/// Validate `instance` against `schema`, collecting every violation
pub fn validate_json_schema(
    instance: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), SchemaError> {
    let validator =
        jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;

    let violations: Vec<String> = validator
        .iter_errors(instance)
        .map(|error| error.to_string())
        .collect();

    if violations.is_empty() {
        debug!("Response matches schema");
        Ok(())
    } else {
        warn!("Schema validation failed: {}", violations.join("; "));
        Err(SchemaError::Violations(violations))
    }
}
