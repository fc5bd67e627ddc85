use crate::schemas::{schema_type_name, PayloadSchema, SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 10;
const ROOT_PATH: &str = "<root>";

/// A single field-level problem found in a submitted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Dotted field path, e.g. `personal.email`
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validate a raw payload and deserialize it into `T`.
///
/// JSON Schema violations are reported together; if the payload passes the
/// schema, typed deserialization runs with path tracking so the (rare)
/// serde-only failure still names its field.
pub fn validate_payload<T: PayloadSchema>(payload: &Value) -> Result<T, Vec<FieldIssue>> {
    check_schema(T::schema(), payload)?;

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            ROOT_PATH.to_string()
        } else {
            path
        };
        vec![FieldIssue::new(
            location,
            format!(
                "failed to read `{}`: {}",
                schema_type_name::<T>(),
                err.inner()
            ),
        )]
    })
}

/// Check a payload against a schema handle, collecting up to
/// [`MAX_SCHEMA_ERRORS`] issues.
pub fn check_schema(schema: &SchemaHandle, payload: &Value) -> Result<(), Vec<FieldIssue>> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            vec![FieldIssue::new(
                ROOT_PATH,
                format!(
                    "failed to prepare `{}` schema for validation: {}",
                    schema.schema_name(),
                    err
                ),
            )]
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut issues = Vec::new();

        for (idx, error) in errors.enumerate() {
            if idx == MAX_SCHEMA_ERRORS {
                issues.push(FieldIssue::new(ROOT_PATH, "additional errors truncated"));
                break;
            }
            issues.push(FieldIssue::new(
                pointer_to_path(&error.instance_path.to_string()),
                error.to_string(),
            ));
        }

        if issues.is_empty() {
            issues.push(FieldIssue::new(
                ROOT_PATH,
                format!("payload does not match `{}` schema", schema.schema_name()),
            ));
        }

        return Err(issues);
    }

    Ok(())
}

/// `/personal/email` -> `personal.email`
fn pointer_to_path(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else {
        trimmed.replace('/', ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_json_pointers_to_dotted_paths() {
        assert_eq!(pointer_to_path("/personal/email"), "personal.email");
        assert_eq!(pointer_to_path("/preferences/interests/0"), "preferences.interests.0");
        assert_eq!(pointer_to_path(""), "<root>");
    }
}
