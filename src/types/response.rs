use serde::{Deserialize, Serialize};

use crate::{schemas::FieldIssue, types::vacation_types::VacationPlan};

/// User-facing message for failures that must not leak internals.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "We were unable to generate a vacation plan. Please try again or adjust the information provided.";

/// Envelope returned by the request boundary.
///
/// Exactly one of `plan`, `errors` or `message` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// HTTP-style status for the transport layer; not serialized
    #[serde(skip, default = "default_status")]
    pub status: u16,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<VacationPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldIssue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_status() -> u16 {
    200
}

impl PlanResponse {
    pub fn success(plan: VacationPlan) -> Self {
        Self {
            status: 200,
            ok: true,
            plan: Some(plan),
            errors: None,
            message: None,
        }
    }

    pub fn invalid(errors: Vec<FieldIssue>) -> Self {
        Self {
            status: 422,
            ok: false,
            plan: None,
            errors: Some(errors),
            message: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            status: 500,
            ok: false,
            plan: None,
            errors: None,
            message: Some(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.ok
    }
}
