use crate::{
    core::Planner,
    schemas::{validate_payload, FieldIssue},
    types::{PlanResponse, VacationRequest},
};
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{error, info, warn};

const MIN_TAG_CHARS: usize = 2;

/// Validate a raw intake payload into a [`VacationRequest`].
///
/// Schema violations are reported first; list entries shorter than two
/// characters are checked once the payload has a typed shape.
pub fn validate_request(payload: &Value) -> Result<VacationRequest, Vec<FieldIssue>> {
    let request: VacationRequest = validate_payload(payload)?;

    let preferences = &request.preferences;
    let issues: Vec<FieldIssue> = short_entries("preferences.interests", &preferences.interests)
        .chain(short_entries(
            "preferences.cuisineFocus",
            &preferences.cuisine_focus,
        ))
        .collect();

    if issues.is_empty() {
        Ok(request)
    } else {
        Err(issues)
    }
}

fn short_entries<'a>(
    field: &'a str,
    entries: &'a [String],
) -> impl Iterator<Item = FieldIssue> + 'a {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.chars().count() < MIN_TAG_CHARS)
        .map(move |(idx, entry)| {
            FieldIssue::new(
                format!("{field}.{idx}"),
                format!("{entry:?} is shorter than {MIN_TAG_CHARS} characters"),
            )
        })
}

/// Validate a payload and plan it, wrapping the outcome in a response
/// envelope.
///
/// Invalid payloads never reach the planner. A planner failure is logged and
/// reported with a generic message only.
pub fn handle_plan_request(planner: &Planner, payload: &Value) -> PlanResponse {
    let request = match validate_request(payload) {
        Ok(request) => request,
        Err(issues) => {
            warn!(
                target: "vacation_planner::boundary",
                issues = issues.len(),
                first = issues.first().map_or("<root>", |issue| issue.path.as_str()),
                "rejected vacation request"
            );
            return PlanResponse::invalid(issues);
        }
    };

    match catch_unwind(AssertUnwindSafe(|| planner.generate(&request))) {
        Ok(plan) => {
            info!(
                target: "vacation_planner::boundary",
                destinations = plan.destinations.len(),
                "generated vacation plan"
            );
            PlanResponse::success(plan)
        }
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|msg| (*msg).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(
                target: "vacation_planner::boundary",
                error = %detail,
                "failed to generate vacation plan"
            );
            PlanResponse::failure()
        }
    }
}
