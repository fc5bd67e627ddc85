use crate::{
    catalog::DestinationTemplate,
    types::{BudgetLevel, Pace, VacationRequest},
};
use std::collections::HashSet;

/// Matches scoring at or below this are dropped from a ranking.
pub const MIN_MATCH_SCORE: f64 = 0.15;

const ACTIVITY_WEIGHT: f64 = 0.4;
const BUDGET_WEIGHT: f64 = 0.2;
const CLIMATE_WEIGHT: f64 = 0.2;
const COMPANION_WEIGHT: f64 = 0.1;
const PACE_WEIGHT: f64 = 0.1;

const FAST_PACED_TAGS: [&str; 2] = ["adventure", "nightlife"];

/// Lowercase a tag and keep only ASCII letters, whitespace, `/` and `-`.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_whitespace() || matches!(ch, '/' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Weighted match between a request and one template, in `[0, 1]`.
pub fn score(request: &VacationRequest, template: &DestinationTemplate) -> f64 {
    activity_score(&request.preferences.interests, &template.activities) * ACTIVITY_WEIGHT
        + budget_score(request.preferences.budget, template.budget) * BUDGET_WEIGHT
        + climate_score(request, template) * CLIMATE_WEIGHT
        + companion_score(request, template) * COMPANION_WEIGHT
        + pace_score(request.preferences.pace, &template.tags) * PACE_WEIGHT
}

fn activity_score(interests: &[String], activities: &[String]) -> f64 {
    let wanted: HashSet<String> = interests.iter().map(|item| normalize_tag(item)).collect();
    let shared = activities
        .iter()
        .filter(|activity| wanted.contains(&normalize_tag(activity)))
        .count();

    shared as f64 / activities.len().max(1) as f64
}

fn budget_score(requested: BudgetLevel, offered: BudgetLevel) -> f64 {
    match (requested, offered) {
        (requested, offered) if requested == offered => 1.0,
        (BudgetLevel::Luxury, offered) if offered != BudgetLevel::Budget => 0.75,
        (BudgetLevel::Budget, offered) if offered != BudgetLevel::Luxury => 0.7,
        _ => 0.4,
    }
}

fn climate_score(request: &VacationRequest, template: &DestinationTemplate) -> f64 {
    let overlaps = request
        .preferences
        .climate
        .iter()
        .any(|climate| template.climates.contains(climate));

    if overlaps {
        1.0
    } else {
        0.25
    }
}

fn companion_score(request: &VacationRequest, template: &DestinationTemplate) -> f64 {
    if template
        .ideal_for
        .contains(&request.personal.travel_companions)
    {
        1.0
    } else {
        0.5
    }
}

fn pace_score(pace: Pace, tags: &[String]) -> f64 {
    let has_tag = |wanted: &str| tags.iter().any(|tag| tag == wanted);

    match pace {
        Pace::Relaxed if has_tag("wellness") => 1.0,
        Pace::FastPaced if FAST_PACED_TAGS.iter().any(|tag| has_tag(tag)) => 1.0,
        _ => 0.7,
    }
}
