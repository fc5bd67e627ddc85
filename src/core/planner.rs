use super::{
    enrichment::{enrich, MIN_PRICED_NIGHTS},
    scoring::{score, MIN_MATCH_SCORE},
    trip::{estimate_price, format_usd, trip_length},
};
use crate::{
    catalog::Catalog,
    types::{Currency, DestinationPlan, VacationPlan, VacationRequest},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering};
use tracing::{debug, info};

/// Most recommendations a plan will carry.
pub const MAX_RECOMMENDATIONS: usize = 3;
/// Catalog entries returned when nothing clears the score threshold.
pub const FALLBACK_RECOMMENDATIONS: usize = 2;
/// Nights used for the trip-wide estimate when an itinerary is empty.
const EMPTY_ITINERARY_NIGHTS: u32 = 4;
/// Booking option price step used when a price has to be recomputed.
const RECOMPUTED_OPTION_STEP: f64 = 0.2;

/// One catalog entry's match score for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDestination {
    pub destination: String,
    pub country: String,
    pub score: f64,
}

/// Scores a destination catalog against traveler requests.
///
/// A planner holds no mutable state; one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Cow<'static, Catalog>,
    min_score: f64,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    /// A planner over the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: Cow::Borrowed(Catalog::builtin()),
            min_score: MIN_MATCH_SCORE,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Cow::Owned(catalog);
        self
    }

    /// Override the score a destination must exceed to be ranked.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Every template's score, in catalog order.
    pub fn rank(&self, request: &VacationRequest) -> Vec<ScoredDestination> {
        self.catalog
            .templates()
            .iter()
            .map(|template| ScoredDestination {
                destination: template.destination.clone(),
                country: template.country.clone(),
                score: score(request, template),
            })
            .collect()
    }

    /// Build the full plan for a request.
    ///
    /// Never fails: unreadable dates use the default trip length and a
    /// request matching nothing gets the first catalog entries instead.
    pub fn generate(&self, request: &VacationRequest) -> VacationPlan {
        let nights = trip_length(&request.personal.start_date, &request.personal.end_date);

        let mut ranked: Vec<(DestinationPlan, f64)> = self
            .catalog
            .templates()
            .iter()
            .enumerate()
            .map(|(position, template)| {
                let plan = enrich(request, template, position, nights);
                let score = score(request, template);
                debug!(
                    target: "vacation_planner::planner",
                    destination = %template.destination,
                    score,
                    "scored destination"
                );
                (plan, score)
            })
            .filter(|(_, score)| *score > self.min_score)
            .collect();

        // stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(MAX_RECOMMENDATIONS);

        let destinations = if ranked.is_empty() {
            info!(
                target: "vacation_planner::planner",
                nights,
                threshold = self.min_score,
                "no destination cleared the threshold, using catalog fallback"
            );
            self.fallback(request, nights)
        } else {
            info!(
                target: "vacation_planner::planner",
                nights,
                selected = ?ranked
                    .iter()
                    .map(|(plan, _)| plan.destination.as_str())
                    .collect::<Vec<_>>(),
                "ranked destinations"
            );
            ranked
                .into_iter()
                .enumerate()
                .map(|(rank, (plan, _))| finalize(plan, rank, nights, request))
                .collect()
        };

        VacationPlan {
            request: request.clone(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            currency: Currency::Usd,
            destinations,
        }
    }

    fn fallback(&self, request: &VacationRequest, nights: u32) -> Vec<DestinationPlan> {
        self.catalog
            .templates()
            .iter()
            .take(FALLBACK_RECOMMENDATIONS)
            .enumerate()
            .map(|(position, template)| enrich(request, template, position, nights))
            .collect()
    }
}

/// Post-process a selected recommendation; `rank` 0 is the lead.
fn finalize(
    mut plan: DestinationPlan,
    rank: usize,
    nights: u32,
    request: &VacationRequest,
) -> DestinationPlan {
    let span = plan
        .sample_itinerary
        .last()
        .map_or(EMPTY_ITINERARY_NIGHTS, |day| day.day);
    plan.price_estimate = Some(estimate_price(plan.budget, span.max(nights)));

    let base = f64::from(plan.budget.daily_rate().min);
    let priced_nights = f64::from(nights.max(MIN_PRICED_NIGHTS));
    for (idx, option) in plan.booking_options.iter_mut().enumerate() {
        if option.price_estimate.is_empty() {
            option.price_estimate = format_usd(
                base * priced_nights * (1.0 + idx as f64 * RECOMPUTED_OPTION_STEP),
            );
        }
    }

    let last = plan.sample_itinerary.len().saturating_sub(1);
    for (idx, day) in plan.sample_itinerary.iter_mut().enumerate() {
        if idx == 0 {
            day.title.push_str(" (Arrival Day)");
        } else if idx == last {
            day.title.push_str(" (Farewell)");
        }
    }

    plan.travel_tips.insert(
        0,
        format!("Ideal trip length: {}-day escape.", nights.max(4)),
    );

    if rank == 0 {
        plan.summary = format!(
            "{} Tailored as the lead recommendation for {}.",
            plan.summary, request.personal.full_name
        );
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(interests: &[&str], climate: &[&str]) -> VacationRequest {
        serde_json::from_value(json!({
            "personal": {
                "fullName": "Maya Chen",
                "email": "maya@example.com",
                "homeAirport": "SEA",
                "travelCompanions": "couple",
                "startDate": "2024-03-01",
                "endDate": "2024-03-05"
            },
            "preferences": {
                "budget": "midrange",
                "climate": climate,
                "interests": interests,
                "accommodation": "boutique hotel",
                "pace": "balanced"
            }
        }))
        .unwrap()
    }

    #[test]
    fn rank_reports_every_template_in_order() {
        let planner = Planner::new();
        let scores = planner.rank(&request(&["culture"], &["temperate"]));

        assert_eq!(scores.len(), planner.catalog().len());
        assert_eq!(scores[0].destination, "Kyoto");
        assert!(scores.iter().all(|entry| entry.score > 0.0 && entry.score <= 1.0));
    }

    #[test]
    fn finalize_labels_prices_and_leads() {
        let req = request(&["culture", "food"], &["temperate"]);
        let template = Catalog::builtin().find("Kyoto").unwrap();
        let plan = finalize(enrich(&req, template, 0, 4), 0, 4, &req);

        assert_eq!(plan.price_estimate.as_deref(), Some("$1,120 – $1,680"));
        assert_eq!(plan.sample_itinerary[0].title, "Historic Northern Kyoto (Arrival Day)");
        assert_eq!(plan.sample_itinerary[1].title, "Arashiyama Serenity");
        assert_eq!(plan.sample_itinerary[3].title, "Historic Northern Kyoto (Farewell)");
        assert_eq!(plan.travel_tips[0], "Ideal trip length: 4-day escape.");
        assert!(plan
            .summary
            .ends_with("Tailored as the lead recommendation for Maya Chen."));

        let runner_up = finalize(enrich(&req, template, 0, 4), 1, 4, &req);
        assert_eq!(runner_up.summary, template.summary);
    }

    #[test]
    fn single_day_trip_only_gets_arrival_label() {
        let req = request(&["culture"], &["temperate"]);
        let template = Catalog::builtin().find("Kyoto").unwrap();
        let plan = finalize(enrich(&req, template, 0, 1), 1, 1, &req);

        assert_eq!(plan.sample_itinerary.len(), 1);
        assert_eq!(plan.sample_itinerary[0].title, "Historic Northern Kyoto (Arrival Day)");
        assert_eq!(plan.travel_tips[0], "Ideal trip length: 4-day escape.");
        assert_eq!(plan.price_estimate.as_deref(), Some("$280 – $420"));
    }

    #[test]
    fn missing_booking_prices_are_recomputed() {
        let req = request(&["culture"], &["temperate"]);
        let template = Catalog::builtin().find("Kyoto").unwrap();
        let mut plan = enrich(&req, template, 0, 4);
        for option in &mut plan.booking_options {
            option.price_estimate.clear();
        }

        let plan = finalize(plan, 1, 4, &req);
        let prices: Vec<_> = plan
            .booking_options
            .iter()
            .map(|option| option.price_estimate.as_str())
            .collect();
        assert_eq!(prices, ["$1,120", "$1,344", "$1,568"]);
    }

    #[test]
    fn high_threshold_falls_back_to_first_two_entries() {
        let planner = Planner::new().with_min_score(1.0);
        let plan = planner.generate(&request(&["culture"], &["temperate"]));

        let names: Vec<_> = plan
            .destinations
            .iter()
            .map(|dest| dest.destination.as_str())
            .collect();
        assert_eq!(names, ["Kyoto", "Lisbon & Sintra"]);
        assert!(plan.destinations.iter().all(|dest| dest.price_estimate.is_none()));
        assert!(!plan.destinations[0].sample_itinerary[0]
            .title
            .contains("Arrival Day"));
    }
}
