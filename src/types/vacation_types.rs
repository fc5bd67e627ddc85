use crate::payload_schema;
use crate::types::request::{BudgetLevel, Climate, TravelCompanion, VacationRequest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Hotel,
    Tour,
    Experience,
    Transport,
}

/// A supplier offer attached to a destination, priced for the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    #[serde(rename = "type")]
    pub kind: BookingKind,
    pub name: String,
    pub description: String,
    /// Whole-dollar price for the stay, e.g. "$2,040"
    pub price_estimate: String,
    pub booking_url: String,
}

/// One numbered day of a sample itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyPlan {
    /// 1-based day counter within the trip
    pub day: u32,
    pub title: String,
    pub description: String,
}

/// A destination recommendation derived for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPlan {
    pub destination: String,
    pub country: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub ideal_for: Vec<TravelCompanion>,
    pub climates: Vec<Climate>,
    pub budget: BudgetLevel,
    pub activities: Vec<String>,
    pub tags: Vec<String>,
    pub booking_options: Vec<BookingOption>,
    pub sample_itinerary: Vec<DailyPlan>,
    pub travel_tips: Vec<String>,
    pub recommended_season: String,
    pub local_cuisine: Vec<String>,
    /// Trip-wide price range; only set on ranked recommendations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_estimate: Option<String>,
}

/// Currency every price string in a plan is quoted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

/// Full planning response: the echoed request plus 2-3 recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema]
#[serde(rename_all = "camelCase")]
pub struct VacationPlan {
    /// The request this plan was generated for
    pub request: VacationRequest,
    /// ISO-8601 UTC timestamp of generation
    pub generated_at: String,
    pub currency: Currency,
    /// Recommendations, best match first
    pub destinations: Vec<DestinationPlan>,
}
