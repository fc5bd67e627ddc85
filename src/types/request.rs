use crate::payload_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Who the traveler is going with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelCompanion {
    Solo,
    Couple,
    Family,
    Friends,
    Group,
}

impl TravelCompanion {
    pub const ALL: [TravelCompanion; 5] = [
        TravelCompanion::Solo,
        TravelCompanion::Couple,
        TravelCompanion::Family,
        TravelCompanion::Friends,
        TravelCompanion::Group,
    ];

    /// Display label used by form front-ends.
    pub fn label(self) -> &'static str {
        match self {
            TravelCompanion::Solo => "Solo Travelers",
            TravelCompanion::Couple => "Couples",
            TravelCompanion::Family => "Families",
            TravelCompanion::Friends => "Friends",
            TravelCompanion::Group => "Groups",
        }
    }
}

/// Budget tier, used both for matching and for nightly rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Budget,
    Midrange,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Tropical,
    Temperate,
    Cold,
    Arid,
    Mountainous,
    Coastal,
}

impl Climate {
    pub const ALL: [Climate; 6] = [
        Climate::Tropical,
        Climate::Temperate,
        Climate::Cold,
        Climate::Arid,
        Climate::Mountainous,
        Climate::Coastal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Climate::Tropical => "Tropical",
            Climate::Temperate => "Temperate",
            Climate::Cold => "Cold / Arctic",
            Climate::Arid => "Desert / Arid",
            Climate::Mountainous => "Mountainous",
            Climate::Coastal => "Coastal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Pace {
    #[serde(rename = "relaxed")]
    Relaxed,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "fast-paced")]
    FastPaced,
}

/// Traveler identity, contact details and travel window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfile {
    #[schemars(length(min = 2))]
    pub full_name: String,
    #[schemars(email)]
    pub email: String,
    #[serde(default)]
    #[schemars(length(min = 7, max = 20))]
    pub phone: String,
    /// Home city or departure airport
    #[schemars(length(min = 3))]
    pub home_airport: String,
    pub travel_companions: TravelCompanion,
    /// ISO-8601 calendar date the trip starts
    pub start_date: String,
    /// ISO-8601 calendar date the trip ends
    pub end_date: String,
    #[serde(default)]
    pub notes: String,
}

/// Shape of the trip the traveler is looking for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub budget: BudgetLevel,
    #[schemars(length(min = 1))]
    pub climate: Vec<Climate>,
    /// Free-text interests matched against destination activities
    #[schemars(length(min = 1))]
    pub interests: Vec<String>,
    #[schemars(length(min = 3))]
    pub accommodation: String,
    #[serde(default)]
    pub cuisine_focus: Vec<String>,
    pub pace: Pace,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility_considerations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_occasion: Option<String>,
}

impl PreferenceProfile {
    /// The special occasion, when one was actually given.
    pub fn occasion(&self) -> Option<&str> {
        non_blank(self.special_occasion.as_deref())
    }

    pub fn mobility_notes(&self) -> Option<&str> {
        non_blank(self.mobility_considerations.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// A traveler's planning request, as submitted through the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema(description = "Traveler profile and trip preferences submitted for planning")]
pub struct VacationRequest {
    pub personal: PersonalProfile,
    pub preferences: PreferenceProfile,
}
