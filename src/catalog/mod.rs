//! Static destination templates the planner scores against.
//!
//! A [`Catalog`] is immutable once built. The built-in catalog is created on
//! first access and shared by every planner in the process.

mod library;

use crate::{
    error::{PlannerError, Result},
    types::{BookingKind, BudgetLevel, Climate, TravelCompanion},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path, sync::OnceLock};
use tracing::info;

/// Booking offer as authored in the catalog; priced per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOptionTemplate {
    #[serde(rename = "type")]
    pub kind: BookingKind,
    pub name: String,
    pub description: String,
    pub booking_url: String,
}

/// Itinerary day as authored; numbered when a plan is materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTemplate {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationTemplate {
    pub destination: String,
    pub country: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub ideal_for: Vec<TravelCompanion>,
    pub climates: Vec<Climate>,
    pub budget: BudgetLevel,
    pub activities: Vec<String>,
    pub booking_options: Vec<BookingOptionTemplate>,
    pub sample_itinerary: Vec<DayTemplate>,
    pub travel_tips: Vec<String>,
    pub recommended_season: String,
    pub local_cuisine: Vec<String>,
    /// Vibe tags, used for pace matching
    pub tags: Vec<String>,
}

/// Ordered, validated collection of destination templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    templates: Vec<DestinationTemplate>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog, rejecting empty catalogs, duplicate
    /// (destination, country) keys and templates without itinerary days.
    pub fn new(templates: Vec<DestinationTemplate>) -> Result<Self> {
        if templates.is_empty() {
            return Err(PlannerError::Catalog(
                "catalog must contain at least one destination".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert((template.destination.as_str(), template.country.as_str())) {
                return Err(PlannerError::Catalog(format!(
                    "duplicate destination `{}, {}`",
                    template.destination, template.country
                )));
            }
            if template.sample_itinerary.is_empty() {
                return Err(PlannerError::Catalog(format!(
                    "destination `{}` has no sample itinerary",
                    template.destination
                )));
            }
        }

        Ok(Self { templates })
    }

    /// The hand-authored catalog shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let templates = library::destination_library();
            info!(
                target: "vacation_planner::catalog",
                count = templates.len(),
                "loaded built-in destination catalog"
            );
            Catalog { templates }
        })
    }

    /// Parse a JSON array of templates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: Vec<DestinationTemplate> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            target: "vacation_planner::catalog",
            count = catalog.len(),
            path = %path.display(),
            "loaded destination catalog from file"
        );
        Ok(catalog)
    }

    pub fn templates(&self) -> &[DestinationTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn find(&self, destination: &str) -> Option<&DestinationTemplate> {
        self.templates
            .iter()
            .find(|template| template.destination == destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 8);

        let rebuilt = Catalog::new(builtin.templates().to_vec()).unwrap();
        assert_eq!(&rebuilt, builtin);
    }

    #[test]
    fn builtin_templates_have_three_offers_and_days() {
        for template in Catalog::builtin().templates() {
            assert_eq!(template.booking_options.len(), 3, "{}", template.destination);
            assert_eq!(template.sample_itinerary.len(), 3, "{}", template.destination);
            assert!(!template.activities.is_empty());
        }
    }

    #[test]
    fn rejects_duplicate_and_empty_catalogs() {
        assert!(matches!(Catalog::new(Vec::new()), Err(PlannerError::Catalog(_))));

        let kyoto = Catalog::builtin().find("Kyoto").cloned().unwrap();
        let err = Catalog::new(vec![kyoto.clone(), kyoto]).unwrap_err();
        assert!(err.to_string().contains("duplicate destination"));
    }

    #[test]
    fn rejects_templates_without_itinerary() {
        let mut kyoto = Catalog::builtin().find("Kyoto").cloned().unwrap();
        kyoto.sample_itinerary.clear();
        assert!(Catalog::new(vec![kyoto]).is_err());
    }

    #[test]
    fn json_catalog_round_trips_through_loader() {
        let json = serde_json::to_string(Catalog::builtin().templates()).unwrap();
        let loaded = Catalog::from_json_str(&json).unwrap();
        assert_eq!(loaded.templates()[0].destination, "Kyoto");
        assert_eq!(loaded.len(), 8);
    }
}
