//! vacation-planner: scores a destination catalog against traveler
//! preferences and assembles ranked, priced vacation plans.
//!
//! The engine is a pure function of a validated [`VacationRequest`] and an
//! immutable [`Catalog`]; the request boundary validates raw JSON first.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use vacation_planner::{handle_plan_request, Planner};
//!
//! let planner = Planner::new();
//! let payload = json!({
//!     "personal": {
//!         "fullName": "Maya Chen",
//!         "email": "maya@example.com",
//!         "homeAirport": "SEA",
//!         "travelCompanions": "couple",
//!         "startDate": "2024-03-01",
//!         "endDate": "2024-03-05"
//!     },
//!     "preferences": {
//!         "budget": "midrange",
//!         "climate": ["temperate"],
//!         "interests": ["culture", "food"],
//!         "accommodation": "boutique hotel",
//!         "pace": "balanced"
//!     }
//! });
//!
//! let response = handle_plan_request(&planner, &payload);
//! println!("{}", serde_json::to_string_pretty(&response).unwrap());
//! ```

extern crate self as vacation_planner;

pub mod catalog;
pub mod core;
pub mod error;
pub mod schemas;
pub(crate) mod services;
pub mod types;

pub use catalog::{BookingOptionTemplate, Catalog, DayTemplate, DestinationTemplate};
pub use core::{Planner, ScoredDestination};
pub use error::{PlannerError, Result};
pub use schemas::{schema_type_name, FieldIssue, PayloadSchema, SchemaHandle};
pub use services::request_handler::{handle_plan_request, validate_request};
pub use types::{
    BookingKind, BookingOption, BudgetLevel, Climate, Currency, DailyPlan, DestinationPlan, Pace,
    PersonalProfile, PlanResponse, PreferenceProfile, TravelCompanion, VacationPlan,
    VacationRequest, GENERIC_FAILURE_MESSAGE,
};
pub use vacation_planner_macros::payload_schema;

pub use core as engine;
pub use schemas as schema;

#[cfg(feature = "cli")]
pub mod cli;
