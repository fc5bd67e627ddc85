pub mod enrichment;
pub mod planner;
pub mod scoring;
pub mod trip;

pub use enrichment::{build_itinerary, enrich};
pub use planner::{Planner, ScoredDestination, FALLBACK_RECOMMENDATIONS, MAX_RECOMMENDATIONS};
pub use scoring::{normalize_tag, score, MIN_MATCH_SCORE};
pub use trip::{estimate_price, format_usd, trip_length, DailyRate, DEFAULT_NIGHTS};
