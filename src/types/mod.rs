pub mod request;
pub mod response;
pub mod vacation_types;

pub use request::{
    BudgetLevel, Climate, Pace, PersonalProfile, PreferenceProfile, TravelCompanion,
    VacationRequest,
};
pub use response::{PlanResponse, GENERIC_FAILURE_MESSAGE};
pub use vacation_types::{
    BookingKind, BookingOption, Currency, DailyPlan, DestinationPlan, VacationPlan,
};
