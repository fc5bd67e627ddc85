use super::trip::format_usd;
use crate::{
    catalog::{DayTemplate, DestinationTemplate},
    types::{BookingOption, DailyPlan, DestinationPlan, Pace, VacationRequest},
};

/// Surcharge applied to templates at even catalog positions.
const EVEN_POSITION_SURCHARGE: u32 = 60;
/// Price step between consecutive booking options.
const OPTION_STEP: f64 = 0.18;
/// Booking options are always priced for at least this many nights.
pub(super) const MIN_PRICED_NIGHTS: u32 = 3;

const DOWNTIME_TIP: &str = "Build in buffer afternoons for spontaneous downtime.";
const MOBILITY_TIP: &str =
    "Share mobility considerations when booking tours to ensure accessible transport and pacing.";

/// Expand a template into a plan for this request.
///
/// `position` is the template's index in its catalog. The template itself is
/// left untouched; every field of the plan is a fresh copy.
pub fn enrich(
    request: &VacationRequest,
    template: &DestinationTemplate,
    position: usize,
    nights: u32,
) -> DestinationPlan {
    let surcharge = if position % 2 == 0 {
        EVEN_POSITION_SURCHARGE
    } else {
        0
    };
    let base = f64::from(request.preferences.budget.daily_rate().min + surcharge);
    let priced_nights = f64::from(nights.max(MIN_PRICED_NIGHTS));

    let booking_options = template
        .booking_options
        .iter()
        .enumerate()
        .map(|(idx, option)| BookingOption {
            kind: option.kind,
            name: option.name.clone(),
            description: option.description.clone(),
            price_estimate: format_usd(base * (1.0 + idx as f64 * OPTION_STEP) * priced_nights),
            booking_url: option.booking_url.clone(),
        })
        .collect();

    DestinationPlan {
        destination: template.destination.clone(),
        country: template.country.clone(),
        summary: personalize_summary(&template.summary, request),
        highlights: template.highlights.clone(),
        ideal_for: template.ideal_for.clone(),
        climates: template.climates.clone(),
        budget: template.budget,
        activities: template.activities.clone(),
        tags: template.tags.clone(),
        booking_options,
        sample_itinerary: build_itinerary(&template.sample_itinerary, nights),
        travel_tips: expand_tips(&template.travel_tips, request),
        recommended_season: template.recommended_season.clone(),
        local_cuisine: template.local_cuisine.clone(),
        price_estimate: None,
    }
}

/// Days `1..=nights`, cycling through the authored days.
pub fn build_itinerary(days: &[DayTemplate], nights: u32) -> Vec<DailyPlan> {
    if days.is_empty() {
        return Vec::new();
    }

    (0..nights)
        .zip(days.iter().cycle())
        .map(|(idx, day)| DailyPlan {
            day: idx + 1,
            title: day.title.clone(),
            description: day.description.clone(),
        })
        .collect()
}

fn personalize_summary(summary: &str, request: &VacationRequest) -> String {
    match request.preferences.occasion() {
        Some(occasion) => format!(
            "{summary} Perfectly suited for celebrating {}.",
            occasion.to_lowercase()
        ),
        None => summary.to_string(),
    }
}

fn expand_tips(template_tips: &[String], request: &VacationRequest) -> Vec<String> {
    let preferences = &request.preferences;
    let mut tips: Vec<String> = Vec::with_capacity(template_tips.len() + 4);
    let mut add = |tip: String| {
        if !tips.contains(&tip) {
            tips.push(tip);
        }
    };

    for tip in template_tips {
        add(tip.clone());
    }

    if preferences.pace == Pace::Relaxed {
        add(DOWNTIME_TIP.to_string());
    }

    if !preferences.cuisine_focus.is_empty() {
        add(format!(
            "Reserve at least one chef-driven tasting menu that highlights {}.",
            preferences.cuisine_focus.join(", ")
        ));
    }

    if let Some(occasion) = preferences.occasion() {
        add(format!(
            "Notify hotels and guides about your {} to unlock surprise upgrades.",
            occasion.to_lowercase()
        ));
    }

    if preferences.mobility_notes().is_some() {
        add(MOBILITY_TIP.to_string());
    }

    tips
}
