use serde_json::json;
use std::sync::Arc;
use vacation_planner::{
    core::{score, trip_length, MIN_MATCH_SCORE},
    Catalog, Planner, VacationPlan, VacationRequest,
};

fn request(
    budget: &str,
    climate: &[&str],
    interests: &[&str],
    companions: &str,
    pace: &str,
    dates: (&str, &str),
) -> VacationRequest {
    serde_json::from_value(json!({
        "personal": {
            "fullName": "Jordan Blake",
            "email": "jordan@example.com",
            "phone": "+1 555 0100",
            "homeAirport": "ORD",
            "travelCompanions": companions,
            "startDate": dates.0,
            "endDate": dates.1,
            "notes": ""
        },
        "preferences": {
            "budget": budget,
            "climate": climate,
            "interests": interests,
            "accommodation": "boutique hotel",
            "cuisineFocus": [],
            "pace": pace
        }
    }))
    .unwrap()
}

fn culture_request() -> VacationRequest {
    request(
        "midrange",
        &["temperate"],
        &["culture", "food"],
        "couple",
        "balanced",
        ("2024-03-01", "2024-03-05"),
    )
}

fn names(plan: &VacationPlan) -> Vec<&str> {
    plan.destinations
        .iter()
        .map(|dest| dest.destination.as_str())
        .collect()
}

fn parse_price(text: &str) -> u64 {
    text.trim_start_matches('$').replace(',', "").parse().unwrap()
}

#[test]
fn test_culture_request_ranks_kyoto() {
    let planner = Planner::new();
    let req = culture_request();
    let plan = planner.generate(&req);

    assert_eq!(
        names(&plan),
        ["Cape Town & Winelands", "Kyoto", "Dubrovnik & Dalmatian Coast"]
    );

    let kyoto = planner.catalog().find("Kyoto").unwrap();
    assert!(score(&req, kyoto) > MIN_MATCH_SCORE);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["request"]["preferences"]["budget"], "midrange");
    assert_eq!(json["destinations"][1]["priceEstimate"], "$1,120 – $1,680");
}

#[test]
fn test_only_lead_summary_is_attributed() {
    let plan = Planner::new().generate(&culture_request());

    assert!(plan.destinations[0]
        .summary
        .ends_with("Tailored as the lead recommendation for Jordan Blake."));
    for dest in &plan.destinations[1..] {
        assert!(!dest.summary.contains("Jordan Blake"));
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let req = request(
        "midrange",
        &["arid"],
        &["sandboarding"],
        "solo",
        "balanced",
        ("2024-06-01", "2024-06-08"),
    );
    let plan = Planner::new().generate(&req);

    // Kyoto and Banff tie, then Tulum leads a three-way tie
    assert_eq!(names(&plan), ["Kyoto", "Banff & Lake Louise", "Tulum"]);
}

#[test]
fn test_plan_is_deterministic_apart_from_timestamp() {
    let planner = Planner::new();
    let req = culture_request();

    let mut first = planner.generate(&req);
    let mut second = planner.generate(&req);
    assert!(first.generated_at.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&first.generated_at).is_ok());

    first.generated_at.clear();
    second.generated_at.clear();
    assert_eq!(first, second);
}

#[test]
fn test_output_is_bounded_and_never_empty() {
    let planner = Planner::new();
    let requests = [
        culture_request(),
        request(
            "luxury",
            &["cold", "coastal"],
            &["northern lights"],
            "group",
            "fast-paced",
            ("", ""),
        ),
        request(
            "budget",
            &["arid"],
            &["xyzzy"],
            "family",
            "relaxed",
            ("2024-12-20", "2024-12-01"),
        ),
    ];

    for req in &requests {
        let plan = planner.generate(req);
        assert!((2..=3).contains(&plan.destinations.len()));
    }
}

#[test]
fn test_ranked_destinations_clear_threshold() {
    let planner = Planner::new();
    let req = culture_request();
    let plan = planner.generate(&req);
    let ranking = planner.rank(&req);

    for dest in &plan.destinations {
        let entry = ranking
            .iter()
            .find(|entry| entry.destination == dest.destination)
            .unwrap();
        assert!(entry.score > MIN_MATCH_SCORE);
    }
}

#[test]
fn test_fallback_returns_first_two_templates_unprocessed() {
    let planner = Planner::new().with_min_score(0.95);
    let req = request(
        "midrange",
        &["arid"],
        &["sandboarding", "camel trekking"],
        "solo",
        "balanced",
        ("2024-03-01", "2024-03-05"),
    );
    let plan = planner.generate(&req);

    assert_eq!(names(&plan), ["Kyoto", "Lisbon & Sintra"]);
    for dest in &plan.destinations {
        assert!(dest.price_estimate.is_none());
        assert!(!dest.travel_tips[0].starts_with("Ideal trip length"));
        assert!(dest.sample_itinerary.iter().all(|day| !day.title.contains('(')));
    }
}

#[test]
fn test_itinerary_days_cycle_through_template() {
    let planner = Planner::new();
    let req = request(
        "luxury",
        &["mountainous"],
        &["hiking", "wildlife"],
        "family",
        "fast-paced",
        ("2024-07-01", "2024-07-08"),
    );
    let nights = trip_length(&req.personal.start_date, &req.personal.end_date);
    assert_eq!(nights, 7);

    let plan = planner.generate(&req);
    for dest in &plan.destinations {
        let template = planner.catalog().find(&dest.destination).unwrap();
        let authored = &template.sample_itinerary;

        assert_eq!(dest.sample_itinerary.len(), nights as usize);
        for (idx, day) in dest.sample_itinerary.iter().enumerate() {
            assert_eq!(day.day as usize, idx + 1);
            assert!(day.title.starts_with(&authored[idx % authored.len()].title));
        }

        let last = dest.sample_itinerary.last().unwrap();
        assert!(last.title.ends_with(" (Farewell)"));
        assert!(dest.sample_itinerary[0].title.ends_with(" (Arrival Day)"));
        assert_eq!(dest.travel_tips[0], "Ideal trip length: 7-day escape.");
    }
}

#[test]
fn test_booking_prices_increase_with_position() {
    let plan = Planner::new().generate(&culture_request());

    for dest in &plan.destinations {
        let prices: Vec<u64> = dest
            .booking_options
            .iter()
            .map(|option| parse_price(&option.price_estimate))
            .collect();
        assert!(prices.windows(2).all(|pair| pair[0] < pair[1]), "{prices:?}");
    }
}

#[test]
fn test_unreadable_dates_plan_five_nights() {
    let req = request(
        "budget",
        &["coastal"],
        &["food"],
        "friends",
        "balanced",
        ("soon", "later"),
    );
    let plan = Planner::new().generate(&req);

    assert_eq!(plan.destinations[0].sample_itinerary.len(), 5);
    assert_eq!(plan.destinations[0].travel_tips[0], "Ideal trip length: 5-day escape.");
}

#[test]
fn test_templates_are_not_mutated() {
    let before = Catalog::builtin().clone();
    let _ = Planner::new().generate(&culture_request());
    assert_eq!(&before, Catalog::builtin());
}

#[test]
fn test_custom_catalog_drives_ranking() {
    let mut templates = Catalog::builtin().templates().to_vec();
    templates.reverse();
    let planner = Planner::new().with_catalog(Catalog::new(templates).unwrap());

    let plan = planner.generate(&culture_request());
    assert_eq!(plan.destinations[0].destination, "Cape Town & Winelands");
    assert_eq!(planner.rank(&culture_request())[0].destination, "Banff & Lake Louise");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_one_planner() {
    let planner = Arc::new(Planner::new());
    let expected = {
        let mut plan = planner.generate(&culture_request());
        plan.generated_at.clear();
        plan
    };

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let planner = Arc::clone(&planner);
            tokio::spawn(async move {
                let mut plan = planner.generate(&culture_request());
                plan.generated_at.clear();
                plan
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
