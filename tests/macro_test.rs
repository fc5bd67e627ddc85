use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vacation_planner::{payload_schema, schema::validate_payload, PayloadSchema};

/// Quick availability probe for a single destination.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[payload_schema]
#[serde(rename_all = "camelCase")]
struct AvailabilityQuery {
    /// Destination name as it appears in the catalog
    destination_name: String,
    /// Number of travelers in the party
    party_size: u8,
    #[serde(default)]
    flexible_dates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[payload_schema(name = "ItineraryNote", description = "Free-form note pinned to one day")]
#[allow(dead_code)]
struct DayNote {
    day: u32,
    text: String,
}

#[test]
fn test_macro_uses_struct_docs_and_camel_case_fields() {
    let handle = AvailabilityQuery::schema();
    let schema = handle.schema_json();

    assert_eq!(handle.schema_name(), "AvailabilityQuery");
    assert_eq!(handle.type_name(), "AvailabilityQuery");
    assert_eq!(
        schema["description"],
        "Quick availability probe for a single destination."
    );
    assert_eq!(
        schema["properties"]["destinationName"]["description"],
        "Destination name as it appears in the catalog"
    );
    assert_eq!(
        schema["properties"]["partySize"]["description"],
        "Number of travelers in the party"
    );
}

#[test]
fn test_macro_arguments_override_defaults() {
    let handle = DayNote::schema();

    assert_eq!(handle.schema_name(), "ItineraryNote");
    assert_eq!(handle.schema_json()["title"], "DayNote");
    assert_eq!(
        handle.schema_json()["description"],
        "Free-form note pinned to one day"
    );
    assert!(handle.describes::<DayNote>());
    assert!(!handle.describes::<AvailabilityQuery>());
}

#[test]
fn test_macro_schema_drives_validation() {
    let query: AvailabilityQuery = validate_payload(&json!({
        "destinationName": "Kyoto",
        "partySize": 2
    }))
    .unwrap();
    assert_eq!(query.destination_name, "Kyoto");
    assert_eq!(query.party_size, 2);
    assert!(!query.flexible_dates);

    let issues = validate_payload::<AvailabilityQuery>(&json!({
        "destinationName": "Kyoto",
        "partySize": "two"
    }))
    .unwrap_err();
    assert_eq!(issues[0].path, "partySize");
}
