use riq_fields::{
    to_snym, EncodedFieldValues, FieldValue, FieldValues, ListItemProperties, Lookup, Schema,
};
use serde_json::json;

fn pipeline() -> Schema {
    Schema::from_value(json!({
        "id": "5540a2c6e4b0b6e2b1e7d9f1",
        "title": "Partnerships",
        "listType": "account",
        "fields": [
            {
                "id": "0",
                "name": "Status",
                "dataType": "List",
                "isMultiSelect": false,
                "listOptions": [
                    {"id": "0", "display": "Prospect"},
                    {"id": "1", "display": "In Negotiation"},
                    {"id": "2", "display": "Signed"}
                ]
            },
            {"id": "4", "name": "Deal Size", "dataType": "Numeric"},
            {
                "id": "7",
                "name": "Stage",
                "dataType": "List",
                "listOptions": [
                    {"id": "1", "display": "Open"},
                    {"id": "2", "display": "Closed"}
                ]
            },
            {"id": "12", "name": "Close Date", "dataType": "Date"}
        ]
    }))
    .unwrap()
}

#[test_log::test]
fn every_field_resolves_by_string_and_integer_id() {
    let schema = pipeline();
    for field in schema.all_fields() {
        let n: i64 = field.id.parse().unwrap();
        assert_eq!(
            schema.resolve_field(field.id.as_str()),
            schema.resolve_field(n)
        );
        assert_eq!(schema.resolve_field(n), Some(field));
    }
}

#[test_log::test]
fn every_field_resolves_by_any_spelling_of_its_name() {
    let schema = pipeline();
    for field in schema.all_fields() {
        let snym = to_snym(&field.name);
        assert_eq!(to_snym(&snym), snym);
        assert_eq!(schema.resolve_field(field.name.as_str()), Some(field));
        assert_eq!(schema.resolve_field(Lookup::symbol(snym.clone())), Some(field));
        assert_eq!(schema.resolve_field(field.name.to_uppercase()), Some(field));
    }
}

#[test_log::test]
fn misses_are_absent() {
    let schema = pipeline();
    assert!(schema.resolve_field("nonexistent").is_none());
    assert!(schema.resolve_field(999_999).is_none());
    assert!(schema.resolve_field_id("nonexistent").is_none());
    assert!(schema.list_options("nonexistent").is_none());
    assert!(schema.resolve_option_id("nonexistent", "Open").is_none());
}

#[test_log::test]
fn stage_round_trip_encodes_to_ids() {
    let schema = pipeline();
    let mut values = FieldValues::new();
    values.insert(Lookup::symbol("Stage"), FieldValue::choice(Lookup::symbol("Closed")));

    let encoded = schema.encode_field_values(Some(&values)).unwrap();
    let expected: EncodedFieldValues = [(Some(7), json!(2))].into_iter().collect();
    assert_eq!(encoded, expected);
}

#[test_log::test]
fn absent_and_empty_maps_are_distinct() {
    let schema = pipeline();
    assert!(schema.encode_field_values(None).is_none());
    assert_eq!(
        schema.encode_field_values(Some(&FieldValues::new())),
        Some(EncodedFieldValues::new())
    );
}

#[test_log::test]
fn payload_for_a_new_item() {
    let schema = pipeline();
    let props = ListItemProperties::new()
        .contact_ids(vec!["c-1", "c-2"])
        .account_id("a-1")
        .field_value("Status", FieldValue::choice("in negotiation"))
        .field_value("Deal Size", 125_000)
        .field_value(12, json!(1_430_000_000_000_i64));

    let payload = schema.build_list_item_payload(&props);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "listId": "5540a2c6e4b0b6e2b1e7d9f1",
            "name": "Partnerships",
            "contactIds": ["c-1", "c-2"],
            "accountId": "a-1",
            "fieldValues": {"0": 1, "4": 125000, "12": 1430000000000_i64}
        })
    );
}
