use super::*;
use crate::entity::EntityKind;
use serde_json::json;

fn candidates() -> &'static EntityDescriptor {
    EntityKind::Candidate.descriptor()
}

#[test]
fn parse_collection_maps_wire_fields() {
    let body = json!([
        { "id": 1, "name": "Roy Rohmat", "position": "BackEnd", "email": "roy@gmail.com", "phoneNumber": "08917652341" },
        { "id": 2, "name": "Ebde Muttakin", "position": "BackEnd", "email": "dul@gmail.com", "phoneNumber": "08889975432" }
    ]);
    let records = parse_collection(candidates(), 200, &body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].get("phoneNumber"), "08917652341");
    assert_eq!(records[1].get("name"), "Ebde Muttakin");
}

#[test]
fn parse_collection_rejects_non_array_body() {
    let body = json!({ "items": [] });
    assert_eq!(parse_collection(candidates(), 200, &body), Err(StoreError::InvalidPayload));
}

#[test]
fn parse_collection_rejects_non_200_success() {
    assert_eq!(parse_collection(candidates(), 204, &json!([])), Err(StoreError::InvalidPayload));
}

#[test]
fn record_from_json_tolerates_missing_and_odd_fields() {
    let item = json!({ "id": "5", "name": "Dani", "position": null, "phoneNumber": 8123 });
    let record = record_from_json(candidates(), &item).unwrap();
    assert_eq!(record.id, 5);
    assert_eq!(record.get("position"), "");
    assert_eq!(record.get("phoneNumber"), "8123");
    assert_eq!(record.get("email"), "");
}

#[test]
fn record_from_json_skips_items_without_id() {
    assert!(record_from_json(candidates(), &json!({ "name": "No Id" })).is_none());
    assert!(record_from_json(candidates(), &json!({ "id": -1 })).is_none());
    assert!(record_from_json(candidates(), &json!("just a string")).is_none());

    let body = json!([{ "name": "No Id" }, { "id": 3, "name": "Komeng Adul" }]);
    let records = parse_collection(candidates(), 200, &body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 3);
}

#[test]
fn status_error_uses_payload_message() {
    let err = status_error(400, r#"{"message":"email already registered"}"#);
    assert_eq!(err, StoreError::Status { status: 400, message: "email already registered".to_owned() });
    assert_eq!(err.to_string(), "API error: 400 - email already registered");
}

#[test]
fn status_error_falls_back_to_generic_message() {
    for body in ["", "not json", r#"{"error":"x"}"#, r#"{"message":""}"#] {
        let err = status_error(500, body);
        assert_eq!(err.to_string(), "API error: 500 - Unknown error", "body {body:?}");
    }
}

#[test]
fn draft_body_has_every_field_and_no_id() {
    let mut draft = Draft::blank(candidates());
    draft.set("name", "Sari");
    draft.set("phoneNumber", "0800");
    let body = draft_body(candidates(), &draft);
    assert_eq!(body, json!({ "name": "Sari", "position": "", "phoneNumber": "0800", "email": "" }));
}

#[test]
fn created_record_prefers_echoed_body() {
    let draft = Draft::blank(candidates());
    let echoed = created_record(candidates(), &draft, r#"{"id":12,"name":"Sari"}"#);
    assert_eq!(echoed.id, 12);
    assert_eq!(echoed.get("name"), "Sari");

    let fallback = created_record(candidates(), &draft, "");
    assert_eq!(fallback.id, 0);
}

#[test]
fn requests_are_unavailable_off_browser() {
    let token = CancelToken::new();
    let loaded = futures::executor::block_on(fetch_collection(candidates(), "/api/Candidate", &token));
    assert!(matches!(loaded, Err(StoreError::Local(_))));

    let draft = Draft::blank(candidates());
    let posted = futures::executor::block_on(post_record(candidates(), "/api/Candidate", &draft, &token));
    assert!(matches!(posted, Err(StoreError::Local(_))));
}

#[test]
fn write_timeout_is_ten_seconds() {
    assert_eq!(WRITE_TIMEOUT, Duration::from_secs(10));
}

#[test]
fn gateway_timeout_is_reported_as_no_response() {
    let err = status_error(504, r#"{"message":"Candidate service did not respond."}"#);
    assert_eq!(err, StoreError::NoResponse);
    assert_eq!(err.to_string(), "No response from server.");
}

#[test]
fn bad_gateway_keeps_status_and_message() {
    let err = status_error(502, r#"{"message":"Candidate service sent an unreadable response."}"#);
    assert_eq!(err.to_string(), "API error: 502 - Candidate service sent an unreadable response.");
}

#[test]
fn parse_collection_keeps_usable_rows_when_some_lack_ids() {
    let body = json!([{ "id": "x1", "name": "Bad" }, { "id": 4, "name": "Angga Yanto" }, { "id": 1.5 }]);
    let records = parse_collection(candidates(), 200, &body).unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4]);
}
