mod helpers;

use chrono::{Duration, Utc};
use evently_sdk::{APIErrorVariant, ID};
use helpers::setup::spawn_app;
use helpers::utils::sample_event_input;

#[actix_web::test]
async fn test_status_ok() {
    let (sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_create_event() {
    let (sdk, _) = spawn_app().await;
    let input = sample_event_input();

    let event = sdk
        .event
        .create(input.clone())
        .await
        .expect("Expected to create event");

    assert_eq!(event.name, input.name);
    assert_eq!(event.ticket_price_in_cents, 5000);
    assert_eq!(event.owner_id.to_string(), input.owner_id);
}

#[actix_web::test]
async fn test_create_event_with_invalid_owner_id() {
    let (sdk, _) = spawn_app().await;
    let mut input = sample_event_input();
    input.owner_id = "invalid id".into();

    let err = sdk
        .event
        .create(input)
        .await
        .expect_err("Expected invalid owner id to be rejected");

    assert_eq!(err.variant, APIErrorVariant::BadClientData);
    assert_eq!(err.code(), Some("INVALID_OWNER_ID"));
    assert_eq!(err.body.unwrap().message, "Invalid ownerId");
}

#[actix_web::test]
async fn test_create_event_validation_errors() {
    let (sdk, _) = spawn_app().await;

    let mut negative_price = sample_event_input();
    negative_price.ticket_price_in_cents = -5000;
    let mut invalid_latitude = sample_event_input();
    invalid_latitude.latitude = -100.0;
    let mut invalid_longitude = sample_event_input();
    invalid_longitude.longitude = -200.0;
    let mut past_date = sample_event_input();
    past_date.date = Utc::now() - Duration::milliseconds(1);

    let cases = vec![
        (negative_price, "INVALID_TICKET_PRICE"),
        (invalid_latitude, "INVALID_LATITUDE"),
        (invalid_longitude, "INVALID_LONGITUDE"),
        (past_date, "INVALID_DATE"),
    ];
    for (input, code) in cases {
        let err = sdk
            .event
            .create(input)
            .await
            .expect_err("Expected event to be rejected");
        assert_eq!(err.variant, APIErrorVariant::BadClientData);
        assert_eq!(err.code(), Some(code));
    }
}

#[actix_web::test]
async fn test_create_duplicate_event() {
    let (sdk, _) = spawn_app().await;
    let input = sample_event_input();
    sdk.event
        .create(input.clone())
        .await
        .expect("Expected to create event");

    let mut duplicate = input.clone();
    duplicate.name = "Another Event".into();
    duplicate.owner_id = ID::new().to_string();
    duplicate.ticket_price_in_cents = 0;
    let err = sdk
        .event
        .create(duplicate)
        .await
        .expect_err("Expected duplicate to be rejected");

    assert_eq!(err.variant, APIErrorVariant::BadClientData);
    assert_eq!(err.code(), Some("EVENT_ALREADY_EXISTS"));
}

#[actix_web::test]
async fn test_create_event_with_malformed_body() {
    let (_, address) = spawn_app().await;

    let res = reqwest::Client::new()
        .post(format!("{}/events", address))
        .json(&serde_json::json!({
            "name": "Sample Event",
            "ticketPriceInCents": "five thousand",
        }))
        .send()
        .await
        .expect("Expected server to respond");

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.expect("Expected json error body");
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_create_and_get_event() {
    let (sdk, _) = spawn_app().await;
    let input = sample_event_input();
    let created = sdk
        .event
        .create(input.clone())
        .await
        .expect("Expected to create event");

    let event = sdk
        .event
        .get(created.id.to_string())
        .await
        .expect("Expected to get event");

    assert_eq!(event, created);
    assert_eq!(event.name, input.name);
    assert_eq!(event.ticket_price_in_cents, input.ticket_price_in_cents);
    assert_eq!(event.latitude, input.latitude);
    assert_eq!(event.longitude, input.longitude);
    assert_eq!(event.owner_id.to_string(), input.owner_id);
    assert_eq!(
        event.date.timestamp_millis(),
        input.date.timestamp_millis()
    );
}

#[actix_web::test]
async fn test_get_unknown_event() {
    let (sdk, _) = spawn_app().await;

    let err = sdk
        .event
        .get(ID::new().to_string())
        .await
        .expect_err("Expected event to not be found");

    assert_eq!(err.variant, APIErrorVariant::NotFound);
    assert_eq!(err.code(), Some("NOT_FOUND"));
}

#[actix_web::test]
async fn test_get_event_with_invalid_id() {
    let (sdk, _) = spawn_app().await;

    let err = sdk
        .event
        .get("invalid-id")
        .await
        .expect_err("Expected invalid id to be rejected");

    assert_eq!(err.variant, APIErrorVariant::BadClientData);
    assert_eq!(err.code(), Some("INVALID_EVENT_ID"));
}
