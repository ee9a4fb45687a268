use chrono::{Duration, Utc};
use evently_sdk::CreateEventInput;
use uuid::Uuid;

/// A valid event one day ahead. Coordinates are random so that tests
/// sharing a database do not trip the duplicate check.
pub fn sample_event_input() -> CreateEventInput {
    let seed = Uuid::new_v4().as_u128();
    CreateEventInput {
        owner_id: Uuid::new_v4().to_string(),
        name: "Sample Event".into(),
        date: Utc::now() + Duration::days(1),
        ticket_price_in_cents: 5000,
        latitude: (seed % 18_000) as f64 / 100.0 - 90.0,
        longitude: ((seed >> 64) % 36_000) as f64 / 100.0 - 180.0,
    }
}
