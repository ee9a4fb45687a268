use crate::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use evently_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub owner_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub ticket_price_in_cents: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            name: input.name,
            ticket_price_in_cents: input.ticket_price_in_cents,
            latitude: input.latitude,
            longitude: input.longitude,
            owner_id: input.owner_id,
            date: input.date,
        };

        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    /// Takes the raw id so that malformed ids can be sent as well
    pub async fn get<T: AsRef<str>>(&self, event_id: T) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id.as_ref()), StatusCode::OK)
            .await
    }
}
