use crate::dtos::OnSiteEventDTO;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod create_event {
    use super::*;

    /// `owner_id` stays a plain string so that a malformed id is reported
    /// by the use case and not by the json extractor
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub ticket_price_in_cents: i64,
        pub latitude: f64,
        pub longitude: f64,
        pub owner_id: String,
        pub date: DateTime<Utc>,
    }

    pub type APIResponse = OnSiteEventDTO;
}

pub mod get_event {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }

    pub type APIResponse = OnSiteEventDTO;
}
