use chrono::{DateTime, SecondsFormat, Utc};
use evently_domain::{OnSiteEvent, ID};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnSiteEventDTO {
    pub id: ID,
    pub name: String,
    pub ticket_price_in_cents: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: ID,
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
}

impl OnSiteEventDTO {
    pub fn new(event: OnSiteEvent) -> Self {
        Self {
            id: event.id,
            name: event.name,
            ticket_price_in_cents: event.ticket_price_in_cents,
            latitude: event.latitude,
            longitude: event.longitude,
            owner_id: event.owner_id,
            date: event.date,
        }
    }
}

/// Always writes milliseconds, e.g. `2030-01-01T10:00:00.000Z`
fn serialize_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
