use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// An event that takes place at a physical location.
///
/// `(date, latitude, longitude)` identifies an event when checking for
/// duplicates at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct OnSiteEvent {
    pub id: ID,
    pub owner_id: ID,
    pub name: String,
    pub date: DateTime<Utc>,
    pub ticket_price_in_cents: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Entity for OnSiteEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl OnSiteEvent {
    pub fn is_valid_ticket_price(ticket_price_in_cents: i64) -> bool {
        ticket_price_in_cents >= 0
    }

    pub fn is_valid_latitude(latitude: f64) -> bool {
        (-90.0..=90.0).contains(&latitude)
    }

    pub fn is_valid_longitude(longitude: f64) -> bool {
        (-180.0..=180.0).contains(&longitude)
    }
}
