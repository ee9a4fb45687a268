mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
use evently_domain::{OnSiteEvent, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// Persists the event and returns it the way the store now holds it
    async fn create(&self, e: &OnSiteEvent) -> anyhow::Result<OnSiteEvent>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<OnSiteEvent>>;
    /// Exact match on all three fields
    async fn find_by_date_lat_and_long(
        &self,
        date: &DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<Option<OnSiteEvent>>;
}
