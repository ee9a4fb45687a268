use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use evently_domain::{OnSiteEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<OnSiteEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn create(&self, e: &OnSiteEvent) -> anyhow::Result<OnSiteEvent> {
        insert(e, &self.events);
        Ok(e.clone())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<OnSiteEvent>> {
        Ok(find(event_id, &self.events))
    }

    async fn find_by_date_lat_and_long(
        &self,
        date: &DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<Option<OnSiteEvent>> {
        Ok(find_first_by(&self.events, |e| {
            e.date == *date && e.latitude == latitude && e.longitude == longitude
        }))
    }
}
