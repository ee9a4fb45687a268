mod create_event;
mod get_event;

use actix_web::web;
use create_event::create_event_controller;
use get_event::get_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
}

#[cfg(test)]
mod test_helpers {
    use chrono::{DateTime, Utc};
    use evently_domain::{OnSiteEvent, ID};
    use evently_infra::{IEventRepo, ISys};

    pub struct StaticTimeSys(pub i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    /// Store for asserting that a use case never reaches it
    pub struct PanickingEventRepo;

    #[async_trait::async_trait]
    impl IEventRepo for PanickingEventRepo {
        async fn create(&self, _: &OnSiteEvent) -> anyhow::Result<OnSiteEvent> {
            panic!("Store should not be called")
        }

        async fn find(&self, _: &ID) -> anyhow::Result<Option<OnSiteEvent>> {
            panic!("Store should not be called")
        }

        async fn find_by_date_lat_and_long(
            &self,
            _: &DateTime<Utc>,
            _: f64,
            _: f64,
        ) -> anyhow::Result<Option<OnSiteEvent>> {
            panic!("Store should not be called")
        }
    }

    pub struct FailingEventRepo;

    #[async_trait::async_trait]
    impl IEventRepo for FailingEventRepo {
        async fn create(&self, _: &OnSiteEvent) -> anyhow::Result<OnSiteEvent> {
            Err(anyhow::anyhow!("Connection refused"))
        }

        async fn find(&self, _: &ID) -> anyhow::Result<Option<OnSiteEvent>> {
            Err(anyhow::anyhow!("Connection refused"))
        }

        async fn find_by_date_lat_and_long(
            &self,
            _: &DateTime<Utc>,
            _: f64,
            _: f64,
        ) -> anyhow::Result<Option<OnSiteEvent>> {
            Err(anyhow::anyhow!("Connection refused"))
        }
    }
}
