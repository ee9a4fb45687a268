use super::IEventRepo;
use chrono::{DateTime, Utc};
use evently_domain::{OnSiteEvent, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Coordinates are NUMERIC columns. They are bound as decimal text and
// read back as float8.
const EVENT_COLUMNS: &str = r#"
    event_uid,
    owner_uid,
    name,
    date,
    ticket_price_in_cents,
    latitude::float8 AS latitude,
    longitude::float8 AS longitude
"#;

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    owner_uid: Uuid,
    name: String,
    date: DateTime<Utc>,
    ticket_price_in_cents: i64,
    latitude: f64,
    longitude: f64,
}

impl From<EventRaw> for OnSiteEvent {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            owner_id: e.owner_uid.into(),
            name: e.name,
            date: e.date,
            ticket_price_in_cents: e.ticket_price_in_cents,
            latitude: e.latitude,
            longitude: e.longitude,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn create(&self, e: &OnSiteEvent) -> anyhow::Result<OnSiteEvent> {
        let query = format!(
            r#"
            INSERT INTO events(
                event_uid,
                owner_uid,
                name,
                date,
                ticket_price_in_cents,
                latitude,
                longitude
            )
            VALUES($1, $2, $3, $4, $5, $6::numeric, $7::numeric)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        );
        let event: EventRaw = sqlx::query_as(&query)
            .bind(e.id.inner_ref())
            .bind(e.owner_id.inner_ref())
            .bind(&e.name)
            .bind(e.date)
            .bind(e.ticket_price_in_cents)
            .bind(e.latitude.to_string())
            .bind(e.longitude.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                error!(
                    "Unable to insert event: {:?}. DB returned error: {:?}",
                    e, err
                );
                err
            })?;
        Ok(event.into())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<OnSiteEvent>> {
        let query = format!(
            r#"
            SELECT {} FROM events AS e
            WHERE e.event_uid = $1
            "#,
            EVENT_COLUMNS
        );
        let event: Option<EventRaw> = sqlx::query_as(&query)
            .bind(event_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                error!(
                    "Find event with id: {:?} failed. DB returned error: {:?}",
                    event_id, err
                );
                err
            })?;
        Ok(event.map(|e| e.into()))
    }

    async fn find_by_date_lat_and_long(
        &self,
        date: &DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<Option<OnSiteEvent>> {
        let query = format!(
            r#"
            SELECT {} FROM events AS e
            WHERE e.date = $1 AND
            e.latitude = $2::numeric AND
            e.longitude = $3::numeric
            LIMIT 1
            "#,
            EVENT_COLUMNS
        );
        let event: Option<EventRaw> = sqlx::query_as(&query)
            .bind(date)
            .bind(latitude.to_string())
            .bind(longitude.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                error!(
                    "Find event at date: {} and location: ({}, {}) failed. DB returned error: {:?}",
                    date, latitude, longitude, err
                );
                err
            })?;
        Ok(event.map(|e| e.into()))
    }
}
