use crate::error::EventlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, SubsecRound, Utc};
use evently_api_structs::create_event::*;
use evently_domain::{OnSiteEvent, ID};
use evently_infra::EventlyContext;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EventlyContext>,
) -> Result<HttpResponse, EventlyError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        owner_id: body.owner_id,
        name: body.name,
        date: body.date,
        ticket_price_in_cents: body.ticket_price_in_cents,
        latitude: body.latitude,
        longitude: body.longitude,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(EventlyError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub owner_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub ticket_price_in_cents: i64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidOwnerId,
    InvalidTicketPrice,
    InvalidLatitude,
    InvalidLongitude,
    InvalidDate,
    EventAlreadyExists,
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for EventlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidOwnerId => Self::InvalidOwnerId,
            UseCaseError::InvalidTicketPrice => Self::InvalidTicketPrice,
            UseCaseError::InvalidLatitude => Self::InvalidLatitude,
            UseCaseError::InvalidLongitude => Self::InvalidLongitude,
            UseCaseError::InvalidDate => Self::InvalidDate,
            UseCaseError::EventAlreadyExists => Self::EventAlreadyExists,
            UseCaseError::StorageError(_) => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = OnSiteEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    /// Checks run in a fixed order and the first failing one is returned.
    ///
    /// The duplicate lookup and the insert are two separate store calls, so
    /// two concurrent requests for the same date and location can both pass
    /// the lookup.
    async fn execute(&mut self, ctx: &EventlyContext) -> Result<Self::Response, Self::Error> {
        let owner_id = self
            .owner_id
            .parse::<ID>()
            .map_err(|_| UseCaseError::InvalidOwnerId)?;

        if !OnSiteEvent::is_valid_ticket_price(self.ticket_price_in_cents) {
            return Err(UseCaseError::InvalidTicketPrice);
        }
        if !OnSiteEvent::is_valid_latitude(self.latitude) {
            return Err(UseCaseError::InvalidLatitude);
        }
        if !OnSiteEvent::is_valid_longitude(self.longitude) {
            return Err(UseCaseError::InvalidLongitude);
        }

        // Dates are kept with millisecond precision
        let date = self.date.trunc_subsecs(3);
        if date.timestamp_millis() <= ctx.sys.get_timestamp_millis() {
            return Err(UseCaseError::InvalidDate);
        }

        let existing = ctx
            .repos
            .events
            .find_by_date_lat_and_long(&date, self.latitude, self.longitude)
            .await
            .map_err(UseCaseError::StorageError)?;
        if existing.is_some() {
            return Err(UseCaseError::EventAlreadyExists);
        }

        let e = OnSiteEvent {
            id: ID::new(),
            owner_id,
            name: self.name.clone(),
            date,
            ticket_price_in_cents: self.ticket_price_in_cents,
            latitude: self.latitude,
            longitude: self.longitude,
        };

        ctx.repos
            .events
            .create(&e)
            .await
            .map_err(UseCaseError::StorageError)
    }
}
