use crate::{
    error::EventlyError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use evently_api_structs::get_event::*;
use evently_domain::{OnSiteEvent, ID};
use evently_infra::EventlyContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<EventlyContext>,
) -> Result<HttpResponse, EventlyError> {
    let usecase = GetEventUseCase {
        event_id: path_params.into_inner().event_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(EventlyError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidEventId,
    NotFound(ID),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for EventlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEventId => Self::InvalidEventId,
            UseCaseError::NotFound(_) => Self::NotFound,
            UseCaseError::StorageError(_) => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = OnSiteEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &EventlyContext) -> Result<Self::Response, Self::Error> {
        let event_id = self
            .event_id
            .parse::<ID>()
            .map_err(|_| UseCaseError::InvalidEventId)?;

        match ctx.repos.events.find(&event_id).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(UseCaseError::NotFound(event_id)),
            Err(e) => Err(UseCaseError::StorageError(e)),
        }
    }
}
