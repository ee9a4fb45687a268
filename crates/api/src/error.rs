use actix_web::{http::StatusCode, HttpResponse};
use evently_api_structs::APIErrorResponse;
use thiserror::Error;

/// Every failure a controller can answer with.
///
/// Use case errors are converted into this type, which is the only place
/// that decides on status codes and error codes.
#[derive(Error, Debug, PartialEq)]
pub enum EventlyError {
    #[error("Internal server error")]
    InternalError,
    #[error("{0}")]
    BadClientData(String),
    #[error("Invalid ownerId")]
    InvalidOwnerId,
    #[error("Invalid ticket price")]
    InvalidTicketPrice,
    #[error("Invalid latitude")]
    InvalidLatitude,
    #[error("Invalid longitude")]
    InvalidLongitude,
    #[error("Event date must be in the future")]
    InvalidDate,
    #[error("Event already exists")]
    EventAlreadyExists,
    #[error("Invalid eventId")]
    InvalidEventId,
    #[error("Resource not found")]
    NotFound,
}

impl EventlyError {
    pub fn code(&self) -> &'static str {
        match *self {
            Self::InternalError => "INTERNAL_ERROR",
            Self::BadClientData(_) => "BAD_REQUEST",
            Self::InvalidOwnerId => "INVALID_OWNER_ID",
            Self::InvalidTicketPrice => "INVALID_TICKET_PRICE",
            Self::InvalidLatitude => "INVALID_LATITUDE",
            Self::InvalidLongitude => "INVALID_LONGITUDE",
            Self::InvalidDate => "INVALID_DATE",
            Self::EventAlreadyExists => "EVENT_ALREADY_EXISTS",
            Self::InvalidEventId => "INVALID_EVENT_ID",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl actix_web::error::ResponseError for EventlyError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadClientData(_)
            | Self::InvalidOwnerId
            | Self::InvalidTicketPrice
            | Self::InvalidLatitude
            | Self::InvalidLongitude
            | Self::InvalidDate
            | Self::EventAlreadyExists
            | Self::InvalidEventId => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(APIErrorResponse {
            code: self.code().into(),
            message: self.to_string(),
        })
    }
}
