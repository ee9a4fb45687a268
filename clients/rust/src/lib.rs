mod base;
mod event;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use event::EventClient;
pub use event::CreateEventInput;
pub use evently_api_structs::dtos::*;
pub use evently_domain::ID;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use evently_api_structs::dtos::OnSiteEventDTO as OnSiteEvent;

/// Evently Server SDK
///
/// The SDK contains methods for interacting with the Evently server
/// API.
#[derive(Clone)]
pub struct EventlySDK {
    pub event: EventClient,
    pub status: StatusClient,
}

impl EventlySDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = EventClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { event, status }
    }
}
