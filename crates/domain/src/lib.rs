mod event;
mod shared;

pub use event::OnSiteEvent;
pub use shared::entity::{Entity, InvalidIDError, ID};
