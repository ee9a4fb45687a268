mod error;
mod event;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
}

pub use crate::error::*;
pub use crate::event::api::*;
pub use crate::status::api::*;
