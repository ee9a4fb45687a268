use serde::{Deserialize, Serialize};

/// Body of every non 2xx response
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct APIErrorResponse {
    pub code: String,
    pub message: String,
}
