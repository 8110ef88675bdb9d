//! Route handlers organized by resource

use serde::Serialize;
use utoipa::ToSchema;

pub mod customers;
pub mod health;
pub mod reservations;
pub mod root;

/// Confirmation body returned by deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
