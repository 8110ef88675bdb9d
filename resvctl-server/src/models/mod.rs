//! Request input types
//!
//! Invalid input returns ValidationError, not panic.

pub mod customer;
pub mod reservation;
pub mod validation;

pub use customer::NewCustomer;
pub use reservation::NewReservation;
pub use validation::ValidationError;
