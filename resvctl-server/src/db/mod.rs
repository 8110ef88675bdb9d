//! Database layer - store handle and repositories
//!
//! - One connection shared by every request, no Arc<Mutex<Connection>>
//! - Every operation is a single statement against one table
//! - Referential integrity is left to the foreign-key constraint

pub mod repos;
pub mod store;

pub use repos::*;
pub use store::{Store, StoreError, MIGRATOR};
