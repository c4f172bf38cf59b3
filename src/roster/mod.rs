//! Employee roster management.
//!
//! The roster is the ordered sequence of [`crate::models::Employee`]
//! records. It is loaded once at process start, mutated only through
//! [`RosterManager`] calls, and written back to the persisted store
//! synchronously on every mutation.

mod ids;
mod manager;
mod policy;

pub use ids::EmployeeIdGenerator;
pub use manager::RosterManager;
pub use policy::{InitializationPolicy, default_seed};
