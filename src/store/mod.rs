//! The persisted key-value store.
//!
//! The platform persistence the app runs over is a plain key-value byte
//! store holding opaque UTF-8 strings. There is no transactionality, no
//! encryption, and no schema versioning; callers own JSON encode/decode and
//! first-run absence detection.
//!
//! Two backends are provided: [`MemoryStore`] for tests and ephemeral runs,
//! and [`JsonFileStore`] which keeps one file per key under a data
//! directory.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::CoreResult;

/// Store key holding the JSON-encoded [`crate::models::CompanySettings`].
pub const SETTINGS_KEY: &str = "app_settings";

/// Store key holding the JSON-encoded employee roster.
pub const EMPLOYEES_KEY: &str = "app_employees";

/// Store key holding the raw transactions blob.
///
/// Snapshot export reads this verbatim and import writes it verbatim; the
/// core never parses it.
pub const TRANSACTIONS_KEY: &str = "app_transactions";

/// A synchronous key-value store of opaque strings.
///
/// # Example
///
/// ```
/// use backoffice_core::store::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// assert_eq!(store.get("missing").unwrap(), None);
/// ```
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;
}
