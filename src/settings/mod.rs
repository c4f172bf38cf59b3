//! Company settings management and full-state snapshots.
//!
//! The settings singleton has the same durable lifecycle as the roster:
//! loaded once at process start, overwritten wholesale through
//! [`SettingsManager::update`], persisted synchronously. The snapshot
//! submodule handles the backup/restore documents the settings screen
//! produces and consumes.

mod manager;
mod snapshot;

pub use manager::SettingsManager;
pub use snapshot::{ImportOutcome, Snapshot, export_snapshot, import_snapshot};
