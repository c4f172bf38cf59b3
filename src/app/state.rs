//! Application state.
//!
//! The top-level process owns one [`AppState`]. It performs the
//! load-once-at-start sequence, hands screens read-only views, and routes
//! every mutation through the managers so the store stays in sync. All
//! mutations run to completion before the next event is processed; nothing
//! here suspends.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::CoreResult;
use crate::models::{CompanySettings, Employee, EmployeeDraft};
use crate::roster::{InitializationPolicy, RosterManager};
use crate::settings::{ImportOutcome, SettingsManager, Snapshot, export_snapshot, import_snapshot};
use crate::store::KeyValueStore;

/// Exclusive owner of the store and the in-memory roster/settings.
///
/// Screen controllers never hold write access; they read through
/// [`AppState::roster`] / [`AppState::settings`] and mutate through the
/// methods here.
///
/// # Example
///
/// ```
/// use backoffice_core::app::AppState;
/// use backoffice_core::config::AppConfig;
/// use backoffice_core::store::MemoryStore;
///
/// let state = AppState::bootstrap(MemoryStore::new(), AppConfig::default())?;
/// assert_eq!(state.roster().len(), 2);
/// assert_eq!(state.settings().company_name, "PT. Solusi Digital");
/// # Ok::<(), backoffice_core::error::CoreError>(())
/// ```
#[derive(Debug)]
pub struct AppState<S: KeyValueStore> {
    store: S,
    config: AppConfig,
    roster: RosterManager,
    settings: SettingsManager,
}

impl<S: KeyValueStore> AppState<S> {
    /// Loads roster and settings from the store, seeding the roster on
    /// first run per the config.
    pub fn bootstrap(mut store: S, config: AppConfig) -> CoreResult<Self> {
        let roster = RosterManager::load(
            &mut store,
            InitializationPolicy::new(config.seed_roster.clone()),
        )?;
        let settings = SettingsManager::load(&store, config.company.clone())?;

        info!(
            employees = roster.roster().len(),
            company = %settings.settings().company_name,
            "Application state loaded"
        );

        Ok(Self {
            store,
            config,
            roster,
            settings,
        })
    }

    /// Read-only view of the roster, in insertion order.
    pub fn roster(&self) -> &[Employee] {
        self.roster.roster()
    }

    /// Read-only view of the company settings.
    pub fn settings(&self) -> &CompanySettings {
        self.settings.settings()
    }

    /// Adds an employee; see [`RosterManager::add`] for validation rules.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> CoreResult<Employee> {
        let employee = self.roster.add(&mut self.store, draft)?;
        info!(employee_id = %employee.id, name = %employee.name, "Employee added");
        Ok(employee)
    }

    /// Removes an employee by id; unknown ids are a no-op.
    pub fn remove_employee(&mut self, id: &str) -> CoreResult<()> {
        self.roster.remove(&mut self.store, id)?;
        info!(employee_id = %id, "Employee removed");
        Ok(())
    }

    /// Replaces the company settings wholesale and persists immediately.
    pub fn update_settings(&mut self, new_settings: CompanySettings) -> CoreResult<()> {
        self.settings.update(&mut self.store, new_settings)?;
        info!(company = %self.settings.settings().company_name, "Settings updated");
        Ok(())
    }

    /// Builds the backup document from live settings and the raw
    /// transactions blob.
    pub fn export_snapshot(&self, at: DateTime<Utc>) -> CoreResult<Snapshot> {
        export_snapshot(&self.store, self.settings.settings(), at)
    }

    /// Applies a backup blob, then reloads the whole in-memory state from
    /// the store.
    ///
    /// The reload is required: the import writes settings and transactions
    /// out from under whatever is already loaded, and in-flight edits are
    /// not reconciled. A malformed blob writes nothing and the state stays
    /// as it was.
    pub fn import_snapshot(&mut self, blob: &str) -> CoreResult<ImportOutcome> {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, "Importing snapshot");

        let outcome = match import_snapshot(&mut self.store, blob) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Snapshot import failed");
                return Err(err);
            }
        };

        self.reload()?;
        info!(
            correlation_id = %correlation_id,
            settings_applied = outcome.settings_applied,
            transactions_applied = outcome.transactions_applied,
            "Snapshot imported and state reloaded"
        );
        Ok(outcome)
    }

    /// Re-reads roster and settings from the store, discarding in-memory
    /// state.
    pub fn reload(&mut self) -> CoreResult<()> {
        self.roster = RosterManager::load(
            &mut self.store,
            InitializationPolicy::new(self.config.seed_roster.clone()),
        )?;
        self.settings = SettingsManager::load(&self.store, self.config.company.clone())?;
        Ok(())
    }
}
