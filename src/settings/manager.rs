//! Settings loading and mutation.

use crate::error::{CoreError, CoreResult};
use crate::models::CompanySettings;
use crate::store::{KeyValueStore, SETTINGS_KEY};

/// Owns the in-memory settings singleton and keeps the store in sync.
///
/// # Example
///
/// ```
/// use backoffice_core::models::CompanySettings;
/// use backoffice_core::settings::SettingsManager;
/// use backoffice_core::store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// let mut settings = SettingsManager::load(&store, CompanySettings::default())?;
/// assert_eq!(settings.settings().company_name, "PT. Solusi Digital");
///
/// settings.update(&mut store, CompanySettings {
///     company_name: "CV. Maju Jaya".to_string(),
///     director_name: "Siti Rahma".to_string(),
/// })?;
/// # Ok::<(), backoffice_core::error::CoreError>(())
/// ```
#[derive(Debug)]
pub struct SettingsManager {
    settings: CompanySettings,
}

impl SettingsManager {
    /// Loads settings from the store.
    ///
    /// Returns the stored value if present, else `defaults`. The defaults
    /// are not persisted until an explicit [`SettingsManager::update`].
    ///
    /// # Returns
    ///
    /// Returns the loaded manager, or an error if the stored value is not
    /// valid JSON for [`CompanySettings`] (`MalformedJson`) or the store
    /// fails to read.
    pub fn load<S: KeyValueStore>(store: &S, defaults: CompanySettings) -> CoreResult<Self> {
        let settings = match store.get(SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| CoreError::MalformedJson {
                context: SETTINGS_KEY.to_string(),
                message: e.to_string(),
            })?,
            None => defaults,
        };

        Ok(Self { settings })
    }

    /// Returns a read-only view of the current settings.
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// Replaces the settings wholesale and persists immediately.
    ///
    /// There is no partial-field merge; the new value is the value.
    pub fn update<S: KeyValueStore>(
        &mut self,
        store: &mut S,
        new_settings: CompanySettings,
    ) -> CoreResult<()> {
        let serialized =
            serde_json::to_string(&new_settings).map_err(|e| CoreError::StoreWrite {
                key: SETTINGS_KEY.to_string(),
                message: e.to_string(),
            })?;
        store.set(SETTINGS_KEY, &serialized)?;
        self.settings = new_settings;
        Ok(())
    }
}
