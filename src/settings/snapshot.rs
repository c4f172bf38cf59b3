//! Full-state snapshot export and import.
//!
//! A snapshot bundles the company settings with the raw transactions blob
//! so a user can back up one installation and restore it into another. The
//! transactions value is carried verbatim as previously-persisted text; it
//! is not re-validated as JSON at export time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::models::CompanySettings;
use crate::store::{KeyValueStore, SETTINGS_KEY, TRANSACTIONS_KEY};

/// The exported backup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The settings at export time.
    pub settings: CompanySettings,
    /// The raw `app_transactions` blob, or `null` when none was ever
    /// persisted.
    pub transactions: Option<String>,
    /// When the export happened.
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    /// Renders the snapshot as pretty-printed JSON, the on-disk backup
    /// format.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::MalformedJson {
            context: "snapshot export".to_string(),
            message: e.to_string(),
        })
    }

    /// The suggested download filename: `backup_business_<epoch-millis>.json`.
    pub fn file_name(&self) -> String {
        format!("backup_business_{}.json", self.timestamp.timestamp_millis())
    }
}

/// What a successful import actually touched.
///
/// A snapshot may carry either field alone; the absent one leaves its store
/// key untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// True when the blob carried settings and they were written.
    pub settings_applied: bool,
    /// True when the blob carried a transactions value and it was written.
    pub transactions_applied: bool,
}

/// The shape an import blob is parsed against. Unknown extra fields are
/// ignored; both known fields are optional.
#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    settings: Option<CompanySettings>,
    transactions: Option<String>,
}

/// Builds the export document from live settings and the raw transactions
/// blob.
pub fn export_snapshot<S: KeyValueStore>(
    store: &S,
    settings: &CompanySettings,
    at: DateTime<Utc>,
) -> CoreResult<Snapshot> {
    Ok(Snapshot {
        settings: settings.clone(),
        transactions: store.get(TRANSACTIONS_KEY)?,
        timestamp: at,
    })
}

/// Applies a backup blob to the store.
///
/// All-or-nothing at the parse stage: a blob that is not valid JSON for the
/// snapshot shape writes nothing and returns `MalformedJson`. Partial at the
/// field stage: whichever of `settings` / `transactions` is present is
/// applied; the other key is left untouched.
///
/// This writes the store only. In-memory state already loaded from those
/// keys is now stale; the caller is expected to force a full reload
/// (see [`crate::app::AppState::import_snapshot`]).
pub fn import_snapshot<S: KeyValueStore>(
    store: &mut S,
    blob: &str,
) -> CoreResult<ImportOutcome> {
    let document: SnapshotDocument =
        serde_json::from_str(blob).map_err(|e| CoreError::MalformedJson {
            context: "snapshot import".to_string(),
            message: e.to_string(),
        })?;

    let mut outcome = ImportOutcome {
        settings_applied: false,
        transactions_applied: false,
    };

    if let Some(settings) = document.settings {
        let serialized =
            serde_json::to_string(&settings).map_err(|e| CoreError::StoreWrite {
                key: SETTINGS_KEY.to_string(),
                message: e.to_string(),
            })?;
        store.set(SETTINGS_KEY, &serialized)?;
        outcome.settings_applied = true;
    }

    if let Some(transactions) = document.transactions {
        store.set(TRANSACTIONS_KEY, &transactions)?;
        outcome.transactions_applied = true;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn export_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 25, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_export_reads_transactions_verbatim() {
        let mut store = MemoryStore::new();
        // Deliberately not JSON; export must not care.
        store.set(TRANSACTIONS_KEY, "raw-opaque-blob").unwrap();

        let snapshot =
            export_snapshot(&store, &CompanySettings::default(), export_time()).unwrap();
        assert_eq!(snapshot.transactions.as_deref(), Some("raw-opaque-blob"));
    }

    #[test]
    fn test_export_with_no_transactions_is_null() {
        let store = MemoryStore::new();
        let snapshot =
            export_snapshot(&store, &CompanySettings::default(), export_time()).unwrap();

        assert_eq!(snapshot.transactions, None);
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert!(value["transactions"].is_null());
    }

    #[test]
    fn test_export_document_shape() {
        let store = MemoryStore::new();
        let snapshot =
            export_snapshot(&store, &CompanySettings::default(), export_time()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["settings"]["companyName"], "PT. Solusi Digital");
        assert_eq!(value["timestamp"], "2024-05-25T10:30:00Z");
    }

    #[test]
    fn test_file_name_uses_epoch_millis() {
        let store = MemoryStore::new();
        let snapshot =
            export_snapshot(&store, &CompanySettings::default(), export_time()).unwrap();
        assert_eq!(
            snapshot.file_name(),
            format!("backup_business_{}.json", export_time().timestamp_millis())
        );
    }

    #[test]
    fn test_import_malformed_blob_writes_nothing() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{\"companyName\":\"A\",\"directorName\":\"B\"}").unwrap();
        store.set(TRANSACTIONS_KEY, "old-blob").unwrap();
        let settings_before = store.get(SETTINGS_KEY).unwrap();
        let transactions_before = store.get(TRANSACTIONS_KEY).unwrap();

        let err = import_snapshot(&mut store, "definitely not json").unwrap_err();

        assert!(matches!(err, CoreError::MalformedJson { .. }));
        assert_eq!(store.get(SETTINGS_KEY).unwrap(), settings_before);
        assert_eq!(store.get(TRANSACTIONS_KEY).unwrap(), transactions_before);
    }

    #[test]
    fn test_import_settings_only_leaves_transactions_untouched() {
        let mut store = MemoryStore::new();
        store.set(TRANSACTIONS_KEY, "old-blob").unwrap();

        let blob = r#"{"settings":{"companyName":"CV. Baru","directorName":"Siti"}}"#;
        let outcome = import_snapshot(&mut store, blob).unwrap();

        assert!(outcome.settings_applied);
        assert!(!outcome.transactions_applied);
        assert_eq!(store.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("old-blob"));

        let applied: CompanySettings =
            serde_json::from_str(&store.get(SETTINGS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(applied.company_name, "CV. Baru");
    }

    #[test]
    fn test_import_transactions_only_leaves_settings_untouched() {
        let mut store = MemoryStore::new();

        let blob = r#"{"transactions":"[{\"id\":\"1\"}]"}"#;
        let outcome = import_snapshot(&mut store, blob).unwrap();

        assert!(!outcome.settings_applied);
        assert!(outcome.transactions_applied);
        assert_eq!(store.get(SETTINGS_KEY).unwrap(), None);
        assert_eq!(
            store.get(TRANSACTIONS_KEY).unwrap().as_deref(),
            Some("[{\"id\":\"1\"}]")
        );
    }

    #[test]
    fn test_import_ignores_unknown_fields() {
        let mut store = MemoryStore::new();

        let blob = r#"{
            "settings": {"companyName": "X", "directorName": "Y"},
            "timestamp": "2024-05-25T10:30:00Z",
            "schemaVersion": 7
        }"#;
        let outcome = import_snapshot(&mut store, blob).unwrap();
        assert!(outcome.settings_applied);
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let mut source = MemoryStore::new();
        source.set(TRANSACTIONS_KEY, "tx-blob").unwrap();
        let settings = CompanySettings {
            company_name: "CV. Maju Jaya".to_string(),
            director_name: "Siti Rahma".to_string(),
        };
        let snapshot = export_snapshot(&source, &settings, export_time()).unwrap();

        let mut target = MemoryStore::new();
        let outcome = import_snapshot(&mut target, &snapshot.to_json().unwrap()).unwrap();

        assert!(outcome.settings_applied);
        assert!(outcome.transactions_applied);
        let applied: CompanySettings =
            serde_json::from_str(&target.get(SETTINGS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(applied, settings);
        assert_eq!(target.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("tx-blob"));
    }
}
