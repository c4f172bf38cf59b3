//! Roster loading and mutation.

use crate::error::{CoreError, CoreResult};
use crate::models::{Employee, EmployeeDraft};
use crate::store::{EMPLOYEES_KEY, KeyValueStore};

use super::ids::EmployeeIdGenerator;
use super::policy::InitializationPolicy;

/// Owns the in-memory roster and keeps the store in sync with it.
///
/// Every mutation writes the full updated sequence back to the store before
/// the in-memory roster changes, so a failed write leaves both sides as
/// they were. Mutations run to completion synchronously; there is no
/// batching and no transaction spanning other keys.
///
/// # Example
///
/// ```
/// use backoffice_core::models::EmployeeDraft;
/// use backoffice_core::roster::{InitializationPolicy, RosterManager};
/// use backoffice_core::store::MemoryStore;
/// use rust_decimal::Decimal;
///
/// let mut store = MemoryStore::new();
/// let mut roster = RosterManager::load(&mut store, InitializationPolicy::default())?;
/// assert_eq!(roster.roster().len(), 2);
///
/// let draft = EmployeeDraft::new("Citra Lestari", "Accountant", Decimal::from(350_000), Decimal::ZERO);
/// let added = roster.add(&mut store, draft)?;
/// assert_eq!(added.name, "Citra Lestari");
/// # Ok::<(), backoffice_core::error::CoreError>(())
/// ```
#[derive(Debug)]
pub struct RosterManager {
    roster: Vec<Employee>,
    ids: EmployeeIdGenerator,
}

impl RosterManager {
    /// Loads the roster from the store.
    ///
    /// If no roster has ever been persisted, the policy's seed is persisted
    /// and returned. An empty persisted sequence is left alone; seeding
    /// fires only on a truly absent value.
    ///
    /// # Returns
    ///
    /// Returns the loaded manager, or an error if:
    /// - The stored value is not valid JSON for a roster (`MalformedJson`)
    /// - The store itself fails to read or write
    pub fn load<S: KeyValueStore>(
        store: &mut S,
        policy: InitializationPolicy,
    ) -> CoreResult<Self> {
        let roster = match store.get(EMPLOYEES_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| CoreError::MalformedJson {
                    context: EMPLOYEES_KEY.to_string(),
                    message: e.to_string(),
                })?
            }
            None => {
                persist(store, &policy.seed)?;
                policy.seed
            }
        };

        Ok(Self {
            roster,
            ids: EmployeeIdGenerator::new(),
        })
    }

    /// Returns a read-only view of the roster, in insertion order.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Adds an employee to the end of the roster and persists the full
    /// updated sequence.
    ///
    /// # Returns
    ///
    /// Returns the created employee with its freshly assigned id, or an
    /// error if:
    /// - `name` or `position` is empty or whitespace-only (`Validation`);
    ///   the roster and the store are left unchanged
    /// - The store fails to write
    pub fn add<S: KeyValueStore>(
        &mut self,
        store: &mut S,
        draft: EmployeeDraft,
    ) -> CoreResult<Employee> {
        if draft.name.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if draft.position.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "position".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        let employee = Employee {
            id: self.ids.next_id(),
            name: draft.name,
            position: draft.position,
            daily_rate: draft.daily_rate,
            overtime_rate: draft.overtime_rate,
        };

        let mut updated = self.roster.clone();
        updated.push(employee.clone());
        persist(store, &updated)?;
        self.roster = updated;

        Ok(employee)
    }

    /// Removes the employee with the given id, if any, and persists the
    /// resulting sequence.
    ///
    /// An id with no matching entry is a no-op, not an error; calling this
    /// twice with the same id is therefore safe.
    pub fn remove<S: KeyValueStore>(&mut self, store: &mut S, id: &str) -> CoreResult<()> {
        let filtered: Vec<Employee> = self
            .roster
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();

        persist(store, &filtered)?;
        self.roster = filtered;
        Ok(())
    }
}

/// Writes the full sequence under the roster key.
fn persist<S: KeyValueStore>(store: &mut S, roster: &[Employee]) -> CoreResult<()> {
    let serialized = serde_json::to_string(roster).map_err(|e| CoreError::StoreWrite {
        key: EMPLOYEES_KEY.to_string(),
        message: e.to_string(),
    })?;
    store.set(EMPLOYEES_KEY, &serialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rust_decimal::Decimal;

    fn stored_roster(store: &MemoryStore) -> Vec<Employee> {
        let raw = store.get(EMPLOYEES_KEY).unwrap().expect("roster persisted");
        serde_json::from_str(&raw).unwrap()
    }

    fn draft(name: &str, position: &str) -> EmployeeDraft {
        EmployeeDraft::new(
            name,
            position,
            Decimal::from(300_000),
            Decimal::from(30_000),
        )
    }

    #[test]
    fn test_first_run_seeds_and_persists() {
        let mut store = MemoryStore::new();
        let manager = RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        assert_eq!(manager.roster().len(), 2);
        assert_eq!(manager.roster()[0].name, "Budi Santoso");
        assert_eq!(manager.roster()[1].name, "Ani Wijaya");
        assert_eq!(stored_roster(&store), manager.roster());
    }

    #[test]
    fn test_empty_persisted_sequence_is_not_reseeded() {
        let mut store = MemoryStore::new();
        store.set(EMPLOYEES_KEY, "[]").unwrap();

        let manager = RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();
        assert!(manager.roster().is_empty());
        assert_eq!(store.get(EMPLOYEES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_returns_persisted_roster() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();
        manager.add(&mut store, draft("Citra Lestari", "Accountant")).unwrap();

        let reloaded = RosterManager::load(&mut store, InitializationPolicy::empty()).unwrap();
        assert_eq!(reloaded.roster(), manager.roster());
    }

    #[test]
    fn test_load_fails_fast_on_malformed_roster() {
        let mut store = MemoryStore::new();
        store.set(EMPLOYEES_KEY, "{not json").unwrap();

        let err = RosterManager::load(&mut store, InitializationPolicy::default()).unwrap_err();
        assert!(matches!(err, CoreError::MalformedJson { .. }));
        // The garbage is left in place for inspection, not overwritten.
        assert_eq!(store.get(EMPLOYEES_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        let added = manager.add(&mut store, draft("Citra Lestari", "Accountant")).unwrap();

        assert_eq!(manager.roster().len(), 3);
        assert_eq!(manager.roster()[2], added);
        assert_eq!(stored_roster(&store), manager.roster());
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::empty()).unwrap();

        for i in 0..50 {
            manager
                .add(&mut store, draft(&format!("Employee {i}"), "Staff"))
                .unwrap();
        }

        let mut ids: Vec<&str> = manager.roster().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();
        let before = store.get(EMPLOYEES_KEY).unwrap();

        let err = manager.add(&mut store, draft("   ", "Manager")).unwrap_err();

        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "name"));
        assert_eq!(manager.roster().len(), 2);
        assert_eq!(store.get(EMPLOYEES_KEY).unwrap(), before);
    }

    #[test]
    fn test_add_rejects_blank_position() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        let err = manager.add(&mut store, draft("John Doe", "")).unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "position"));
        assert_eq!(manager.roster().len(), 2);
    }

    #[test]
    fn test_remove_filters_by_id_and_persists() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        manager.remove(&mut store, "1").unwrap();

        assert_eq!(manager.roster().len(), 1);
        assert_eq!(manager.roster()[0].id, "2");
        assert_eq!(stored_roster(&store), manager.roster());
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        manager.remove(&mut store, "does-not-exist").unwrap();
        assert_eq!(manager.roster().len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::default()).unwrap();

        manager.remove(&mut store, "2").unwrap();
        manager.remove(&mut store, "2").unwrap();

        assert_eq!(manager.roster().len(), 1);
        assert_eq!(stored_roster(&store), manager.roster());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = MemoryStore::new();
        let mut manager =
            RosterManager::load(&mut store, InitializationPolicy::empty()).unwrap();

        manager.add(&mut store, draft("First", "A")).unwrap();
        manager.add(&mut store, draft("Second", "B")).unwrap();
        manager.add(&mut store, draft("Third", "C")).unwrap();

        let names: Vec<&str> = manager.roster().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
