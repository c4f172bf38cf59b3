//! First-run initialization policy.

use rust_decimal::Decimal;

use crate::models::Employee;

/// The roster written on the very first load, when no roster has ever been
/// persisted.
pub fn default_seed() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            name: "Budi Santoso".to_string(),
            position: "Fullstack Dev".to_string(),
            daily_rate: Decimal::from(500_000),
            overtime_rate: Decimal::from(50_000),
        },
        Employee {
            id: "2".to_string(),
            name: "Ani Wijaya".to_string(),
            position: "UI/UX Designer".to_string(),
            daily_rate: Decimal::from(400_000),
            overtime_rate: Decimal::from(40_000),
        },
    ]
}

/// What the roster manager does when it finds no persisted roster.
///
/// The policy is injected into [`crate::roster::RosterManager::load`] so
/// tests can substitute their own seed. Seeding fires only when the stored
/// value is absent, never when it is an empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializationPolicy {
    /// The employees persisted and returned on first run.
    pub seed: Vec<Employee>,
}

impl InitializationPolicy {
    /// A policy seeding the given employees.
    pub fn new(seed: Vec<Employee>) -> Self {
        Self { seed }
    }

    /// A policy that seeds nothing, leaving a first run with an empty
    /// roster.
    pub fn empty() -> Self {
        Self { seed: Vec::new() }
    }
}

impl Default for InitializationPolicy {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}
