//! Employee model and the add-candidate draft.
//!
//! This module defines the Employee record held in the roster and the
//! EmployeeDraft shape that an add request arrives as.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee on the roster.
///
/// Identity is the `id` field; two employees with the same id are the same
/// employee. Rates are whole currency units per day / per hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned by the roster manager on add.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's position or job title.
    pub position: String,
    /// Pay per day worked, in whole currency units.
    pub daily_rate: Decimal,
    /// Pay per overtime hour, in whole currency units.
    pub overtime_rate: Decimal,
}

/// The candidate shape for adding an employee to the roster.
///
/// A draft carries no id; the roster manager assigns one on a successful
/// add. Drafts arrive from a form, so [`EmployeeDraft::parse`] performs the
/// form-boundary coercion: rate input that is not a valid non-negative
/// number becomes zero.
///
/// # Examples
///
/// ```
/// use backoffice_core::models::EmployeeDraft;
/// use rust_decimal::Decimal;
///
/// let draft = EmployeeDraft::parse("Citra Lestari", "Accountant", "350000", "banana");
/// assert_eq!(draft.daily_rate, Decimal::from(350_000));
/// assert_eq!(draft.overtime_rate, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    /// The candidate's full name. Must not be blank.
    pub name: String,
    /// The candidate's position. Must not be blank.
    pub position: String,
    /// Pay per day worked.
    pub daily_rate: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
}

impl EmployeeDraft {
    /// Creates a draft from already-typed values.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        daily_rate: Decimal,
        overtime_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            daily_rate,
            overtime_rate,
        }
    }

    /// Creates a draft from raw form input.
    ///
    /// Rate fields are coerced: input that does not parse as a number, or
    /// that parses negative, becomes zero. Name and position are passed
    /// through untouched; blankness is rejected later by the roster
    /// manager's add validation.
    pub fn parse(
        name: impl Into<String>,
        position: impl Into<String>,
        daily_rate_input: &str,
        overtime_rate_input: &str,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            daily_rate: coerce_rate(daily_rate_input),
            overtime_rate: coerce_rate(overtime_rate_input),
        }
    }
}

/// Coerces raw rate input to a non-negative amount, defaulting to zero.
fn coerce_rate(input: &str) -> Decimal {
    match input.trim().parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}
