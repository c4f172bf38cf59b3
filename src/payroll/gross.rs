//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::models::Employee;

/// The units an employee worked in one pay period.
///
/// These are supplied by the caller per period; the system does not derive
/// them from attendance records. The `Default` value (22 days, 5 overtime
/// hours) is the placeholder the payroll screen runs with until attendance
/// reconciliation exists.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSummary {
    /// Whole days worked in the period.
    pub days_worked: u32,
    /// Overtime hours worked in the period; may be fractional.
    pub overtime_hours: Decimal,
}

impl Default for WorkSummary {
    fn default() -> Self {
        Self {
            days_worked: 22,
            overtime_hours: Decimal::from(5),
        }
    }
}

/// Computes an employee's gross pay for a period.
///
/// `daily_rate * days_worked + overtime_rate * overtime_hours`, exactly.
/// Pure function: no rounding beyond the currency's native precision, no
/// side effects.
///
/// # Examples
///
/// ```
/// use backoffice_core::models::Employee;
/// use backoffice_core::payroll::compute_gross;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "1".to_string(),
///     name: "Budi Santoso".to_string(),
///     position: "Fullstack Dev".to_string(),
///     daily_rate: Decimal::from(500_000),
///     overtime_rate: Decimal::from(50_000),
/// };
/// let gross = compute_gross(&employee, 22, Decimal::from(5));
/// assert_eq!(gross, Decimal::from(11_250_000));
/// ```
pub fn compute_gross(employee: &Employee, days_worked: u32, overtime_hours: Decimal) -> Decimal {
    employee.daily_rate * Decimal::from(days_worked) + employee.overtime_rate * overtime_hours
}

/// Sums gross pay across a roster for one period, the payroll screen's
/// total-budget figure.
pub fn payroll_budget(employees: &[Employee], summary: &WorkSummary) -> Decimal {
    employees
        .iter()
        .map(|e| compute_gross(e, summary.days_worked, summary.overtime_hours))
        .sum()
}
