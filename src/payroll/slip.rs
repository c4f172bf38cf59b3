//! Payroll slip assembly.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CompanySettings, Employee};

use super::gross::{WorkSummary, compute_gross};

/// The data lines of one employee's payroll slip.
///
/// This is what the slip renderer draws: the base-pay line
/// (`days × daily rate`), the overtime line (`hours × overtime rate`), the
/// gross total, and the company/director identity for the signature block.
/// Rendering the slip to JPG or PDF is the document layer's job; the slip
/// itself is plain serializable data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaySlip {
    /// The company name printed in the slip header.
    pub company_name: String,
    /// The director who signs the slip.
    pub director_name: String,
    /// Human-readable pay period, e.g. "Mei 2024".
    pub period_label: String,
    /// The paid employee's name.
    pub employee_name: String,
    /// The paid employee's position.
    pub position: String,
    /// Days worked in the period.
    pub days_worked: u32,
    /// Pay per day worked.
    pub daily_rate: Decimal,
    /// `days_worked * daily_rate`.
    pub base_pay: Decimal,
    /// Overtime hours worked in the period.
    pub overtime_hours: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
    /// `overtime_hours * overtime_rate`.
    pub overtime_pay: Decimal,
    /// `base_pay + overtime_pay`.
    pub gross_pay: Decimal,
}

impl PaySlip {
    /// Assembles a slip for one employee and one period.
    pub fn build(
        settings: &CompanySettings,
        employee: &Employee,
        period_label: &str,
        summary: &WorkSummary,
    ) -> Self {
        let base_pay = employee.daily_rate * Decimal::from(summary.days_worked);
        let overtime_pay = employee.overtime_rate * summary.overtime_hours;

        Self {
            company_name: settings.company_name.clone(),
            director_name: settings.director_name.clone(),
            period_label: period_label.to_string(),
            employee_name: employee.name.clone(),
            position: employee.position.clone(),
            days_worked: summary.days_worked,
            daily_rate: employee.daily_rate,
            base_pay,
            overtime_hours: summary.overtime_hours,
            overtime_rate: employee.overtime_rate,
            overtime_pay,
            gross_pay: base_pay + overtime_pay,
        }
    }
}
