//! Attendance records produced by the check-in screens.
//!
//! Records are created in memory by the scan screen and are not persisted;
//! the store has no attendance key yet.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How a check-in was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMethod {
    /// Captured through the QR scan flow.
    Qr,
    /// Entered through the manual check-in list.
    Manual,
}

/// The attendance outcome recorded for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Checked in on time.
    Present,
    /// Did not check in.
    Absent,
    /// Checked in after the cutoff.
    Late,
}

/// A single check-in event.
///
/// `employee_id` references [`crate::models::Employee::id`] by value only;
/// referential integrity is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The id of the employee who checked in.
    pub employee_id: String,
    /// The calendar date of the check-in.
    pub date: NaiveDate,
    /// How the check-in was captured.
    #[serde(rename = "type")]
    pub method: AttendanceMethod,
    /// The recorded attendance outcome.
    pub status: AttendanceStatus,
    /// The wall-clock time of the check-in.
    pub time: NaiveTime,
}
