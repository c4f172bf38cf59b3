//! Core data models for the back-office application.
//!
//! This module contains all the domain records used throughout the crate.
//! Everything here serializes with the app's original wire field names
//! (camelCase keys, lowercase enum tokens) so persisted blobs stay
//! compatible with the documented store format.

mod attendance;
mod employee;
mod finance;
mod settings;

pub use attendance::{AttendanceMethod, AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, EmployeeDraft};
pub use finance::{CashTransaction, Invoice, InvoiceItem, InvoiceStatus, TransactionKind};
pub use settings::CompanySettings;
