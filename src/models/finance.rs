//! Cash-flow and billing records.
//!
//! These records back the finance and billing screens. They are declared
//! with their full wire shapes but are not yet wired to any persistence or
//! mutation path; the snapshot's `transactions` field carries the raw blob
//! through untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a cash transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// A single cash-flow entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    /// Unique identifier for the transaction.
    pub id: String,
    /// The transaction date.
    pub date: NaiveDate,
    /// Free-text description of the transaction.
    pub description: String,
    /// The non-negative amount, in whole currency units.
    pub amount: Decimal,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Free-text grouping label, e.g. "Operasional".
    pub category: String,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Fully settled.
    Paid,
    /// Issued, awaiting payment.
    Unpaid,
    /// Past its due date without payment.
    Overdue,
}

/// A single billable line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// What was delivered.
    pub description: String,
    /// How many units were delivered.
    pub quantity: u32,
    /// Price per unit, in whole currency units.
    pub price: Decimal,
}

/// A customer invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier, e.g. "INV-2024-001".
    pub id: String,
    /// The billed customer's name.
    pub customer_name: String,
    /// The issue date.
    pub date: NaiveDate,
    /// Ordered billable lines.
    pub items: Vec<InvoiceItem>,
    /// The invoice total, in whole currency units.
    pub total: Decimal,
    /// Payment state.
    pub status: InvoiceStatus,
}
