//! Back-office core for a small-business application.
//!
//! This crate provides the persisted domain model behind the app's screens:
//! the employee roster, the company settings singleton, snapshot
//! export/import, and gross-pay computation for payroll slips. Screen
//! rendering, document generation, and camera access live outside this
//! crate; they talk to it through [`app::AppState`].

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod roster;
pub mod settings;
pub mod store;
