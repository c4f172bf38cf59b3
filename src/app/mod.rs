//! Application-level glue.
//!
//! [`AppState`] is the single owner of the persisted store and the
//! in-memory roster/settings; screens hold read-only views and request
//! mutations through its methods. [`ScanScreen`] carries the attendance
//! check-in flow, the one place a hardware collaborator (the camera) is
//! involved.

mod scan;
mod state;

pub use scan::{CameraFeed, ScanScreen};
pub use state::AppState;
