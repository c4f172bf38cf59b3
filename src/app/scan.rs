//! Attendance check-in flow.
//!
//! The scan screen is the only place a hardware collaborator appears.
//! Camera acquisition is fire-and-forget: a failure is logged and the
//! screen stays usable without a live preview. There is no retry and no
//! fallback capture path. Check-ins produce in-memory [`AttendanceRecord`]s only;
//! nothing here touches the store.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::{AttendanceMethod, AttendanceRecord, AttendanceStatus, Employee};

/// A camera preview source.
///
/// Implementations wrap whatever the platform provides; the core only
/// needs to know whether acquisition succeeded.
pub trait CameraFeed {
    /// Attempts to acquire the preview stream. Returns
    /// [`crate::error::CoreError::MediaAccess`] on permission or hardware
    /// failure.
    fn open(&mut self) -> CoreResult<()>;

    /// Releases the preview stream. Safe to call when nothing is open.
    fn close(&mut self);
}

/// The attendance screen's state: one camera feed and the session's
/// check-in log.
pub struct ScanScreen<F: CameraFeed> {
    feed: F,
    live: bool,
    records: Vec<AttendanceRecord>,
}

impl<F: CameraFeed> ScanScreen<F> {
    /// Creates the screen with its feed not yet acquired.
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            live: false,
            records: Vec::new(),
        }
    }

    /// Attempts to bring up the camera preview.
    ///
    /// Acquisition failure degrades gracefully: it is logged, the preview
    /// stays off, and check-ins keep working through the manual path.
    pub fn start(&mut self) {
        match self.feed.open() {
            Ok(()) => self.live = true,
            Err(err) => {
                warn!(error = %err, "Camera unavailable, continuing without live preview");
                self.live = false;
            }
        }
    }

    /// Tears down the camera preview.
    pub fn stop(&mut self) {
        self.feed.close();
        self.live = false;
    }

    /// Whether a live preview is currently up.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Records a check-in for an employee id.
    ///
    /// `employee_id` is taken at face value; referential integrity against
    /// the roster is not enforced.
    pub fn check_in(
        &mut self,
        employee_id: &str,
        method: AttendanceMethod,
        status: AttendanceStatus,
        at: DateTime<Utc>,
    ) -> &AttendanceRecord {
        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date: at.date_naive(),
            method,
            status,
            time: at.time(),
        };
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Simulates a successful QR scan against a roster view.
    ///
    /// Marks the first employee without a check-in today as present via QR
    /// and returns the new record, or `None` when the roster is empty or
    /// everyone has already checked in. This is the mock behind the scan
    /// screen's success toast; real QR decoding does not exist.
    pub fn simulate_scan(
        &mut self,
        roster: &[Employee],
        at: DateTime<Utc>,
    ) -> Option<&AttendanceRecord> {
        let today = at.date_naive();
        let next = roster.iter().find(|e| {
            !self
                .records
                .iter()
                .any(|r| r.employee_id == e.id && r.date == today)
        })?;
        let id = next.id.clone();
        Some(self.check_in(&id, AttendanceMethod::Qr, AttendanceStatus::Present, at))
    }

    /// The session's check-in log, oldest first.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}
