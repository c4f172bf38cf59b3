//! Employee id generation.

use chrono::Utc;

/// Generates timestamp-derived employee ids.
///
/// Ids are the current epoch milliseconds rendered as a decimal string.
/// Two adds inside the same millisecond would collide, so the generator
/// bumps past its previous value; ids are strictly increasing for the
/// lifetime of the generator. Uniqueness across the process lifetime is the
/// only hard requirement.
#[derive(Debug, Default)]
pub struct EmployeeIdGenerator {
    last: i64,
}

impl EmployeeIdGenerator {
    /// Creates a generator with no issued ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh id, unique among all ids issued by this generator.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
