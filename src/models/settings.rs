//! Company settings singleton.

use serde::{Deserialize, Serialize};

/// The company identity shown on slips and documents.
///
/// One value exists per installation. It is created with defaults on first
/// run and overwritten wholesale on save or on snapshot import; there is no
/// partial-field merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    /// The registered company name.
    pub company_name: String,
    /// The director whose name signs payroll slips.
    pub director_name: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: "PT. Solusi Digital".to_string(),
            director_name: "Budi Santoso".to_string(),
        }
    }
}
