//! Bootstrap configuration.
//!
//! An installation can ship a YAML file that overrides the built-in company
//! identity and the seed roster used on first run. Every field is optional;
//! a missing file is an error, but a partial file is not.
//!
//! # Example
//!
//! ```no_run
//! use backoffice_core::config::AppConfig;
//!
//! let config = AppConfig::load("./bootstrap.yaml")?;
//! println!("Company: {}", config.company.company_name);
//! # Ok::<(), backoffice_core::error::CoreError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::models::{CompanySettings, Employee};
use crate::roster::default_seed;

/// Installation bootstrap values.
///
/// The defaults here are only used until real values exist in the store:
/// `company` backs the settings singleton before the first explicit save,
/// and `seed_roster` is written on the very first roster load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Company identity used before the first explicit settings save.
    #[serde(default)]
    pub company: CompanySettings,
    /// Roster written on first run, when no roster has ever been persisted.
    #[serde(default = "default_seed")]
    pub seed_roster: Vec<Employee>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company: CompanySettings::default(),
            seed_roster: default_seed(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// (`ConfigNotFound`) or is not valid YAML for this shape
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
