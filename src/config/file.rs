use crate::utils::error::{CalcError, Result};
use serde::Deserialize;
use std::path::Path;

/// TOML settings file. All sections and fields are optional; missing values
/// fall through to the built-in defaults.
///
/// ```toml
/// [rates]
/// endpoint = "https://open.er-api.com/v6/latest"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub rates: Option<RatesConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&text).map_err(|e| CalcError::Config {
            message: format!("cannot parse {}: {}", path.display(), e),
        })
    }
}
