//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Course id used when `--course` is not given.
    #[serde(default)]
    pub default_course: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_course: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// Pick the explicit course, falling back to `default_course`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when neither is set.
    pub fn resolve_course(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        explicit
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| Some(self.default_course.trim()).filter(|c| !c.is_empty()))
            .map(ToString::to_string)
            .ok_or_else(|| ConfigError::NotConfigured {
                field: "general.default_course".to_string(),
                hint: "pass --course or set KAMBAZ_GENERAL__DEFAULT_COURSE".to_string(),
            })
    }
}
