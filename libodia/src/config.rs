//! Odia keyboard configuration.
//!
//! Extends the generic engine config with layout options: which auxiliary
//! key sections the on-screen keyboard exposes. The base fields are
//! flattened so one TOML file configures both layers.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OdiaConfig {
    /// Base engine flags (assimilation, cluster backspace).
    #[serde(flatten)]
    pub base: libodia_core::Config,

    /// Offer the pre-composed conjunct (yuktakshara) keys.
    pub yuktakshara_keys: bool,

    /// Offer the Odia digit keys.
    pub digit_keys: bool,

    /// Offer the punctuation keys.
    pub punctuation_keys: bool,
}

impl Default for OdiaConfig {
    fn default() -> Self {
        Self {
            base: libodia_core::Config::default(),
            yuktakshara_keys: true,
            digit_keys: true,
            punctuation_keys: true,
        }
    }
}

impl OdiaConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Convert into the base config for use with `Composer::with_config`.
    pub fn into_base(self) -> libodia_core::Config {
        self.base
    }

    /// Get a reference to the base config.
    pub fn base(&self) -> &libodia_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config.
    pub fn base_mut(&mut self) -> &mut libodia_core::Config {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OdiaConfig::default();
        assert!(config.base.nasal_assimilation);
        assert!(config.yuktakshara_keys);
        assert!(config.digit_keys);
        assert!(config.punctuation_keys);
    }

    #[test]
    fn test_flattened_toml() {
        let config: OdiaConfig = toml::from_str(
            "nasal_assimilation = false\n\
             cluster_backspace = true\n\
             yuktakshara_keys = true\n\
             digit_keys = false\n\
             punctuation_keys = true\n",
        )
        .expect("parse");
        assert!(!config.base.nasal_assimilation);
        assert!(!config.digit_keys);
    }
}
