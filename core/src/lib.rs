//! libodia-core
//!
//! Script-agnostic text composition and editing engine shared by Odia
//! keyboard frontends.
//!
//! The engine decides what string mutation to perform given the current
//! surface text, the selection, and a requested key action; button
//! rendering and focus management stay in the host shell. Script knowledge
//! (consonant sets, conjunct marks, assimilation tables) is supplied
//! through the `ScriptRules` seam by script-specific crates.
//!
//! Public API:
//! - `Surface` - Editing surface with text and selection
//! - `KeyAction` / `EditOutcome` - Tagged operations and their results
//! - `Composer` - The composition engine
//! - `ScriptRules` - Seam implemented by script definition crates
//! - `Config` - Engine behavior flags with TOML load/save

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod action;
pub use action::{EditOutcome, KeyAction};

pub mod surface;
pub use surface::Surface;

pub mod script;
pub use script::ScriptRules;

pub mod grapheme;

pub mod composer;
pub use composer::Composer;

/// Generic engine configuration.
///
/// Only script-agnostic behavior flags live here. Script-specific options
/// (which key sections a layout exposes, etc.) belong in the script crate's
/// own config type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Assimilate a trailing anusvara into a homorganic nasal conjunct
    /// when a mapped stop consonant is inserted after it.
    pub nasal_assimilation: bool,

    /// Delete one extended grapheme cluster per backspace. When disabled,
    /// backspace removes exactly one Unicode scalar value, which may split
    /// a visually-single cluster across two presses.
    pub cluster_backspace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nasal_assimilation: true,
            cluster_backspace: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Set nasal assimilation explicitly.
    pub fn set_nasal_assimilation(&mut self, enabled: bool) {
        self.nasal_assimilation = enabled;
    }

    /// Set cluster-aware backspace explicitly.
    pub fn set_cluster_backspace(&mut self, enabled: bool) {
        self.cluster_backspace = enabled;
    }
}
