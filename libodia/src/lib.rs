//! libodia crate root
//!
//! This crate provides the Odia script tables, the on-screen keyboard
//! layout model, and Odia-specific configuration, composed with the
//! generic engine from `libodia-core`.
//!
//! Public API exported here:
//! - `OdiaRules` and the character tables from `script`
//! - `Key`, `Section` and `sections` from `layout`
//! - `OdiaConfig` from `config`

pub mod config;
pub mod layout;
pub mod script;

// Re-export the engine types from core.
pub use libodia_core::{Composer, Config, EditOutcome, KeyAction, ScriptRules, Surface};

// Convenience re-exports for common types used by callers.
pub use config::OdiaConfig;
pub use layout::{sections, Key, Section};
pub use script::{OdiaRules, ANUSVARA, HALANT};
