//! On-screen keyboard layout model.
//!
//! The layout is pure data: sections of keys, each key carrying a display
//! label and the engine action it dispatches. The host shell walks the
//! sections to render buttons and forwards the pressed key's action to the
//! composer; nothing here touches the surface itself.

use libodia_core::KeyAction;

use crate::config::OdiaConfig;
use crate::script;

/// A single on-screen key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Text shown on the key cap.
    pub label: String,
    /// Action dispatched to the composer when pressed.
    pub action: KeyAction,
}

impl Key {
    fn new<T: Into<String>>(label: T, action: KeyAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A titled group of keys, rendered as one block of the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub keys: Vec<Key>,
}

impl Section {
    fn new(title: &'static str, keys: Vec<Key>) -> Self {
        Self { title, keys }
    }
}

/// Assemble the keyboard sections for the given configuration.
///
/// The character sections mirror the script tables; the auxiliary groups
/// (yuktaksharas, digits, punctuation) appear only when the config enables
/// them. Utilities always come last.
pub fn sections(config: &OdiaConfig) -> Vec<Section> {
    let mut sections = Vec::new();

    sections.push(Section::new(
        "Vowels",
        script::VOWELS
            .iter()
            .map(|s| Key::new(*s, KeyAction::literal(*s)))
            .collect(),
    ));

    sections.push(Section::new(
        "Consonants",
        script::CONSONANTS
            .iter()
            .map(|c| Key::new(c.to_string(), KeyAction::InsertConsonant(*c)))
            .collect(),
    ));

    sections.push(Section::new(
        "Matras",
        script::MATRAS
            .iter()
            .map(|s| Key::new(*s, KeyAction::literal(*s)))
            .collect(),
    ));

    sections.push(Section::new(
        "Phalas",
        script::PHALAS
            .iter()
            .map(|(label, c)| Key::new(*label, KeyAction::ApplyPhala(*c)))
            .collect(),
    ));

    if config.yuktakshara_keys {
        sections.push(Section::new(
            "Yuktaksharas",
            script::YUKTAKSHARAS
                .iter()
                .map(|s| Key::new(*s, KeyAction::literal(*s)))
                .collect(),
        ));
    }

    if config.digit_keys {
        sections.push(Section::new(
            "Digits",
            script::DIGITS
                .iter()
                .map(|s| Key::new(*s, KeyAction::literal(*s)))
                .collect(),
        ));
    }

    if config.punctuation_keys {
        sections.push(Section::new(
            "Punctuation",
            script::PUNCTUATION
                .iter()
                .map(|s| Key::new(*s, KeyAction::literal(*s)))
                .collect(),
        ));
    }

    sections.push(Section::new(
        "Utilities",
        vec![
            Key::new("Space", KeyAction::literal(" ")),
            Key::new("Backspace", KeyAction::DeleteBackward),
            Key::new("Clear", KeyAction::Clear),
        ],
    ));

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout_sections() {
        let sections = sections(&OdiaConfig::default());
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Vowels",
                "Consonants",
                "Matras",
                "Phalas",
                "Yuktaksharas",
                "Digits",
                "Punctuation",
                "Utilities"
            ]
        );
    }

    #[test]
    fn test_auxiliary_sections_follow_config() {
        let mut config = OdiaConfig::default();
        config.yuktakshara_keys = false;
        config.digit_keys = false;
        config.punctuation_keys = false;

        let sections = sections(&config);
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Vowels", "Consonants", "Matras", "Phalas", "Utilities"]
        );
    }

    #[test]
    fn test_consonant_keys_dispatch_consonant_insertion() {
        let sections = sections(&OdiaConfig::default());
        let consonants = sections
            .iter()
            .find(|s| s.title == "Consonants")
            .expect("consonant section");
        assert_eq!(consonants.keys.len(), script::CONSONANTS.len());
        for key in &consonants.keys {
            assert!(matches!(key.action, KeyAction::InsertConsonant(_)));
        }
    }

    #[test]
    fn test_phala_keys_show_subscript_labels() {
        let sections = sections(&OdiaConfig::default());
        let phalas = sections
            .iter()
            .find(|s| s.title == "Phalas")
            .expect("phala section");
        for key in &phalas.keys {
            assert!(key.label.starts_with(script::HALANT));
            assert!(matches!(key.action, KeyAction::ApplyPhala(_)));
        }
    }

    #[test]
    fn test_utilities_present() {
        let sections = sections(&OdiaConfig::default());
        let utilities = sections.last().expect("utilities");
        assert_eq!(utilities.title, "Utilities");
        assert!(utilities
            .keys
            .iter()
            .any(|k| k.action == KeyAction::DeleteBackward));
        assert!(utilities.keys.iter().any(|k| k.action == KeyAction::Clear));
    }
}
