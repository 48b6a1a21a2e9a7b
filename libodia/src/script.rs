// libodia/src/script.rs
//
// Odia (Utkala lipi) script data: the character-class tables behind the
// on-screen keyboard and the rules the composition engine consults.
//
// The assimilation table covers exactly the twenty stop consonants with a
// homorganic nasal, one row per place of articulation:
//   velar     କ ଖ ଗ ଘ  → ଙ + halant + stop
//   palatal   ଚ ଛ ଜ ଝ  → ଞ + halant + stop
//   retroflex ଟ ଠ ଡ ଢ  → ଣ + halant + stop
//   dental    ତ ଥ ଦ ଧ  → ନ + halant + stop
//   labial    ପ ଫ ବ ଭ  → ମ + halant + stop
// It is a closed, exact-match rule set; consonants outside it never touch a
// preceding anusvara.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use phf::phf_map;

use libodia_core::ScriptRules;

/// Vowel-suppressing combining mark (virama), U+0B4D.
pub const HALANT: char = '\u{0B4D}';

/// Nasal mark assimilated before mapped stops, U+0B02.
pub const ANUSVARA: char = '\u{0B02}';

/// Independent vowels, with the anusvara and visarga marks laid out on the
/// same row as the source keyboard does.
pub static VOWELS: &[&str] = &[
    "ଅ", "ଆ", "ଇ", "ଈ", "ଉ", "ଊ", "ଋ", "ୠ", "ଌ", "ୡ", "ଏ", "ଐ", "ଓ", "ଔ", "ଂ", "ଃ",
];

/// Base consonants in traditional varga order.
pub static CONSONANTS: &[char] = &[
    'କ', 'ଖ', 'ଗ', 'ଘ', 'ଙ', //
    'ଚ', 'ଛ', 'ଜ', 'ଝ', 'ଞ', //
    'ଟ', 'ଠ', 'ଡ', 'ଢ', 'ଣ', //
    'ତ', 'ଥ', 'ଦ', 'ଧ', 'ନ', //
    'ପ', 'ଫ', 'ବ', 'ଭ', 'ମ', //
    'ଯ', 'ର', 'ଲ', 'ଳ', 'ଵ', //
    'ଶ', 'ଷ', 'ସ', 'ହ',
];

/// Dependent vowel signs, ending with the bare halant key.
pub static MATRAS: &[&str] = &["ା", "ି", "ୀ", "ୁ", "ୂ", "ୃ", "େ", "ୈ", "ୋ", "ୌ", "୍"];

/// Pre-composed conjunct literals offered as single keys.
pub static YUKTAKSHARAS: &[&str] = &["କ୍ଷ", "ତ୍ର", "ଜ୍ଞ", "ଶ୍ର", "ଦ୍ୟ", "ନ୍ଦ"];

/// Odia digits, U+0B66..U+0B6F.
pub static DIGITS: &[&str] = &["୦", "୧", "୨", "୩", "୪", "୫", "୬", "୭", "୮", "୯"];

/// Punctuation keys: danda, double danda, and common Latin marks.
pub static PUNCTUATION: &[&str] = &["।", "॥", ",", ".", "?", "!", ";", "-"];

/// Subscript (phala) keys as `(label, consonant)` pairs. The label shows
/// the rendered subscript form; the consonant is what the engine attaches
/// after a halant.
pub static PHALAS: &[(&str, char)] = &[
    ("୍ୟ", 'ୟ'),
    ("୍ର", 'ର'),
    ("୍ଲ", 'ଲ'),
    ("୍ବ", 'ବ'),
    ("୍ମ", 'ମ'),
];

/// Anusvara + stop replacements, keyed by the inserted stop consonant.
pub static NASAL_CONJUNCTS: phf::Map<char, &'static str> = phf_map! {
    // velar
    'କ' => "ଙ୍କ",
    'ଖ' => "ଙ୍ଖ",
    'ଗ' => "ଙ୍ଗ",
    'ଘ' => "ଙ୍ଘ",
    // palatal
    'ଚ' => "ଞ୍ଚ",
    'ଛ' => "ଞ୍ଛ",
    'ଜ' => "ଞ୍ଜ",
    'ଝ' => "ଞ୍ଝ",
    // retroflex
    'ଟ' => "ଣ୍ଟ",
    'ଠ' => "ଣ୍ଠ",
    'ଡ' => "ଣ୍ଡ",
    'ଢ' => "ଣ୍ଢ",
    // dental
    'ତ' => "ନ୍ତ",
    'ଥ' => "ନ୍ଥ",
    'ଦ' => "ନ୍ଦ",
    'ଧ' => "ନ୍ଧ",
    // labial
    'ପ' => "ମ୍ପ",
    'ଫ' => "ମ୍ଫ",
    'ବ' => "ମ୍ବ",
    'ଭ' => "ମ୍ଭ",
};

static CONSONANT_SET: Lazy<HashSet<char>> = Lazy::new(|| CONSONANTS.iter().copied().collect());

/// Odia implementation of the engine's script seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct OdiaRules;

impl ScriptRules for OdiaRules {
    fn halant(&self) -> char {
        HALANT
    }

    fn anusvara(&self) -> char {
        ANUSVARA
    }

    fn is_consonant(&self, ch: char) -> bool {
        CONSONANT_SET.contains(&ch)
    }

    fn nasal_conjunct(&self, consonant: char) -> Option<&'static str> {
        NASAL_CONJUNCTS.get(&consonant).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_match_tables() {
        // The halant key sits at the end of the matra row; the anusvara is
        // laid out with the vowels.
        assert_eq!(MATRAS.last(), Some(&"\u{0B4D}"));
        assert!(VOWELS.contains(&"\u{0B02}"));
    }

    #[test]
    fn test_nasal_table_covers_twenty_stops() {
        assert_eq!(NASAL_CONJUNCTS.len(), 20);
        let rules = OdiaRules;
        for (stop, replacement) in NASAL_CONJUNCTS.entries() {
            assert!(rules.is_consonant(*stop), "key {} not a consonant", stop);

            let scalars: Vec<char> = replacement.chars().collect();
            assert_eq!(scalars.len(), 3, "conjunct {} not nasal+halant+stop", replacement);
            assert!(
                matches!(scalars[0], 'ଙ' | 'ଞ' | 'ଣ' | 'ନ' | 'ମ'),
                "unexpected nasal {} in {}",
                scalars[0],
                replacement
            );
            assert_eq!(scalars[1], HALANT);
            assert_eq!(scalars[2], *stop);
        }
    }

    #[test]
    fn test_nasal_lookup() {
        let rules = OdiaRules;
        assert_eq!(rules.nasal_conjunct('କ'), Some("ଙ୍କ"));
        assert_eq!(rules.nasal_conjunct('ବ'), Some("ମ୍ବ"));
        // Nasals themselves and non-stop consonants are unmapped.
        assert_eq!(rules.nasal_conjunct('ଙ'), None);
        assert_eq!(rules.nasal_conjunct('ସ'), None);
    }

    #[test]
    fn test_consonant_membership() {
        let rules = OdiaRules;
        assert!(rules.is_consonant('କ'));
        assert!(rules.is_consonant('ହ'));
        assert!(!rules.is_consonant('ଅ'));
        assert!(!rules.is_consonant(HALANT));
        assert!(!rules.is_consonant('k'));
    }

    #[test]
    fn test_yuktaksharas_are_conjunct_literals() {
        for y in YUKTAKSHARAS {
            assert!(y.chars().count() >= 3, "{} is not a conjunct literal", y);
            assert!(y.chars().any(|ch| ch == HALANT));
        }
    }
}
