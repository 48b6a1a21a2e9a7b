//! Composition operations over an editing surface.
//!
//! The composer implements the five editing operations of the keyboard and
//! a single `apply()` entry point that dispatches a tagged `KeyAction`.
//! It is generic over the script seam: the same engine drives any Brahmic
//! script that supplies consonant membership, conjunct marks, and a nasal
//! assimilation table.

use tracing::debug;

use crate::action::{EditOutcome, KeyAction};
use crate::grapheme;
use crate::script::ScriptRules;
use crate::surface::Surface;
use crate::Config;

/// Composition engine combining script rules with engine configuration.
///
/// Type parameter R is the script definition (e.g. `OdiaRules`). All
/// operations mutate the surface in place and report whether anything
/// changed; none of them can fail.
pub struct Composer<R: ScriptRules> {
    rules: R,
    config: Config,
}

impl<R: ScriptRules> Composer<R> {
    /// Create a composer with default configuration.
    pub fn new(rules: R) -> Self {
        Self::with_config(rules, Config::default())
    }

    /// Create a composer with explicit configuration.
    pub fn with_config(rules: R, config: Config) -> Self {
        Self { rules, config }
    }

    /// Get a reference to the script rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a mutable reference to the engine configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Apply a tagged key action to the surface.
    ///
    /// This is the main entry point for host shells: one call per key
    /// press, after which the shell re-renders the surface text and
    /// selection.
    pub fn apply(&self, surface: &mut Surface, action: &KeyAction) -> EditOutcome {
        match action {
            KeyAction::InsertLiteral(literal) => self.insert(surface, literal),
            KeyAction::InsertConsonant(consonant) => self.insert_consonant(surface, *consonant),
            KeyAction::ApplyPhala(phala) => self.apply_phala(surface, *phala),
            KeyAction::DeleteBackward => self.delete_backward(surface),
            KeyAction::Clear => self.clear(surface),
        }
    }

    /// Insert a literal symbol, replacing the selection if one exists.
    ///
    /// The literal may span several scalars (a pre-composed conjunct, a
    /// space). The cursor collapses after the inserted text.
    pub fn insert(&self, surface: &mut Surface, literal: &str) -> EditOutcome {
        surface.replace_selection(literal);
        EditOutcome::Applied
    }

    /// Insert a base consonant, assimilating a directly preceding anusvara
    /// into the matching homorganic nasal conjunct.
    ///
    /// Assimilation only fires for a collapsed cursor, and only for the
    /// closed set of consonants in the script's nasal table; everything
    /// else is a plain insertion.
    pub fn insert_consonant(&self, surface: &mut Surface, consonant: char) -> EditOutcome {
        if self.config.nasal_assimilation && !surface.has_selection() {
            if surface.char_before_cursor() == Some(self.rules.anusvara()) {
                if let Some(replacement) = self.rules.nasal_conjunct(consonant) {
                    let cursor = surface.cursor();
                    let mark_start = cursor - self.rules.anusvara().len_utf8();
                    debug!(%consonant, replacement, "assimilating anusvara");
                    surface.replace_range(mark_start, cursor, replacement);
                    return EditOutcome::Applied;
                }
            }
        }
        surface.replace_selection(&consonant.to_string());
        EditOutcome::Applied
    }

    /// Attach a subscript (phala) consonant to the stem before the cursor.
    ///
    /// After a bare consonant this inserts halant + phala; after an
    /// existing consonant + halant pair only the phala is inserted, so the
    /// halant is never duplicated. Any other context declines to mutate.
    pub fn apply_phala(&self, surface: &mut Surface, phala: char) -> EditOutcome {
        if surface.has_selection() || surface.cursor() == 0 {
            return EditOutcome::Unchanged;
        }

        let mut before = surface.text()[..surface.cursor()].chars().rev();
        let prev = before.next();
        let prev2 = before.next();

        match prev {
            Some(ch) if self.rules.is_consonant(ch) => {
                let mut cluster = String::new();
                cluster.push(self.rules.halant());
                cluster.push(phala);
                debug!(%phala, "composing conjunct stem");
                surface.replace_selection(&cluster);
                EditOutcome::Applied
            }
            Some(ch)
                if ch == self.rules.halant()
                    && prev2.is_some_and(|c| self.rules.is_consonant(c)) =>
            {
                surface.replace_selection(&phala.to_string());
                EditOutcome::Applied
            }
            _ => EditOutcome::Unchanged,
        }
    }

    /// Delete the previous unit: the selection if one exists, otherwise the
    /// last grapheme cluster before the cursor (or one scalar when cluster
    /// deletion is disabled). At the start of text this is a no-op.
    pub fn delete_backward(&self, surface: &mut Surface) -> EditOutcome {
        if surface.has_selection() {
            surface.delete_selection();
            return EditOutcome::Applied;
        }

        let cursor = surface.cursor();
        if cursor == 0 {
            return EditOutcome::Unchanged;
        }

        let start = if self.config.cluster_backspace {
            grapheme::last_cluster_start(surface.text(), cursor)
        } else {
            grapheme::last_scalar_start(surface.text(), cursor)
        };
        debug!(start, cursor, "deleting backward");
        surface.replace_range(start, cursor, "");
        EditOutcome::Applied
    }

    /// Discard all content unconditionally.
    pub fn clear(&self, surface: &mut Surface) -> EditOutcome {
        surface.clear();
        EditOutcome::Applied
    }
}
