// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic spelling policy.
//!
//! Keys that are not part of the scale still need a name for the sound
//! layer. They take it from one of three chromatic tables, and which table
//! is picked by a fixed decision table over the root's accidental and the
//! mode family. In-scale tones are always spelled from the recipe instead,
//! see [`spell_degrees`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{Accidental, Letter, SpelledNote};
use super::scale::{DegreeLabel, ScaleRecipe};
use crate::error::Result;

/// Which chromatic table fills the out-of-scale keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePreference {
    Sharp,
    Flat,
    DoubleFlat,
}

impl fmt::Display for TablePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TablePreference::Sharp => write!(f, "sharp"),
            TablePreference::Flat => write!(f, "flat"),
            TablePreference::DoubleFlat => write!(f, "double-flat"),
        }
    }
}

/// Coarse character of a mode, read from its intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeFamily {
    /// Major third, no minor second (Ionian, Lydian, Mixolydian, pentatonic)
    Major,
    /// Minor third, no major third, no minor second (Aeolian, Dorian, blues)
    Minor,
    /// Contains a minor second above the root (Phrygian, Locrian)
    FlatSecond,
}

impl ModeFamily {
    /// Classify a recipe
    pub fn of(recipe: &ScaleRecipe) -> Self {
        if recipe.contains_interval(1) {
            ModeFamily::FlatSecond
        } else if recipe.contains_interval(3) && !recipe.contains_interval(4) {
            ModeFamily::Minor
        } else {
            ModeFamily::Major
        }
    }
}

/// Pick the chromatic table for a root accidental and mode family.
///
/// Every row is listed; there is no fallback arm.
pub fn select_table(root: Accidental, family: ModeFamily) -> TablePreference {
    use Accidental::*;
    use ModeFamily::*;
    use TablePreference as T;

    match (root, family) {
        (Natural, Major) => T::Sharp,
        (Natural, Minor) => T::Flat,
        (Natural, FlatSecond) => T::Flat,

        (Sharp, Major) => T::Sharp,
        (Sharp, Minor) => T::Sharp,
        (Sharp, FlatSecond) => T::Sharp,

        (Flat, Major) => T::Flat,
        (Flat, Minor) => T::Flat,
        (Flat, FlatSecond) => T::DoubleFlat,

        (DoubleSharp, Major) => T::Sharp,
        (DoubleSharp, Minor) => T::Sharp,
        (DoubleSharp, FlatSecond) => T::Sharp,

        (DoubleFlat, Major) => T::DoubleFlat,
        (DoubleFlat, Minor) => T::DoubleFlat,
        (DoubleFlat, FlatSecond) => T::DoubleFlat,
    }
}

const fn n(letter: Letter, accidental: Accidental) -> SpelledNote {
    SpelledNote::new(letter, accidental)
}

const SHARP_TABLE: [SpelledNote; 12] = [
    n(Letter::C, Accidental::Natural),
    n(Letter::C, Accidental::Sharp),
    n(Letter::D, Accidental::Natural),
    n(Letter::D, Accidental::Sharp),
    n(Letter::E, Accidental::Natural),
    n(Letter::F, Accidental::Natural),
    n(Letter::F, Accidental::Sharp),
    n(Letter::G, Accidental::Natural),
    n(Letter::G, Accidental::Sharp),
    n(Letter::A, Accidental::Natural),
    n(Letter::A, Accidental::Sharp),
    n(Letter::B, Accidental::Natural),
];

const FLAT_TABLE: [SpelledNote; 12] = [
    n(Letter::C, Accidental::Natural),
    n(Letter::D, Accidental::Flat),
    n(Letter::D, Accidental::Natural),
    n(Letter::E, Accidental::Flat),
    n(Letter::E, Accidental::Natural),
    n(Letter::F, Accidental::Natural),
    n(Letter::G, Accidental::Flat),
    n(Letter::G, Accidental::Natural),
    n(Letter::A, Accidental::Flat),
    n(Letter::A, Accidental::Natural),
    n(Letter::B, Accidental::Flat),
    n(Letter::B, Accidental::Natural),
];

// Deep flat side: E and B become Fb and Cb. Double flats only ever come
// from a scale's own degrees.
const DOUBLE_FLAT_TABLE: [SpelledNote; 12] = [
    n(Letter::C, Accidental::Natural),
    n(Letter::D, Accidental::Flat),
    n(Letter::D, Accidental::Natural),
    n(Letter::E, Accidental::Flat),
    n(Letter::F, Accidental::Flat),
    n(Letter::F, Accidental::Natural),
    n(Letter::G, Accidental::Flat),
    n(Letter::G, Accidental::Natural),
    n(Letter::A, Accidental::Flat),
    n(Letter::A, Accidental::Natural),
    n(Letter::B, Accidental::Flat),
    n(Letter::C, Accidental::Flat),
];

/// The English chromatic table for a preference, indexed by pitch class
pub fn chromatic_table(preference: TablePreference) -> &'static [SpelledNote; 12] {
    match preference {
        TablePreference::Sharp => &SHARP_TABLE,
        TablePreference::Flat => &FLAT_TABLE,
        TablePreference::DoubleFlat => &DOUBLE_FLAT_TABLE,
    }
}

/// Spell every degree of a recipe on its theoretical letter.
///
/// The degree label number picks the letter (`b3` lands two letters above
/// the root), the accidental is whatever reaches the pitch class. This keeps
/// `F##` in G# Lydian and `Bbb` in Ab Phrygian instead of respelling them.
pub fn spell_degrees(
    root: SpelledNote,
    recipe: &ScaleRecipe,
    labels: &[DegreeLabel],
) -> Result<Vec<SpelledNote>> {
    let root_pc = root.pitch_class();
    recipe
        .steps
        .iter()
        .zip(labels)
        .map(|(&step, label)| {
            let letter = root.letter.offset(label.letter_steps());
            let pitch_class = ((root_pc as u16 + step as u16) % 12) as u8;
            let spelled = SpelledNote::spell(letter, pitch_class)?;
            tracing::trace!(degree = %label, note = %spelled, "spelled degree");
            Ok(spelled)
        })
        .collect()
}
