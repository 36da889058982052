// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notation systems for key labels.
//!
//! Names are produced per in-scale position and per requested notation.
//! Out-of-scale keys and the `Colors` notation never get a text name.

pub mod glyphs;
pub mod relative;
pub mod tables;

pub use tables::{chromatic_names, Language};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::music::model::{Position, ScaleModel};

/// Notation ids accepted from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Notation {
    Colors,
    English,
    German,
    Romance,
    Relative,
    #[serde(rename = "Scale Steps")]
    ScaleSteps,
    #[serde(rename = "Chord extensions")]
    ChordExtensions,
}

impl Notation {
    pub const ALL: [Notation; 7] = [
        Notation::Colors,
        Notation::English,
        Notation::German,
        Notation::Romance,
        Notation::Relative,
        Notation::ScaleSteps,
        Notation::ChordExtensions,
    ];

    /// The id string used on the wire
    pub fn id(self) -> &'static str {
        match self {
            Notation::Colors => "Colors",
            Notation::English => "English",
            Notation::German => "German",
            Notation::Romance => "Romance",
            Notation::Relative => "Relative",
            Notation::ScaleSteps => "Scale Steps",
            Notation::ChordExtensions => "Chord extensions",
        }
    }

    /// Language for absolute note names, if this notation spells letters
    pub fn language(self) -> Option<Language> {
        match self {
            Notation::English => Some(Language::English),
            Notation::German => Some(Language::German),
            Notation::Romance => Some(Language::Romance),
            _ => None,
        }
    }

    /// Whether the notation produces a text name
    pub fn is_textual(self) -> bool {
        self != Notation::Colors
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Notation {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Notation::ALL
            .iter()
            .copied()
            .find(|n| n.id() == s.trim())
            .ok_or_else(|| TheoryError::UnsupportedNotation(s.to_string()))
    }
}

/// Parse a list of notation ids, failing on the first unknown one
pub fn parse_notations<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Notation>> {
    ids.iter().map(|id| id.as_ref().parse()).collect()
}

/// Names the keys of one scale model
#[derive(Debug, Clone, Copy)]
pub struct NoteNamer<'a> {
    model: &'a ScaleModel,
}

impl<'a> NoteNamer<'a> {
    pub fn new(model: &'a ScaleModel) -> Self {
        Self { model }
    }

    /// Name an interval above the root in one notation.
    ///
    /// Returns `None` for out-of-scale intervals and for `Colors`.
    pub fn name_interval(&self, interval: i32, notation: Notation) -> Option<String> {
        let degree = self.model.degree_of(interval)?;
        let label = self.model.label(degree)?;
        let note = self.model.scale_notes().get(degree).copied()?;

        match notation {
            Notation::Colors => None,
            Notation::English | Notation::German | Notation::Romance => {
                notation.language().map(|language| language.render(note))
            }
            Notation::Relative => Some(relative::syllable(interval).to_string()),
            Notation::ScaleSteps => Some(label.as_str().to_string()),
            Notation::ChordExtensions => Some(label.extension()),
        }
    }

    /// Name a position in one notation
    pub fn name(&self, position: &Position, notation: Notation) -> Option<String> {
        self.name_interval(position.index, notation)
    }

    /// Name a position in a notation given by id
    pub fn name_by_id(&self, position: &Position, notation_id: &str) -> Result<Option<String>> {
        let notation: Notation = notation_id.parse()?;
        Ok(self.name(position, notation))
    }
}
