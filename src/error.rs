// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.
//!
//! Every variant is a validation failure on caller-supplied data. None of
//! them are retryable, and the engine never substitutes a default spelling
//! after one is raised.

use thiserror::Error;

use crate::music::note::Letter;

/// Errors produced while building a scale model or naming its keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The scale recipe is empty, unordered, or inconsistent
    #[error("invalid scale recipe '{name}': {reason}")]
    InvalidScaleRecipe { name: String, reason: String },

    /// The base note is not a letter followed by at most two accidentals
    #[error("invalid base note: {0:?}")]
    InvalidBaseNote(String),

    /// The notation id is not one of the supported notations
    #[error("unsupported notation: {0:?}")]
    UnsupportedNotation(String),

    /// A pitch class cannot be reached from a letter with at most two accidentals
    #[error("cannot spell pitch class {pitch_class} on letter {letter}")]
    UnresolvableSpelling { letter: Letter, pitch_class: u8 },

    /// The window spans no keys, or more keys than a MIDI keyboard has
    #[error("invalid ambitus {0}: must span 1 to 128 keys")]
    InvalidAmbitus(u32),

    /// Some key of the window has no representable MIDI number
    #[error("window starting {start_offset} semitones above the root in octave {reference_octave} is out of range")]
    WindowOutOfRange {
        start_offset: i32,
        reference_octave: i32,
    },
}

impl TheoryError {
    pub(crate) fn recipe(name: &str, reason: impl Into<String>) -> Self {
        TheoryError::InvalidScaleRecipe {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;
