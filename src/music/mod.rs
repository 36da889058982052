// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for the keyboard.
//!
//! This module provides spelled note names, scale recipes, the enharmonic
//! spelling policy, and the scale model that lays a scale over a window of
//! piano keys.

pub mod model;
pub mod note;
pub mod scale;
pub mod spelling;

pub use model::{KeyColor, Position, ScaleModel, DEFAULT_REFERENCE_OCTAVE, MAX_AMBITUS};
pub use note::{Accidental, Letter, MidiNote, SpelledNote};
pub use scale::{BuiltinScale, DegreeLabel, ScaleLibrary, ScaleRecipe};
pub use spelling::{ModeFamily, TablePreference};
