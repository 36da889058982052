// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! keyspell: note naming for an interactive piano keyboard.
//!
//! Given a scale recipe, a root and a window of keys, the engine spells
//! every key in English, German and Romance notation, derives movable-do
//! syllables and degree labels, and reports which keys belong to the scale.
//! It is pure: no I/O, no shared state.
//!
//! ```
//! use keyspell::{BuiltinScale, LayoutRequest, Notation};
//!
//! let keys = LayoutRequest::new(BuiltinScale::Phrygian.recipe(), "Ab", 12)
//!     .with_notations(&["Romance"])
//!     .build()
//!     .unwrap();
//! assert_eq!(keys[1].name(Notation::Romance), Some("Sibb"));
//! ```

pub mod config;
pub mod error;
pub mod keyboard;
pub mod music;
pub mod notation;

pub use error::{Result, TheoryError};
pub use keyboard::{layout, KeyRecord, LayoutRequest, NoteName};
pub use music::{
    Accidental, BuiltinScale, KeyColor, Letter, Position, ScaleLibrary, ScaleModel, ScaleRecipe,
    SpelledNote,
};
pub use notation::{Notation, NoteNamer};
