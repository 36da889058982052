// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyboard layout: the records handed to the rendering and sound layers.
//!
//! A [`LayoutRequest`] describes scale, root, window and notations. Building
//! it produces one [`KeyRecord`] per key, in window order.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::music::model::{KeyColor, ScaleModel, DEFAULT_REFERENCE_OCTAVE};
use crate::music::note::MidiNote;
use crate::music::scale::ScaleRecipe;
use crate::notation::{glyphs, parse_notations, Notation, NoteNamer};

/// Everything the UI supplies for one layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub scale_recipe: ScaleRecipe,
    pub base_note: String,
    #[serde(default)]
    pub scale_start_offset: i32,
    pub ambitus: u32,
    #[serde(default)]
    pub notation_list: Vec<String>,
    #[serde(default)]
    pub color_palette: Vec<String>,
    #[serde(default = "default_reference_octave")]
    pub reference_octave: i32,
}

fn default_reference_octave() -> i32 {
    DEFAULT_REFERENCE_OCTAVE
}

impl LayoutRequest {
    /// Request with no notations, no palette and the default octave
    pub fn new(scale_recipe: ScaleRecipe, base_note: impl Into<String>, ambitus: u32) -> Self {
        Self {
            scale_recipe,
            base_note: base_note.into(),
            scale_start_offset: 0,
            ambitus,
            notation_list: Vec::new(),
            color_palette: Vec::new(),
            reference_octave: DEFAULT_REFERENCE_OCTAVE,
        }
    }

    pub fn with_start_offset(mut self, offset: i32) -> Self {
        self.scale_start_offset = offset;
        self
    }

    pub fn with_notations(mut self, notations: &[&str]) -> Self {
        self.notation_list = notations.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_palette(mut self, palette: &[&str]) -> Self {
        self.color_palette = palette.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Build the scale model and name every in-scale key
    pub fn build(&self) -> Result<Vec<KeyRecord>> {
        let notations = parse_notations(&self.notation_list)?;
        let model = ScaleModel::new(
            &self.scale_recipe,
            &self.base_note,
            self.scale_start_offset,
            self.ambitus,
            &self.color_palette,
        )?
        .with_reference_octave(self.reference_octave)?;

        let records = layout(&model, &notations);
        tracing::debug!(
            keys = records.len(),
            in_scale = records.iter().filter(|r| r.is_in_scale).count(),
            "built keyboard layout"
        );
        Ok(records)
    }
}

/// One name of a key in one notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteName {
    pub notation: Notation,
    /// ASCII name, e.g. `Sibb`
    pub name: String,
    /// Display form, e.g. `Si𝄫`
    pub label: String,
}

/// Everything the UI needs to draw and play one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    pub index: i32,
    pub note_letter_english: String,
    pub octave: i32,
    pub octave_offset: i32,
    pub midi: MidiNote,
    pub piano_key_color: KeyColor,
    pub is_in_scale: bool,
    pub color: Option<String>,
    pub names: Vec<NoteName>,
}

impl KeyRecord {
    /// Name in a given notation, if the key has one
    pub fn name(&self, notation: Notation) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.notation == notation)
            .map(|n| n.name.as_str())
    }

    /// Sound lookup key, e.g. `C#4`
    pub fn sample_key(&self) -> String {
        format!("{}{}", self.note_letter_english, self.octave)
    }
}

/// Turn a scale model into key records for the requested notations
pub fn layout(model: &ScaleModel, notations: &[Notation]) -> Vec<KeyRecord> {
    let namer = NoteNamer::new(model);
    let show_colors = notations.contains(&Notation::Colors);

    model
        .positions()
        .iter()
        .map(|position| {
            let names = notations
                .iter()
                .filter_map(|&notation| {
                    namer.name(position, notation).map(|name| NoteName {
                        notation,
                        label: glyphs::render(&name),
                        name,
                    })
                })
                .collect();
            let color = if show_colors {
                model.color_of(position).map(str::to_string)
            } else {
                None
            };

            KeyRecord {
                index: position.index,
                note_letter_english: position.note.to_string(),
                octave: position.octave,
                octave_offset: position.octave_offset,
                midi: position.midi,
                piano_key_color: position.key_color,
                is_in_scale: position.is_in_scale(),
                color,
                names,
            }
        })
        .collect()
}
