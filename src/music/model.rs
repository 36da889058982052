// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale model: the ordered key positions of a keyboard window.
//!
//! Positions are indexed in semitones relative to the root. The root sits
//! at a reference octave (4 by default, MIDI convention C4 = 60) and octave
//! numbers follow the spelled letter, so `B#3` and `C4` are the same key
//! but different octaves.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{Letter, MidiNote, SpelledNote};
use super::scale::{DegreeLabel, ScaleRecipe};
use super::spelling::{chromatic_table, select_table, spell_degrees, ModeFamily, TablePreference};
use crate::error::{Result, TheoryError};

/// Default octave the root is placed in
pub const DEFAULT_REFERENCE_OCTAVE: i32 = 4;

/// Widest window, the full MIDI note range
pub const MAX_AMBITUS: u32 = 128;

/// Piano key colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    White,
    Black,
}

impl KeyColor {
    /// Colour of the key sounding a pitch class.
    ///
    /// Black keys are exactly the pitch classes whose sharp-table name
    /// carries an accidental.
    pub fn of_pitch_class(pitch_class: u8) -> Self {
        let canonical = chromatic_table(TablePreference::Sharp)[(pitch_class % 12) as usize];
        if canonical.accidental.semitones() == 0 {
            KeyColor::White
        } else {
            KeyColor::Black
        }
    }
}

impl fmt::Display for KeyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyColor::White => write!(f, "white"),
            KeyColor::Black => write!(f, "black"),
        }
    }
}

/// One key in the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Semitones from the root
    pub index: i32,
    /// Absolute MIDI-like number
    pub midi: MidiNote,
    /// English spelling of the key
    pub note: SpelledNote,
    /// Letter-based octave of `note`
    pub octave: i32,
    /// `octave` relative to the reference octave
    pub octave_offset: i32,
    pub key_color: KeyColor,
    /// Index into the recipe, `None` when the key is out of scale
    pub degree: Option<usize>,
}

impl Position {
    pub fn is_in_scale(&self) -> bool {
        self.degree.is_some()
    }

    pub fn pitch_class(&self) -> u8 {
        self.midi.rem_euclid(12) as u8
    }

    /// Note name plus octave, the key used by the sound layer (`C#4`, `Bb3`)
    pub fn sample_key(&self) -> String {
        format!("{}{}", self.note, self.octave)
    }
}

/// Position list for one scale, root and window
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleModel {
    recipe: ScaleRecipe,
    labels: Vec<DegreeLabel>,
    root: SpelledNote,
    start_offset: i32,
    ambitus: u32,
    palette: Vec<String>,
    reference_octave: i32,
    preference: TablePreference,
    /// Spelling of each degree, in recipe order
    degree_notes: Vec<SpelledNote>,
    /// Spelling used for each absolute pitch class
    table: [SpelledNote; 12],
    /// Degree index for each interval above the root
    degrees: [Option<usize>; 12],
    positions: Vec<Position>,
}

impl ScaleModel {
    /// Build the model for a window of `ambitus` semitones starting
    /// `start_offset` semitones above the root.
    ///
    /// `palette` assigns a colour per scale degree and may be empty.
    pub fn new(
        recipe: &ScaleRecipe,
        base_note: &str,
        start_offset: i32,
        ambitus: u32,
        palette: &[String],
    ) -> Result<Self> {
        let labels = recipe.validate()?;
        let root: SpelledNote = base_note.parse()?;
        check_window(root, DEFAULT_REFERENCE_OCTAVE, start_offset, ambitus)?;

        let family = ModeFamily::of(recipe);
        let preference = select_table(root.accidental, family);
        let degree_notes = spell_degrees(root, recipe, &labels)?;

        let mut table = *chromatic_table(preference);
        for note in &degree_notes {
            table[note.pitch_class() as usize] = *note;
        }

        let mut degrees = [None; 12];
        for (degree, pc) in recipe.pitch_classes().enumerate() {
            degrees[pc as usize] = Some(degree);
        }

        tracing::debug!(
            scale = %recipe,
            root = %root,
            ?family,
            table = %preference,
            start_offset,
            ambitus,
            "building scale model"
        );

        let mut model = Self {
            recipe: recipe.clone(),
            labels,
            root,
            start_offset,
            ambitus,
            palette: palette.to_vec(),
            reference_octave: DEFAULT_REFERENCE_OCTAVE,
            preference,
            degree_notes,
            table,
            degrees,
            positions: Vec::new(),
        };
        model.build_positions();
        Ok(model)
    }

    /// Place the root in a different octave
    pub fn with_reference_octave(mut self, octave: i32) -> Result<Self> {
        check_window(self.root, octave, self.start_offset, self.ambitus)?;
        self.reference_octave = octave;
        self.build_positions();
        Ok(self)
    }

    fn build_positions(&mut self) {
        let root_midi = self.root_midi();
        let end = self.start_offset + self.ambitus as i32;
        self.positions = (self.start_offset..end)
            .map(|index| {
                let midi = root_midi + index;
                let pitch_class = midi.rem_euclid(12) as u8;
                let note = self.table[pitch_class as usize];
                let octave = note.octave_of(midi);
                Position {
                    index,
                    midi,
                    note,
                    octave,
                    octave_offset: octave - self.reference_octave,
                    key_color: KeyColor::of_pitch_class(pitch_class),
                    degree: self.degrees[index.rem_euclid(12) as usize],
                }
            })
            .collect();
    }

    pub fn recipe(&self) -> &ScaleRecipe {
        &self.recipe
    }

    /// Parsed degree labels, in recipe order
    pub fn labels(&self) -> &[DegreeLabel] {
        &self.labels
    }

    pub fn root(&self) -> SpelledNote {
        self.root
    }

    /// MIDI number of the root at the reference octave
    pub fn root_midi(&self) -> MidiNote {
        self.root.midi_in_octave(self.reference_octave)
    }

    pub fn reference_octave(&self) -> i32 {
        self.reference_octave
    }

    pub fn start_offset(&self) -> i32 {
        self.start_offset
    }

    pub fn ambitus(&self) -> u32 {
        self.ambitus
    }

    /// Chromatic table chosen for out-of-scale keys
    pub fn preference(&self) -> TablePreference {
        self.preference
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// In-scale spellings in degree order
    pub fn scale_notes(&self) -> &[SpelledNote] {
        &self.degree_notes
    }

    /// The scale-specific spelling table, indexed by absolute pitch class
    pub fn spelling_table(&self) -> &[SpelledNote; 12] {
        &self.table
    }

    /// Degree index of an interval above the root, if it is in the scale
    pub fn degree_of(&self, interval: i32) -> Option<usize> {
        self.degrees[interval.rem_euclid(12) as usize]
    }

    /// Degree label of a degree index
    pub fn label(&self, degree: usize) -> Option<&DegreeLabel> {
        self.labels.get(degree)
    }

    /// Check if a MIDI note belongs to the scale
    pub fn contains_midi(&self, midi: MidiNote) -> bool {
        let interval = (i64::from(midi) - i64::from(self.root_midi())).rem_euclid(12);
        self.degrees[interval as usize].is_some()
    }

    /// Palette colour of an in-scale position, cycled by degree
    pub fn color_of(&self, position: &Position) -> Option<&str> {
        let degree = position.degree?;
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[degree % self.palette.len()].as_str())
    }

    /// Letter the root is spelled on
    pub fn root_letter(&self) -> Letter {
        self.root.letter
    }
}

/// Every key of the window, and the root itself, must have an `i32` MIDI number
fn check_window(
    root: SpelledNote,
    reference_octave: i32,
    start_offset: i32,
    ambitus: u32,
) -> Result<()> {
    if ambitus == 0 || ambitus > MAX_AMBITUS {
        return Err(TheoryError::InvalidAmbitus(ambitus));
    }

    let octave_base = (i64::from(reference_octave) + 1) * 12;
    let root_midi = octave_base
        + i64::from(root.letter.natural_pitch_class())
        + i64::from(root.accidental.semitones());
    let first = root_midi + i64::from(start_offset);
    let last = first + i64::from(ambitus) - 1;
    let end_index = i64::from(start_offset) + i64::from(ambitus);

    let fits = |value: i64| i32::try_from(value).is_ok();
    if [octave_base, root_midi, first, last, end_index]
        .into_iter()
        .all(fits)
    {
        Ok(())
    } else {
        Err(TheoryError::WindowOutOfRange {
            start_offset,
            reference_octave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::BuiltinScale;

    fn model(root: &str, scale: BuiltinScale, start: i32, ambitus: u32) -> ScaleModel {
        ScaleModel::new(&scale.recipe(), root, start, ambitus, &[]).unwrap()
    }

    fn in_scale_names(model: &ScaleModel) -> Vec<String> {
        model
            .positions()
            .iter()
            .filter(|p| p.is_in_scale())
            .map(|p| p.note.to_string())
            .collect()
    }

    #[test]
    fn test_c_major_octave() {
        let m = model("C", BuiltinScale::Major, 0, 12);
        assert_eq!(m.positions().len(), 12);
        assert_eq!(in_scale_names(&m), ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(m.positions()[0].midi, 60);
        assert_eq!(m.positions()[0].sample_key(), "C4");
        assert_eq!(m.positions()[1].note.to_string(), "C#");
        assert_eq!(m.positions()[1].key_color, KeyColor::Black);
        assert!(!m.positions()[1].is_in_scale());
    }

    #[test]
    fn test_key_colors() {
        let m = model("C", BuiltinScale::Chromatic, 0, 12);
        let colors: Vec<KeyColor> = m.positions().iter().map(|p| p.key_color).collect();
        use KeyColor::{Black as K, White as W};
        assert_eq!(colors, [W, K, W, K, W, W, K, W, K, W, K, W]);

        // Colour follows the sounding key, not the spelling
        let m = model("Cb", BuiltinScale::Major, 0, 1);
        assert_eq!(m.positions()[0].key_color, KeyColor::White);
        let m = model("E#", BuiltinScale::Major, 0, 1);
        assert_eq!(m.positions()[0].key_color, KeyColor::White);
    }

    #[test]
    fn test_letter_based_octaves_at_edges() {
        let m = model("Cb", BuiltinScale::Major, 0, 12);
        let root = &m.positions()[0];
        assert_eq!(root.note.to_string(), "Cb");
        assert_eq!(root.midi, 59);
        assert_eq!(root.octave, 4);
        assert_eq!(root.octave_offset, 0);
        assert_eq!(root.sample_key(), "Cb4");

        let m = model("C#", BuiltinScale::Major, 0, 12);
        let seventh = m.positions().iter().find(|p| p.index == 11).unwrap();
        assert_eq!(seventh.note.to_string(), "B#");
        assert_eq!(seventh.midi, 72);
        assert_eq!(seventh.octave, 4);
        assert_eq!(seventh.sample_key(), "B#4");
    }

    #[test]
    fn test_octave_offset_crosses_c() {
        let m = model("A", BuiltinScale::NaturalMinor, 0, 12);
        let names: Vec<(String, i32)> = m
            .positions()
            .iter()
            .filter(|p| p.is_in_scale())
            .map(|p| (p.note.to_string(), p.octave_offset))
            .collect();
        assert_eq!(
            names,
            [
                ("A".to_string(), 0),
                ("B".to_string(), 0),
                ("C".to_string(), 1),
                ("D".to_string(), 1),
                ("E".to_string(), 1),
                ("F".to_string(), 1),
                ("G".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_window_offset() {
        let m = model("D", BuiltinScale::Major, 5, 4);
        let indices: Vec<i32> = m.positions().iter().map(|p| p.index).collect();
        assert_eq!(indices, [5, 6, 7, 8]);
        // 5 semitones above D is G (degree 4), 7 is A (degree 5)
        assert_eq!(m.positions()[0].degree, Some(3));
        assert_eq!(m.positions()[2].degree, Some(4));
        assert_eq!(m.positions()[1].degree, None);
    }

    #[test]
    fn test_negative_window_offset() {
        let m = model("E", BuiltinScale::Major, -4, 4);
        let names: Vec<String> = m.positions().iter().map(|p| p.note.to_string()).collect();
        assert_eq!(names, ["C", "C#", "D", "D#"]);
        assert_eq!(m.positions()[0].octave_offset, 0);
        assert_eq!(m.positions()[1].degree, Some(5));
    }

    #[test]
    fn test_two_octave_window() {
        let m = model("F#", BuiltinScale::Major, 0, 24);
        assert_eq!(m.positions().len(), 24);
        let names = in_scale_names(&m);
        assert_eq!(names.len(), 14);
        assert_eq!(names[..7], names[7..]);
        assert_eq!(names[..7], ["F#", "G#", "A#", "B", "C#", "D#", "E#"]);

        let octaves: Vec<i32> = m
            .positions()
            .iter()
            .filter(|p| p.note.to_string() == "F#")
            .map(|p| p.octave)
            .collect();
        assert_eq!(octaves, [4, 5]);
    }

    #[test]
    fn test_out_of_scale_keys_follow_policy() {
        let m = model("Ab", BuiltinScale::Phrygian, 0, 12);
        assert_eq!(m.preference(), TablePreference::DoubleFlat);
        let table: Vec<String> = m.spelling_table().iter().map(|n| n.to_string()).collect();
        assert_eq!(
            table,
            ["C", "Db", "D", "Eb", "Fb", "F", "Gb", "G", "Ab", "Bbb", "Bb", "Cb"]
        );

        let m = model("D", BuiltinScale::Major, 0, 12);
        assert_eq!(m.preference(), TablePreference::Sharp);
        let m = model("D", BuiltinScale::NaturalMinor, 0, 12);
        assert_eq!(m.preference(), TablePreference::Flat);
        let table: Vec<String> = m.spelling_table().iter().map(|n| n.to_string()).collect();
        assert_eq!(table[10], "Bb");
        assert_eq!(table[1], "Db");
    }

    #[test]
    fn test_contains_midi_and_palette() {
        let palette: Vec<String> = ["red", "green"].iter().map(|s| s.to_string()).collect();
        let m = ScaleModel::new(&BuiltinScale::Major.recipe(), "G", 0, 12, &palette).unwrap();
        assert!(m.contains_midi(67));
        assert!(m.contains_midi(66));
        assert!(!m.contains_midi(65));
        assert!(m.contains_midi(67 - 24));
        // E, far below any keyboard
        assert!(m.contains_midi(i32::MIN));

        let colors: Vec<Option<&str>> = m.positions().iter().map(|p| m.color_of(p)).collect();
        assert_eq!(colors[0], Some("red"));
        assert_eq!(colors[1], None);
        assert_eq!(colors[2], Some("green"));
        assert_eq!(colors[4], Some("red"));
    }

    #[test]
    fn test_reference_octave() {
        let m = model("C", BuiltinScale::Major, 0, 12)
            .with_reference_octave(2)
            .unwrap();
        assert_eq!(m.root_midi(), 36);
        assert_eq!(m.positions()[0].sample_key(), "C2");
        assert_eq!(m.positions()[0].octave_offset, 0);
    }

    #[test]
    fn test_construction_failures() {
        let empty = ScaleRecipe::new("Empty", vec![], vec![]);
        assert!(matches!(
            ScaleModel::new(&empty, "C", 0, 12, &[]),
            Err(TheoryError::InvalidScaleRecipe { .. })
        ));

        let recipe = BuiltinScale::Major.recipe();
        assert_eq!(
            ScaleModel::new(&recipe, "H", 0, 12, &[]),
            Err(TheoryError::InvalidBaseNote("H".to_string()))
        );
        assert_eq!(
            ScaleModel::new(&recipe, "C", 0, 0, &[]),
            Err(TheoryError::InvalidAmbitus(0))
        );
    }

    #[test]
    fn test_window_limits() {
        let recipe = BuiltinScale::Major.recipe();

        let m = ScaleModel::new(&recipe, "A", -57, MAX_AMBITUS, &[]).unwrap();
        assert_eq!(m.positions().len(), 128);
        assert_eq!(m.positions()[0].midi, 12);

        for ambitus in [MAX_AMBITUS + 1, 2_147_483_649, u32::MAX] {
            assert_eq!(
                ScaleModel::new(&recipe, "C", 0, ambitus, &[]),
                Err(TheoryError::InvalidAmbitus(ambitus))
            );
        }

        assert_eq!(
            ScaleModel::new(&recipe, "C", i32::MAX - 10, 5, &[]),
            Err(TheoryError::WindowOutOfRange {
                start_offset: i32::MAX - 10,
                reference_octave: 4,
            })
        );
        let low = ScaleModel::new(&recipe, "C", i32::MIN + 100, 1, &[]).unwrap();
        assert_eq!(
            low.with_reference_octave(-20),
            Err(TheoryError::WindowOutOfRange {
                start_offset: i32::MIN + 100,
                reference_octave: -20,
            })
        );

        // The window at the edge of the range still builds
        let m = ScaleModel::new(&recipe, "C", i32::MAX - 60, 1, &[]).unwrap();
        assert_eq!(m.positions()[0].midi, i32::MAX);

        let m = model("C", BuiltinScale::Major, 0, 12);
        assert!(matches!(
            m.clone().with_reference_octave(i32::MAX),
            Err(TheoryError::WindowOutOfRange { .. })
        ));
        assert!(m.with_reference_octave(-1).is_ok());
    }
}
