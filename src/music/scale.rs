// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale recipes and the built-in scale library.
//!
//! A recipe is a list of semitone steps from the root plus a parallel list
//! of degree labels ("1", "b3", "#4", "△7"). The label number also fixes
//! which letter a degree is spelled on, so the labels are validated along
//! with the steps.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// A scale or mode definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleRecipe {
    /// Display name
    pub name: String,
    /// Semitone offsets from the root, strictly increasing, starting at 0
    pub steps: Vec<u8>,
    /// Degree labels, one per step
    pub numbers: Vec<String>,
}

impl ScaleRecipe {
    /// Create a recipe from steps and degree labels
    pub fn new(name: impl Into<String>, steps: Vec<u8>, numbers: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            steps,
            numbers: numbers.into_iter().map(str::to_string).collect(),
        }
    }

    /// Number of scale degrees
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check the recipe invariants and parse its degree labels
    pub fn validate(&self) -> Result<Vec<DegreeLabel>> {
        if self.steps.is_empty() {
            return Err(TheoryError::recipe(&self.name, "steps must not be empty"));
        }
        if self.steps[0] != 0 {
            return Err(TheoryError::recipe(&self.name, "steps must start at 0"));
        }
        if self.steps.len() != self.numbers.len() {
            return Err(TheoryError::recipe(
                &self.name,
                format!(
                    "{} steps but {} degree labels",
                    self.steps.len(),
                    self.numbers.len()
                ),
            ));
        }
        if let Some(pair) = self.steps.windows(2).find(|w| w[1] <= w[0]) {
            return Err(TheoryError::recipe(
                &self.name,
                format!("steps must be strictly increasing ({} then {})", pair[0], pair[1]),
            ));
        }

        let mut seen = [false; 12];
        for &step in &self.steps {
            let pc = (step % 12) as usize;
            if seen[pc] {
                return Err(TheoryError::recipe(
                    &self.name,
                    format!("step {} repeats pitch class {}", step, pc),
                ));
            }
            seen[pc] = true;
        }

        self.numbers
            .iter()
            .map(|label| {
                DegreeLabel::parse(label).ok_or_else(|| {
                    TheoryError::recipe(&self.name, format!("unreadable degree label {:?}", label))
                })
            })
            .collect()
    }

    /// Semitone steps reduced to pitch classes relative to the root
    pub fn pitch_classes(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps.iter().map(|s| s % 12)
    }

    /// Whether the recipe contains an interval (mod 12)
    pub fn contains_interval(&self, semitones: u8) -> bool {
        self.pitch_classes().any(|pc| pc == semitones % 12)
    }
}

impl fmt::Display for ScaleRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A parsed degree label such as `b3`, `#11` or `△7`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeLabel {
    text: String,
    /// Net alteration written in the label (flats negative)
    alteration: i8,
    /// Degree number, 1-based (9, 11, 13 allowed)
    number: u8,
}

impl DegreeLabel {
    /// Parse a label: accidental/marker prefix followed by a degree number
    pub fn parse(label: &str) -> Option<Self> {
        let text = label.trim();
        let digits_at = text.find(|c: char| c.is_ascii_digit())?;
        let (prefix, digits) = text.split_at(digits_at);

        let mut alteration = 0i8;
        for c in prefix.chars() {
            match c {
                'b' | '♭' => alteration -= 1,
                '#' | '♯' => alteration += 1,
                'x' | '×' => alteration += 2,
                '△' | '^' => {}
                _ => return None,
            }
        }

        let number: u8 = digits.parse().ok()?;
        if number == 0 {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            alteration,
            number,
        })
    }

    /// Degree number as written
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn alteration(&self) -> i8 {
        self.alteration
    }

    /// Letters above the root this degree is spelled on
    pub fn letter_steps(&self) -> usize {
        (self.number as usize - 1) % 7
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The label re-expressed as a chord extension: 2 → 9, 4 → 11, 6 → 13
    pub fn extension(&self) -> String {
        let digits_at = self
            .text
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.text.len());
        let prefix = &self.text[..digits_at];
        match self.number {
            2 | 4 | 6 => format!("{}{}", prefix, self.number + 7),
            _ => self.text.clone(),
        }
    }
}

impl fmt::Display for DegreeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Scales shipped with the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinScale {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    Blues,

    // Symmetric scales
    WholeTone,
    Chromatic,
}

impl BuiltinScale {
    pub const ALL: [BuiltinScale; 14] = [
        BuiltinScale::Major,
        BuiltinScale::Dorian,
        BuiltinScale::Phrygian,
        BuiltinScale::Lydian,
        BuiltinScale::Mixolydian,
        BuiltinScale::NaturalMinor,
        BuiltinScale::Locrian,
        BuiltinScale::HarmonicMinor,
        BuiltinScale::MelodicMinor,
        BuiltinScale::MajorPentatonic,
        BuiltinScale::MinorPentatonic,
        BuiltinScale::Blues,
        BuiltinScale::WholeTone,
        BuiltinScale::Chromatic,
    ];

    /// Semitones from root
    pub fn steps(self) -> Vec<u8> {
        match self {
            BuiltinScale::Major => vec![0, 2, 4, 5, 7, 9, 11],
            BuiltinScale::Dorian => vec![0, 2, 3, 5, 7, 9, 10],
            BuiltinScale::Phrygian => vec![0, 1, 3, 5, 7, 8, 10],
            BuiltinScale::Lydian => vec![0, 2, 4, 6, 7, 9, 11],
            BuiltinScale::Mixolydian => vec![0, 2, 4, 5, 7, 9, 10],
            BuiltinScale::NaturalMinor => vec![0, 2, 3, 5, 7, 8, 10],
            BuiltinScale::Locrian => vec![0, 1, 3, 5, 6, 8, 10],

            BuiltinScale::HarmonicMinor => vec![0, 2, 3, 5, 7, 8, 11],
            BuiltinScale::MelodicMinor => vec![0, 2, 3, 5, 7, 9, 11],

            BuiltinScale::MajorPentatonic => vec![0, 2, 4, 7, 9],
            BuiltinScale::MinorPentatonic => vec![0, 3, 5, 7, 10],

            BuiltinScale::Blues => vec![0, 3, 5, 6, 7, 10],

            BuiltinScale::WholeTone => vec![0, 2, 4, 6, 8, 10],
            BuiltinScale::Chromatic => (0..12).collect(),
        }
    }

    /// Degree labels, parallel to [`steps`](Self::steps)
    pub fn numbers(self) -> Vec<&'static str> {
        match self {
            BuiltinScale::Major => vec!["1", "2", "3", "4", "5", "6", "△7"],
            BuiltinScale::Dorian => vec!["1", "2", "b3", "4", "5", "6", "b7"],
            BuiltinScale::Phrygian => vec!["1", "b2", "b3", "4", "5", "b6", "b7"],
            BuiltinScale::Lydian => vec!["1", "2", "3", "#4", "5", "6", "△7"],
            BuiltinScale::Mixolydian => vec!["1", "2", "3", "4", "5", "6", "b7"],
            BuiltinScale::NaturalMinor => vec!["1", "2", "b3", "4", "5", "b6", "b7"],
            BuiltinScale::Locrian => vec!["1", "b2", "b3", "4", "b5", "b6", "b7"],

            BuiltinScale::HarmonicMinor => vec!["1", "2", "b3", "4", "5", "b6", "△7"],
            BuiltinScale::MelodicMinor => vec!["1", "2", "b3", "4", "5", "6", "△7"],

            BuiltinScale::MajorPentatonic => vec!["1", "2", "3", "5", "6"],
            BuiltinScale::MinorPentatonic => vec!["1", "b3", "4", "5", "b7"],

            BuiltinScale::Blues => vec!["1", "b3", "4", "b5", "5", "b7"],

            BuiltinScale::WholeTone => vec!["1", "2", "3", "#4", "#5", "b7"],
            BuiltinScale::Chromatic => vec![
                "1", "b2", "2", "b3", "3", "4", "#4", "5", "b6", "6", "b7", "△7",
            ],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            BuiltinScale::Major => "Major",
            BuiltinScale::Dorian => "Dorian",
            BuiltinScale::Phrygian => "Phrygian",
            BuiltinScale::Lydian => "Lydian",
            BuiltinScale::Mixolydian => "Mixolydian",
            BuiltinScale::NaturalMinor => "Natural Minor",
            BuiltinScale::Locrian => "Locrian",
            BuiltinScale::HarmonicMinor => "Harmonic Minor",
            BuiltinScale::MelodicMinor => "Melodic Minor",
            BuiltinScale::MajorPentatonic => "Major Pentatonic",
            BuiltinScale::MinorPentatonic => "Minor Pentatonic",
            BuiltinScale::Blues => "Blues",
            BuiltinScale::WholeTone => "Whole Tone",
            BuiltinScale::Chromatic => "Chromatic",
        }
    }

    /// Parse scale from string, accepting mode aliases
    pub fn from_name(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "major" | "ionian" => Some(BuiltinScale::Major),
            "dorian" => Some(BuiltinScale::Dorian),
            "phrygian" => Some(BuiltinScale::Phrygian),
            "lydian" => Some(BuiltinScale::Lydian),
            "mixolydian" => Some(BuiltinScale::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(BuiltinScale::NaturalMinor),
            "locrian" => Some(BuiltinScale::Locrian),
            "harmonicminor" => Some(BuiltinScale::HarmonicMinor),
            "melodicminor" => Some(BuiltinScale::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(BuiltinScale::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => {
                Some(BuiltinScale::MinorPentatonic)
            }
            "blues" | "minorblues" => Some(BuiltinScale::Blues),
            "wholetone" => Some(BuiltinScale::WholeTone),
            "chromatic" => Some(BuiltinScale::Chromatic),
            _ => None,
        }
    }

    /// Build the recipe for this scale
    pub fn recipe(self) -> ScaleRecipe {
        ScaleRecipe::new(self.name(), self.steps(), self.numbers())
    }
}

impl fmt::Display for BuiltinScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Built-in scales plus user-registered recipes
#[derive(Debug, Clone, Default)]
pub struct ScaleLibrary {
    custom_scales: HashMap<String, ScaleRecipe>,
}

impl ScaleLibrary {
    /// Create a library with only the built-in scales
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom recipe after validating it.
    ///
    /// A custom recipe shadows a built-in scale of the same name.
    pub fn register(&mut self, recipe: ScaleRecipe) -> Result<()> {
        recipe.validate()?;
        self.custom_scales.insert(normalize(&recipe.name), recipe);
        Ok(())
    }

    /// Look up a recipe by name (custom first, then built-in)
    pub fn get(&self, name: &str) -> Option<ScaleRecipe> {
        if let Some(recipe) = self.custom_scales.get(&normalize(name)) {
            return Some(recipe.clone());
        }
        BuiltinScale::from_name(name).map(BuiltinScale::recipe)
    }

    /// List all available scale names
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .custom_scales
            .values()
            .map(|r| r.name.clone())
            .collect();
        names.extend(BuiltinScale::ALL.iter().map(|s| s.name().to_string()));
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_recipes_are_valid() {
        for scale in BuiltinScale::ALL {
            let recipe = scale.recipe();
            let labels = recipe.validate();
            assert!(labels.is_ok(), "{} failed: {:?}", scale, labels);
            assert_eq!(recipe.steps.len(), recipe.numbers.len());
        }
    }

    #[test]
    fn test_seven_note_modes_use_every_letter() {
        for scale in BuiltinScale::ALL {
            let recipe = scale.recipe();
            if recipe.len() != 7 {
                continue;
            }
            let mut letters: Vec<usize> = recipe
                .validate()
                .unwrap()
                .iter()
                .map(DegreeLabel::letter_steps)
                .collect();
            letters.sort();
            assert_eq!(letters, vec![0, 1, 2, 3, 4, 5, 6], "{}", scale);
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        let recipe = ScaleRecipe::new("Empty", vec![], vec![]);
        assert!(matches!(
            recipe.validate(),
            Err(TheoryError::InvalidScaleRecipe { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_ascending() {
        let recipe = ScaleRecipe::new("Backwards", vec![0, 4, 2], vec!["1", "3", "2"]);
        assert!(matches!(
            recipe.validate(),
            Err(TheoryError::InvalidScaleRecipe { .. })
        ));

        let recipe = ScaleRecipe::new("Repeat", vec![0, 2, 2], vec!["1", "2", "2"]);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_start_and_lengths() {
        let recipe = ScaleRecipe::new("Offset", vec![1, 3], vec!["1", "2"]);
        assert!(recipe.validate().is_err());

        let recipe = ScaleRecipe::new("Short", vec![0, 2, 4], vec!["1", "2"]);
        assert!(recipe.validate().is_err());

        let recipe = ScaleRecipe::new("Label", vec![0, 2], vec!["1", "two"]);
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_pitch_class() {
        // 14 is the same pitch class as 2
        let recipe = ScaleRecipe::new("Wide", vec![0, 2, 14], vec!["1", "2", "9"]);
        assert!(recipe.validate().is_err());

        let recipe = ScaleRecipe::new("Wide", vec![0, 4, 14], vec!["1", "3", "9"]);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_degree_label_parse() {
        let label = DegreeLabel::parse("b3").unwrap();
        assert_eq!(label.number(), 3);
        assert_eq!(label.alteration(), -1);
        assert_eq!(label.letter_steps(), 2);

        let label = DegreeLabel::parse("△7").unwrap();
        assert_eq!(label.number(), 7);
        assert_eq!(label.alteration(), 0);

        let label = DegreeLabel::parse("#11").unwrap();
        assert_eq!(label.alteration(), 1);
        assert_eq!(label.letter_steps(), 3);

        assert!(DegreeLabel::parse("0").is_none());
        assert!(DegreeLabel::parse("b").is_none());
        assert!(DegreeLabel::parse("q3").is_none());
    }

    #[test]
    fn test_degree_label_extension() {
        let ext = |s: &str| DegreeLabel::parse(s).unwrap().extension();
        assert_eq!(ext("1"), "1");
        assert_eq!(ext("2"), "9");
        assert_eq!(ext("b2"), "b9");
        assert_eq!(ext("b3"), "b3");
        assert_eq!(ext("#4"), "#11");
        assert_eq!(ext("b5"), "b5");
        assert_eq!(ext("6"), "13");
        assert_eq!(ext("b6"), "b13");
        assert_eq!(ext("△7"), "△7");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BuiltinScale::from_name("major"), Some(BuiltinScale::Major));
        assert_eq!(BuiltinScale::from_name("Ionian"), Some(BuiltinScale::Major));
        assert_eq!(
            BuiltinScale::from_name("Natural Minor"),
            Some(BuiltinScale::NaturalMinor)
        );
        assert_eq!(
            BuiltinScale::from_name("harmonic_minor"),
            Some(BuiltinScale::HarmonicMinor)
        );
        assert_eq!(BuiltinScale::from_name("unknown"), None);
    }

    #[test]
    fn test_library_custom_shadows_builtin() {
        let mut library = ScaleLibrary::new();
        library
            .register(ScaleRecipe::new(
                "Super Locrian",
                vec![0, 1, 3, 4, 6, 8, 10],
                vec!["1", "b2", "b3", "b4", "b5", "b6", "b7"],
            ))
            .unwrap();

        let custom = library.get("super_locrian").unwrap();
        assert_eq!(custom.len(), 7);
        assert!(library.get("major").is_some());
        assert!(library.get("nonexistent").is_none());

        library
            .register(ScaleRecipe::new("Major", vec![0, 4, 7], vec!["1", "3", "5"]))
            .unwrap();
        assert_eq!(library.get("major").unwrap().len(), 3);

        let names = library.available_scales();
        assert!(names.contains(&"Super Locrian".to_string()));
        assert_eq!(names.iter().filter(|n| *n == "Major").count(), 1);
    }

    #[test]
    fn test_library_rejects_invalid() {
        let mut library = ScaleLibrary::new();
        let result = library.register(ScaleRecipe::new("Bad", vec![3], vec!["1"]));
        assert!(result.is_err());
        assert!(library.get("bad").is_none());
    }
}
