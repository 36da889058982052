// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled note names.
//!
//! A pitch class alone cannot tell `C#` from `Db`. Everything in this crate
//! that produces a name therefore works with a [`SpelledNote`]: one of the
//! seven letters plus an explicit accidental. English spelling is the
//! canonical text form (`"C#"`, `"Bbb"`, `"F##"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// MIDI-like note number. Not clamped to 0-127 so that wide windows never fail.
pub type MidiNote = i32;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order starting at C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position of the letter within the octave (C = 0, B = 6)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the natural note
    pub fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The letter `steps` letters above this one, wrapping after B
    pub fn offset(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % 7]
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        };
        f.write_str(c)
    }
}

/// Accidentals from double flat to double sharp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone alteration applied to the natural letter
    pub fn semitones(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for an alteration, if one exists
    pub fn from_semitones(semitones: i8) -> Option<Self> {
        match semitones {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// ASCII suffix used in every notation language
    pub fn suffix(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Parse an accidental suffix, accepting ASCII and Unicode glyphs
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "♯♯" | "x" | "×" | "𝄪" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "♭♭" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }

    pub fn is_flat(self) -> bool {
        self.semitones() < 0
    }

    pub fn is_sharp(self) -> bool {
        self.semitones() > 0
    }
}

/// A letter with an explicit accidental, e.g. `F##` or `Bbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpelledNote {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl SpelledNote {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Natural note on a letter
    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Spell a pitch class on a fixed letter.
    ///
    /// Fails with [`TheoryError::UnresolvableSpelling`] when reaching the
    /// pitch class would need more than two accidentals.
    pub fn spell(letter: Letter, pitch_class: u8) -> Result<Self> {
        let natural = letter.natural_pitch_class() as i16;
        let target = (pitch_class % 12) as i16;
        // Shortest signed distance, in -6..=5
        let diff = (target - natural + 6).rem_euclid(12) - 6;
        Accidental::from_semitones(diff as i8)
            .map(|accidental| Self::new(letter, accidental))
            .ok_or(TheoryError::UnresolvableSpelling {
                letter,
                pitch_class: pitch_class % 12,
            })
    }

    /// Pitch class (0-11) sounded by this spelling
    pub fn pitch_class(self) -> u8 {
        (self.letter.natural_pitch_class() as i16 + self.accidental.semitones() as i16)
            .rem_euclid(12) as u8
    }

    /// MIDI number of this spelling in a letter-based octave (C4 = 60).
    ///
    /// The octave belongs to the letter, so `Cb4` is 59 and `B#3` is 60.
    pub fn midi_in_octave(self, octave: i32) -> MidiNote {
        (octave + 1) * 12
            + self.letter.natural_pitch_class() as i32
            + self.accidental.semitones() as i32
    }

    /// Letter-based octave of a MIDI number spelled with this note
    pub fn octave_of(self, midi: MidiNote) -> i32 {
        let natural = i64::from(midi) - i64::from(self.accidental.semitones());
        (natural.div_euclid(12) - 1) as i32
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.suffix())
    }
}

impl FromStr for SpelledNote {
    type Err = TheoryError;

    /// Parse an English note name such as `"C"`, `"F#"`, `"Bb"` or `"C##"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidBaseNote(s.to_string()))?;
        let accidental = Accidental::from_suffix(chars.as_str())
            .ok_or_else(|| TheoryError::InvalidBaseNote(s.to_string()))?;
        Ok(Self::new(letter, accidental))
    }
}
