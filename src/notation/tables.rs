// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Per-language note name tables.

use crate::music::note::{Accidental, Letter, SpelledNote};
use crate::music::spelling::{chromatic_table, TablePreference};

/// Languages that spell absolute note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    Romance,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::German, Language::Romance];

    /// Name of a natural letter in this language
    pub fn letter_name(self, letter: Letter) -> &'static str {
        match self {
            Language::English => ENGLISH_LETTERS[letter.index()],
            Language::German => GERMAN_LETTERS[letter.index()],
            Language::Romance => ROMANCE_LETTERS[letter.index()],
        }
    }

    /// Render a spelled note, e.g. `Fa##` or `Hbb`
    pub fn render(self, note: SpelledNote) -> String {
        // German B is the flattened H
        if self == Language::German
            && note.letter == Letter::B
            && note.accidental == Accidental::Flat
        {
            return "B".to_string();
        }
        format!(
            "{}{}",
            self.letter_name(note.letter),
            note.accidental.suffix()
        )
    }
}

const ENGLISH_LETTERS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];
const GERMAN_LETTERS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "H"];
const ROMANCE_LETTERS: [&str; 7] = ["Do", "Re", "Mi", "Fa", "Sol", "La", "Si"];

/// Chromatic name table for a language and preference, indexed by pitch class.
///
/// Built from the English spelling table, so every language names a key the
/// same way the layout does.
pub fn chromatic_names(language: Language, preference: TablePreference) -> [String; 12] {
    let notes = chromatic_table(preference);
    std::array::from_fn(|pc| language.render(notes[pc]))
}
