// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Movable-do solfège.
//!
//! Syllables depend only on the interval above the tonic. Chromatic
//! offsets always take the lowered syllable (Ra, Me, Se, Le, Te), so a
//! Lydian fourth is `Se`, not `Fi`.

const SYLLABLES: [&str; 12] = [
    "Do", "Ra", "Re", "Me", "Mi", "Fa", "Se", "So", "Le", "La", "Te", "Ti",
];

/// Syllable for a semitone offset above the tonic (any integer, reduced mod 12)
pub fn syllable(offset: i32) -> &'static str {
    SYLLABLES[offset.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::BuiltinScale;

    fn mode_syllables(scale: BuiltinScale) -> Vec<&'static str> {
        scale
            .recipe()
            .steps
            .iter()
            .map(|&step| syllable(step as i32))
            .collect()
    }

    #[test]
    fn test_total_over_octave() {
        for offset in 0..12 {
            assert!(!syllable(offset).is_empty());
        }
        assert_eq!(syllable(12), "Do");
        assert_eq!(syllable(-1), "Ti");
        assert_eq!(syllable(19), "So");
    }

    #[test]
    fn test_major() {
        assert_eq!(
            mode_syllables(BuiltinScale::Major),
            ["Do", "Re", "Mi", "Fa", "So", "La", "Ti"]
        );
    }

    #[test]
    fn test_natural_minor() {
        assert_eq!(
            mode_syllables(BuiltinScale::NaturalMinor),
            ["Do", "Re", "Me", "Fa", "So", "Le", "Te"]
        );
    }

    #[test]
    fn test_harmonic_minor() {
        let syllables = mode_syllables(BuiltinScale::HarmonicMinor);
        assert!(syllables.contains(&"Le"));
        assert!(syllables.contains(&"Ti"));
        assert!(!syllables.contains(&"Te"));
    }

    #[test]
    fn test_phrygian_and_locrian() {
        assert_eq!(
            mode_syllables(BuiltinScale::Phrygian),
            ["Do", "Ra", "Me", "Fa", "So", "Le", "Te"]
        );
        assert_eq!(
            mode_syllables(BuiltinScale::Locrian),
            ["Do", "Ra", "Me", "Fa", "Se", "Le", "Te"]
        );
    }

    #[test]
    fn test_sharp_labels_keep_lowered_syllables() {
        // Only the offset matters, not the `#4` / `#5` labels
        assert_eq!(
            mode_syllables(BuiltinScale::Lydian),
            ["Do", "Re", "Mi", "Se", "So", "La", "Ti"]
        );
        assert_eq!(
            mode_syllables(BuiltinScale::WholeTone),
            ["Do", "Re", "Mi", "Se", "Le", "Te"]
        );
    }
}
