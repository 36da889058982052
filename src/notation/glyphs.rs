// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Display glyphs for accidentals.
//!
//! Names are computed in ASCII (`Sibb`, `Fa##`, `b3`) and only converted to
//! Unicode for display. Matching is anchored: note names carry accidentals
//! after the first character, degree labels carry them before the first
//! digit. The letter or syllable itself is never rewritten, so German `B`
//! stays `B` and English `Bbb` becomes `B𝄫`, not `𝄫b`.

/// Convert the ASCII accidentals of a name or degree label to glyphs
pub fn render(text: &str) -> String {
    let starts_with_accidental = text.starts_with(['b', '#']);
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    if starts_with_accidental && has_digit {
        render_prefix(text)
    } else {
        render_suffix(text)
    }
}

fn glyph(accidental: &str) -> Option<&'static str> {
    match accidental {
        "bb" => Some("𝄫"),
        "b" => Some("♭"),
        "##" => Some("×"),
        "#" => Some("#"),
        _ => None,
    }
}

fn is_accidental(c: char) -> bool {
    c == 'b' || c == '#'
}

/// `b3` → `♭3`, `#11` → `#11`
fn render_prefix(text: &str) -> String {
    let split = text.find(|c: char| !is_accidental(c)).unwrap_or(text.len());
    let (accidental, rest) = text.split_at(split);
    match glyph(accidental) {
        Some(g) => format!("{}{}", g, rest),
        None => text.to_string(),
    }
}

/// `Sibb` → `Si𝄫`, `Fa##` → `Fa×`, `Bb` → `B♭`
fn render_suffix(text: &str) -> String {
    let mut chars = text.char_indices();
    let head_end = match chars.nth(1) {
        Some((i, _)) => i,
        None => return text.to_string(),
    };
    let body = &text[head_end..];
    let run_start = body
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_accidental(c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    let (stem, accidental) = body.split_at(run_start);
    if accidental.is_empty() {
        return text.to_string();
    }
    match glyph(accidental) {
        Some(g) => format!("{}{}{}", &text[..head_end], stem, g),
        None => text.to_string(),
    }
}
