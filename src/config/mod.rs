// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for keyspell.
//!
//! A keyboard file names the scale, root, window and notations to show,
//! and may define extra scales and named colour palettes. Files are YAML or
//! TOML, picked by extension.

pub mod watcher;

pub use watcher::{validate_config, ConfigEvent, ConfigWatcher};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::keyboard::LayoutRequest;
use crate::music::model::DEFAULT_REFERENCE_OCTAVE;
use crate::music::scale::{ScaleLibrary, ScaleRecipe};

/// Root of a keyboard configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeyboardFile {
    /// What the keyboard shows
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Extra scale recipes; these shadow built-ins of the same name
    #[serde(default)]
    pub scales: Vec<ScaleRecipe>,
    /// Named colour palettes
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,
}

impl KeyboardFile {
    /// Load a configuration file, YAML or TOML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        };
        parsed.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Scale library with this file's scales registered
    pub fn library(&self) -> Result<ScaleLibrary> {
        let mut library = ScaleLibrary::new();
        for recipe in &self.scales {
            library
                .register(recipe.clone())
                .with_context(|| format!("Invalid scale '{}'", recipe.name))?;
        }
        Ok(library)
    }

    /// Resolve scale and palette names into a layout request
    pub fn to_request(&self) -> Result<LayoutRequest> {
        let library = self.library()?;
        let config = &self.keyboard;

        let scale_recipe = library
            .get(&config.scale)
            .ok_or_else(|| anyhow!("Unknown scale '{}'", config.scale))?;

        let color_palette = match &config.palette {
            Some(name) => self
                .palettes
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow!("Unknown palette '{}'", name))?,
            None => Vec::new(),
        };

        Ok(LayoutRequest {
            scale_recipe,
            base_note: config.root.clone(),
            scale_start_offset: config.start_offset,
            ambitus: config.ambitus,
            notation_list: config.notations.clone(),
            color_palette,
            reference_octave: config.reference_octave,
        })
    }
}

/// Keyboard display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Scale name (e.g., "major", "dorian", or a custom scale)
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Root note (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: String,
    /// First key, in semitones above the root
    #[serde(default)]
    pub start_offset: i32,
    /// Number of keys
    #[serde(default = "default_ambitus")]
    pub ambitus: u32,
    /// Notation ids to label keys with
    #[serde(default = "default_notations")]
    pub notations: Vec<String>,
    /// Palette name from `palettes`
    #[serde(default)]
    pub palette: Option<String>,
    /// Octave the root is placed in
    #[serde(default = "default_reference_octave")]
    pub reference_octave: i32,
}

fn default_scale() -> String {
    "major".to_string()
}
fn default_root() -> String {
    "C".to_string()
}
fn default_ambitus() -> u32 {
    13
}
fn default_notations() -> Vec<String> {
    vec!["English".to_string()]
}
fn default_reference_octave() -> i32 {
    DEFAULT_REFERENCE_OCTAVE
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            root: default_root(),
            start_offset: 0,
            ambitus: default_ambitus(),
            notations: default_notations(),
            palette: None,
            reference_octave: default_reference_octave(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;

    #[test]
    fn test_parse_keyboard_config() {
        let yaml = r#"
keyboard:
  scale: "lydian"
  root: "G#"
  ambitus: 24
  notations: ["English", "Romance"]
"#;

        let config = KeyboardFile::from_yaml(yaml).unwrap();
        assert_eq!(config.keyboard.scale, "lydian");
        assert_eq!(config.keyboard.root, "G#");
        assert_eq!(config.keyboard.ambitus, 24);
        assert_eq!(config.keyboard.notations.len(), 2);

        let keys = config.to_request().unwrap().build().unwrap();
        assert_eq!(keys.len(), 24);
        let romance: Vec<&str> = keys
            .iter()
            .take(12)
            .filter_map(|k| k.name(Notation::Romance))
            .collect();
        assert_eq!(romance, ["Sol#", "La#", "Si#", "Do##", "Re#", "Mi#", "Fa##"]);
    }

    #[test]
    fn test_default_values() {
        let config = KeyboardFile::from_yaml("keyboard: {}").unwrap();
        assert_eq!(config.keyboard, KeyboardConfig::default());
        assert_eq!(config.keyboard.scale, "major");
        assert_eq!(config.keyboard.root, "C");
        assert_eq!(config.keyboard.ambitus, 13);
        assert_eq!(config.keyboard.reference_octave, 4);
        assert!(config.scales.is_empty());
    }

    #[test]
    fn test_custom_scale_and_palette() {
        let yaml = r#"
keyboard:
  scale: "Phrygian Dominant"
  root: "E"
  notations: ["English", "Colors"]
  palette: rainbow

scales:
  - name: "Phrygian Dominant"
    steps: [0, 1, 4, 5, 7, 8, 10]
    numbers: ["1", "b2", "3", "4", "5", "b6", "b7"]

palettes:
  rainbow: ["red", "orange", "yellow", "green", "blue", "indigo", "violet"]
"#;

        let config = KeyboardFile::from_yaml(yaml).unwrap();
        let request = config.to_request().unwrap();
        assert_eq!(request.scale_recipe.name, "Phrygian Dominant");
        assert_eq!(request.color_palette.len(), 7);

        let keys = request.build().unwrap();
        let english: Vec<&str> = keys
            .iter()
            .filter_map(|k| k.name(Notation::English))
            .collect();
        assert_eq!(english, ["E", "F", "G#", "A", "B", "C", "D", "E"]);
        assert_eq!(keys[0].color.as_deref(), Some("red"));
        assert_eq!(keys[1].color.as_deref(), Some("orange"));
    }

    #[test]
    fn test_toml_config() {
        let text = r#"
[keyboard]
scale = "harmonic minor"
root = "D"
notations = ["Relative"]
"#;

        let config = KeyboardFile::from_toml(text).unwrap();
        assert_eq!(config.keyboard.scale, "harmonic minor");
        let request = config.to_request().unwrap();
        assert_eq!(request.scale_recipe.name, "Harmonic Minor");
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let config = KeyboardFile::from_yaml("keyboard: { scale: \"zither\" }").unwrap();
        assert!(config.to_request().is_err());

        let config = KeyboardFile::from_yaml("keyboard: { palette: \"missing\" }").unwrap();
        assert!(config.to_request().is_err());

        let yaml = r#"
scales:
  - name: "Broken"
    steps: [0, 5, 3]
    numbers: ["1", "4", "b3"]
"#;
        let config = KeyboardFile::from_yaml(yaml).unwrap();
        assert!(config.library().is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut original = KeyboardFile::default();
        original.keyboard.root = "Eb".to_string();
        original.keyboard.scale = "dorian".to_string();
        original
            .palettes
            .insert("mono".to_string(), vec!["black".to_string()]);

        let yaml = original.to_yaml().unwrap();
        let parsed = KeyboardFile::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }
}
