//! The game settings aggregate.

use super::types::{Field, FieldMut, FieldRef, FieldSnapshot};
use crate::paths::default_config_path;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_GAME_DATA_PATH: &str = "/path/to/gta3";
pub const DEFAULT_LANGUAGE: &str = "american";
pub const DEFAULT_WINDOW_WIDTH: u64 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u64 = 600;

/// Game configuration merged from the command line, the INI file and defaults.
///
/// Built once per run. The argument parser runs first; reading the INI file
/// afterwards only fills fields that are still unset.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Path to the game data.
    pub game_data_path: Field<PathBuf>,
    pub game_language: Field<String>,
    /// Invert the y axis for camera control.
    pub input_invert_y: Field<bool>,
    pub window_width: Field<u64>,
    pub window_height: Field<u64>,
    pub window_fullscreen: Field<bool>,

    pub start_new_game: bool,
    /// Save game to load on start.
    pub start_save_game: Field<PathBuf>,
    pub start_test_game: bool,
    /// Benchmark file to run on start.
    pub start_benchmark: Field<PathBuf>,

    /// Location of the INI file.
    pub config_path: Field<PathBuf>,

    pub display_help: bool,

    /// Every `section.key` seen in the INI file, known or not, with its
    /// stripped value.
    pub all_config_data: BTreeMap<String, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Window parameters resolved for the window bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSettings {
    pub width: u64,
    pub height: u64,
    pub fullscreen: bool,
}

/// Reflection view of the whole aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    pub fields: Vec<FieldSnapshot>,
    pub start_new_game: bool,
    pub start_test_game: bool,
    pub display_help: bool,
    pub all_config_data: BTreeMap<String, String>,
}

impl GameConfig {
    /// Create a configuration with every field unset.
    pub fn new() -> Self {
        Self {
            game_data_path: Field::required("game.path", PathBuf::from(DEFAULT_GAME_DATA_PATH)),
            game_language: Field::required("game.language", DEFAULT_LANGUAGE.to_string()),
            input_invert_y: Field::new("input.invert_y", false),
            window_width: Field::new("window.width", DEFAULT_WINDOW_WIDTH),
            window_height: Field::new("window.height", DEFAULT_WINDOW_HEIGHT),
            window_fullscreen: Field::new("window.fullscreen", false),
            start_new_game: false,
            start_save_game: Field::new("", PathBuf::new()),
            start_test_game: false,
            start_benchmark: Field::new("", PathBuf::new()),
            config_path: Field::new("", default_config_path()),
            display_help: false,
            all_config_data: BTreeMap::new(),
        }
    }

    /// The fields backed by the INI file, in file order.
    pub fn file_fields(&self) -> [FieldRef<'_>; 6] {
        [
            FieldRef::Path(&self.game_data_path),
            FieldRef::Text(&self.game_language),
            FieldRef::Bool(&self.input_invert_y),
            FieldRef::Unsigned(&self.window_width),
            FieldRef::Unsigned(&self.window_height),
            FieldRef::Bool(&self.window_fullscreen),
        ]
    }

    pub fn file_fields_mut(&mut self) -> [FieldMut<'_>; 6] {
        [
            FieldMut::Path(&mut self.game_data_path),
            FieldMut::Text(&mut self.game_language),
            FieldMut::Bool(&mut self.input_invert_y),
            FieldMut::Unsigned(&mut self.window_width),
            FieldMut::Unsigned(&mut self.window_height),
            FieldMut::Bool(&mut self.window_fullscreen),
        ]
    }

    pub fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            width: *self.window_width.value_or_default(),
            height: *self.window_height.value_or_default(),
            fullscreen: *self.window_fullscreen.value_or_default(),
        }
    }

    /// Describe every field, including the command-line-only ones.
    pub fn snapshot(&self) -> ConfigSnapshot {
        let names = [
            "game_data_path",
            "game_language",
            "input_invert_y",
            "window_width",
            "window_height",
            "window_fullscreen",
        ];
        let mut fields: Vec<FieldSnapshot> = names
            .into_iter()
            .zip(self.file_fields())
            .map(|(name, field)| field.describe(name))
            .collect();
        fields.push(FieldRef::Path(&self.start_save_game).describe("start_savegame"));
        fields.push(FieldRef::Path(&self.start_benchmark).describe("start_benchmark"));
        fields.push(FieldRef::Path(&self.config_path).describe("config_path"));

        ConfigSnapshot {
            fields,
            start_new_game: self.start_new_game,
            start_test_game: self.start_test_game,
            display_help: self.display_help,
            all_config_data: self.all_config_data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_config_is_unset() {
        let config = GameConfig::new();
        assert!(config.file_fields().iter().all(|f| !f.has_value()));
        assert!(!config.config_path.has_value());
        assert!(!config.display_help);
        assert!(config.all_config_data.is_empty());
    }

    #[test]
    fn test_schema_keys_and_required() {
        let config = GameConfig::new();
        let schema: Vec<(&str, bool)> = config
            .file_fields()
            .iter()
            .map(|f| (f.key(), f.is_required()))
            .collect();
        assert_eq!(
            schema,
            vec![
                ("game.path", true),
                ("game.language", true),
                ("input.invert_y", false),
                ("window.width", false),
                ("window.height", false),
                ("window.fullscreen", false),
            ]
        );
    }

    #[test]
    fn test_window_settings_fall_back_to_defaults() {
        let mut config = GameConfig::new();
        assert_eq!(
            config.window_settings(),
            WindowSettings {
                width: 800,
                height: 600,
                fullscreen: false
            }
        );

        config.window_width.value = Some(1920);
        config.window_fullscreen.value = Some(true);
        let window = config.window_settings();
        assert_eq!(window.width, 1920);
        assert_eq!(window.height, 600);
        assert!(window.fullscreen);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut config = GameConfig::new();
        config.game_language.value = Some("french".to_string());
        let snapshot = config.snapshot();
        assert_eq!(snapshot.fields.len(), 9);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["fields"][1]["key"], "game.language");
        assert_eq!(json["fields"][1]["value"], "french");
        assert_eq!(json["fields"][1]["default"], "american");
        assert!(json["fields"][0].get("value").is_none());
    }
}
