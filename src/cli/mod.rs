//! Command-line grammar for the game binary.
//!
//! The grammar is independent of the INI schema. Recognized options write
//! straight into the matching [`GameConfig`] fields, which is what gives the
//! command line priority over the settings file.

use crate::config::{GameConfig, parse_unsigned_arg};
use crate::error::ConfigResult;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// OpenRW game
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "rwgame", about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Path of configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path of game data
    #[arg(short, long, value_name = "PATH")]
    pub gamedata: Option<PathBuf>,

    /// Language
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Show this help message
    #[arg(long)]
    pub help: bool,

    /// Game resolution width in pixel
    #[arg(short, long, value_name = "WIDTH", value_parser = parse_unsigned_arg, help_heading = "Window options")]
    pub width: Option<u64>,

    /// Game resolution height in pixel
    #[arg(short = 'h', long, value_name = "HEIGHT", value_parser = parse_unsigned_arg, help_heading = "Window options")]
    pub height: Option<u64>,

    /// Enable fullscreen mode
    #[arg(short, long, help_heading = "Window options")]
    pub fullscreen: bool,

    /// Start a new game
    #[arg(short, long, help_heading = "Game options")]
    pub newgame: bool,

    /// Load save file
    #[arg(short, long, value_name = "PATH", help_heading = "Game options")]
    pub load: Option<PathBuf>,

    /// Starts a new game in a test location
    #[arg(short, long, help_heading = "Developer options")]
    pub test: bool,

    /// Run benchmark from file
    #[arg(short, long, value_name = "PATH", help_heading = "Developer options")]
    pub benchmark: Option<PathBuf>,
}

impl Cli {
    /// Copy the parsed options into `config`.
    pub fn apply(self, config: &mut GameConfig) {
        config.display_help = self.help;

        if let Some(width) = self.width {
            config.window_width.value = Some(width);
        }
        if let Some(height) = self.height {
            config.window_height.value = Some(height);
        }
        if self.fullscreen {
            config.window_fullscreen.value = Some(true);
        }

        config.start_new_game = self.newgame;
        if let Some(save) = self.load {
            config.start_save_game.value = Some(save);
        }
        config.start_test_game = self.test;
        if let Some(benchmark) = self.benchmark {
            config.start_benchmark.value = Some(benchmark);
        }

        if let Some(path) = self.config {
            config.config_path.value = Some(path);
        }
        if let Some(path) = self.gamedata {
            config.game_data_path.value = Some(path);
        }
        if let Some(language) = self.language {
            config.game_language.value = Some(language);
        }
    }
}

/// Full help text: every option, its value placeholder and description.
pub fn arguments_help_text() -> String {
    Cli::command().render_help().to_string()
}

impl GameConfig {
    /// Parse a command line (program name first) into this configuration.
    ///
    /// Unknown options, missing option values and positional arguments are
    /// rejected. On error no field is modified.
    pub fn parse_arguments<I, T>(&mut self, args: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        debug!(?cli, "Parsed command line");
        cli.apply(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_empty_command_line() {
        let cli = Cli::try_parse_from(["rwgame"]).unwrap();
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_short_and_long_forms_match() {
        let short = Cli::try_parse_from([
            "rwgame", "-w", "1024", "-h", "768", "-f", "-n", "-l", "save.sav", "-t", "-b",
            "bench.txt", "-c", "my.ini", "-g", "/data",
        ])
        .unwrap();
        let long = Cli::try_parse_from([
            "rwgame",
            "--width",
            "1024",
            "--height",
            "768",
            "--fullscreen",
            "--newgame",
            "--load",
            "save.sav",
            "--test",
            "--benchmark",
            "bench.txt",
            "--config",
            "my.ini",
            "--gamedata",
            "/data",
        ])
        .unwrap();
        assert_eq!(short, long);
        assert_eq!(short.width, Some(1024));
        assert_eq!(short.height, Some(768));
    }

    #[test]
    fn test_width_accepts_hex() {
        let cli = Cli::try_parse_from(["rwgame", "--width", "0x780"]).unwrap();
        assert_eq!(cli.width, Some(1920));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let mut config = GameConfig::new();
        let err = config.parse_arguments(["rwgame", "--width"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arguments);
        assert!(!config.window_width.has_value());
    }

    #[test]
    fn test_help_text_lists_all_options() {
        let help = arguments_help_text();
        for needle in [
            "--config <PATH>",
            "--gamedata <PATH>",
            "--language <LANG>",
            "--help",
            "--width <WIDTH>",
            "--height <HEIGHT>",
            "--fullscreen",
            "--newgame",
            "--load <PATH>",
            "--test",
            "--benchmark <PATH>",
            "Window options",
            "Game options",
            "Developer options",
            "Game resolution width in pixel",
        ] {
            assert!(help.contains(needle), "help text is missing {needle:?}:\n{help}");
        }
    }
}
