//! OpenRW game binary
//!
//! Builds the game configuration from the command line and the INI settings
//! file, then hands the resolved settings to the game.

use anyhow::{Context, Result};
use rwgame::cli::arguments_help_text;
use rwgame::config::GameConfig;
use rwgame::logging::{self, LogTarget};
use std::process::ExitCode;
use tracing::{debug, info};

/// Exit status for an invalid command line.
const EXIT_INVALID_ARGUMENTS: u8 = 2;

/// Build the configuration. Returns `Ok(None)` when only help was requested.
fn create_config() -> Result<Option<GameConfig>, ExitCode> {
    let mut config = GameConfig::new();
    if let Err(e) = config.parse_arguments(std::env::args_os()) {
        eprintln!("{}", e);
        eprintln!("{}", arguments_help_text());
        return Err(ExitCode::from(EXIT_INVALID_ARGUMENTS));
    }

    if config.display_help {
        println!("{}", arguments_help_text());
        return Ok(None);
    }

    match load_config_file(&mut config) {
        Ok(()) => Ok(Some(config)),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:?}", e);
            Err(ExitCode::FAILURE)
        }
    }
}

fn load_config_file(config: &mut GameConfig) -> Result<()> {
    let path = config.config_path.value_or_default().clone();
    debug!(path = %path.display(), "Reading config file");
    config.read_config_file(&path).with_context(|| {
        format!(
            "Invalid INI file at \"{}\".\nAdapt the following default INI to your configuration.\n{}",
            path.display(),
            config.default_ini_string()
        )
    })
}

fn run(config: &GameConfig) -> Result<()> {
    let window = config.window_settings();
    info!(
        width = window.width,
        height = window.height,
        fullscreen = window.fullscreen,
        "Window settings"
    );
    info!(
        data_path = %config.game_data_path.value_or_default().display(),
        language = %config.game_language.value_or_default(),
        invert_y = *config.input_invert_y.value_or_default(),
        "Game settings"
    );

    if let Some(save) = &config.start_save_game.value {
        info!(save = %save.display(), "Starting from save game");
    } else if let Some(benchmark) = &config.start_benchmark.value {
        info!(benchmark = %benchmark.display(), "Starting benchmark");
    } else if config.start_test_game {
        info!("Starting new game in test location");
    } else if config.start_new_game {
        info!("Starting new game");
    }

    let snapshot = serde_json::to_string(&config.snapshot()).context("Failed to serialize config")?;
    debug!(config = %snapshot, "Effective configuration");
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::init(&LogTarget::from_env()) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    let config = match create_config() {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(code) => return code,
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
