//! Game configuration system.
//!
//! Settings come from three layers, highest priority first:
//! 1. **Command line** - options parsed by [`crate::cli`]
//! 2. **INI file** - `config_path`, by default [`crate::paths::default_config_path`]
//! 3. **Defaults** - compiled into [`GameConfig::new`]
//!
//! ## INI keys
//! - `game.path` - game data directory (required)
//! - `game.language` - game language (required)
//! - `input.invert_y` - invert the camera y axis
//! - `window.width` / `window.height` - window size in pixels
//! - `window.fullscreen` - start in fullscreen mode
//!
//! Unknown keys are kept in [`GameConfig::all_config_data`] and written back
//! unchanged.

mod codec;
mod game;
mod ini;
mod loader;
mod types;

pub use codec::{Codec, parse_unsigned_arg, strip_value};
pub use game::{
    ConfigSnapshot, DEFAULT_GAME_DATA_PATH, DEFAULT_LANGUAGE, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, GameConfig, WindowSettings,
};
pub use ini::IniDocument;
pub use types::{Field, FieldMut, FieldRef, FieldSnapshot};
