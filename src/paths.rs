//! Default location of the settings file.
//!
//! - Linux / BSD: `$XDG_CONFIG_HOME/OpenRW/openrw.ini`, else `$HOME/.config/OpenRW/openrw.ini`
//! - macOS: `$HOME/Library/Preferences/OpenRW/openrw.ini`
//! - Windows: `%APPDATA%\OpenRW\openrw.ini`

use std::ffi::OsString;
use std::path::PathBuf;
use tracing::error;

pub const CONFIG_DIRECTORY_NAME: &str = "OpenRW";
pub const CONFIG_FILE_NAME: &str = "openrw.ini";

/// Platform families with their own config directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// Linux and the BSDs.
    Unix,
    MacOs,
    Windows,
    /// No known convention.
    Unsupported,
}

impl PlatformFamily {
    /// The family this binary was built for.
    pub fn current() -> Self {
        if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd"
        )) {
            PlatformFamily::Unix
        } else if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else if cfg!(windows) {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Unsupported
        }
    }
}

/// Resolve the settings file path for `platform`, reading environment
/// variables through `env`. Empty variables count as unset.
///
/// Returns `None` when the platform has no convention or the variables it
/// needs are missing.
pub fn resolve_config_path<F>(platform: PlatformFamily, env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |name: &str| env(name).filter(|v| !v.is_empty()).map(PathBuf::from);

    let root = match platform {
        PlatformFamily::Unix => var("XDG_CONFIG_HOME").or_else(|| var("HOME").map(|h| h.join(".config"))),
        PlatformFamily::MacOs => var("HOME").map(|h| h.join("Library").join("Preferences")),
        PlatformFamily::Windows => var("APPDATA").or_else(dirs::config_dir),
        PlatformFamily::Unsupported => None,
    }?;

    Some(root.join(CONFIG_DIRECTORY_NAME).join(CONFIG_FILE_NAME))
}

/// The settings file path for the running platform.
///
/// Failing to find one is a build or environment defect: it is logged and a
/// bare file name in the working directory is returned.
pub fn default_config_path() -> PathBuf {
    let platform = PlatformFamily::current();
    match resolve_config_path(platform, |name| std::env::var_os(name)) {
        Some(path) => path,
        None => {
            error!(?platform, "No default config path found.");
            debug_assert!(
                platform != PlatformFamily::Unsupported,
                "no config path convention for this platform"
            );
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_unix_prefers_xdg_config_home() {
        let env = env_of(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/player")]);
        assert_eq!(
            resolve_config_path(PlatformFamily::Unix, env),
            Some(PathBuf::from("/xdg/OpenRW/openrw.ini"))
        );
    }

    #[test]
    fn test_unix_falls_back_to_home() {
        let env = env_of(&[("HOME", "/home/player")]);
        assert_eq!(
            resolve_config_path(PlatformFamily::Unix, env),
            Some(PathBuf::from("/home/player/.config/OpenRW/openrw.ini"))
        );

        let env = env_of(&[("XDG_CONFIG_HOME", ""), ("HOME", "/home/player")]);
        assert_eq!(
            resolve_config_path(PlatformFamily::Unix, env),
            Some(PathBuf::from("/home/player/.config/OpenRW/openrw.ini"))
        );
    }

    #[test]
    fn test_unix_without_environment() {
        assert_eq!(resolve_config_path(PlatformFamily::Unix, env_of(&[])), None);
    }

    #[test]
    fn test_macos_uses_preferences() {
        let env = env_of(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/Users/player")]);
        assert_eq!(
            resolve_config_path(PlatformFamily::MacOs, env),
            Some(PathBuf::from("/Users/player/Library/Preferences/OpenRW/openrw.ini"))
        );
    }

    #[test]
    fn test_windows_uses_appdata() {
        let env = env_of(&[("APPDATA", "/appdata")]);
        assert_eq!(
            resolve_config_path(PlatformFamily::Windows, env),
            Some(PathBuf::from("/appdata/OpenRW/openrw.ini"))
        );
    }

    #[test]
    fn test_unsupported_platform_has_no_path() {
        let env = env_of(&[("HOME", "/home/player")]);
        assert_eq!(resolve_config_path(PlatformFamily::Unsupported, env), None);
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        let path = default_config_path();
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }
}
