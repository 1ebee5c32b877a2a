// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The settings file that backs the persistent locale preference lives in the
//! application config directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`LOCALE_BOOTSTRAP_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use crate::config::defaults::APP_NAME;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_BOOTSTRAP_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call takes effect. Returns `false` if an override was
/// already recorded.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    record_override(&CLI_CONFIG_DIR, config_dir)
}

fn record_override(cell: &OnceLock<Option<PathBuf>>, config_dir: Option<String>) -> bool {
    let accepted = cell.set(config_dir.map(PathBuf::from)).is_ok();
    if !accepted {
        log::debug!("config dir override already initialized, ignoring");
    }
    accepted
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/LocaleBootstrap/`
/// - macOS: `~/Library/Application Support/LocaleBootstrap/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LocaleBootstrap\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(override_path, &CLI_CONFIG_DIR)
}

fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli_override: &OnceLock<Option<PathBuf>>,
) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = cli_override.get().and_then(Clone::clone) {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes tests that touch `LOCALE_BOOTSTRAP_CONFIG_DIR`.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn cli_override_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let cli = OnceLock::new();
        assert!(record_override(&cli, Some("/cli/path".to_string())));
        let result = resolve_config_dir(None, &cli);
        assert_eq!(result, Some(PathBuf::from("/cli/path")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn explicit_override_beats_cli_override() {
        let cli = OnceLock::new();
        record_override(&cli, Some("/cli/path".to_string()));

        let result = resolve_config_dir(Some(PathBuf::from("/override/path")), &cli);
        assert_eq!(result, Some(PathBuf::from("/override/path")));
    }

    #[test]
    fn first_cli_override_wins() {
        let cli = OnceLock::new();
        assert!(record_override(&cli, Some("/first".to_string())));
        assert!(!record_override(&cli, Some("/second".to_string())));

        let result = resolve_config_dir(None, &cli);
        assert_eq!(result, Some(PathBuf::from("/first")));
    }

    #[test]
    fn absent_cli_override_falls_through_to_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let cli = OnceLock::new();
        assert!(record_override(&cli, None));
        let result = resolve_config_dir(None, &cli);
        assert_eq!(result, Some(PathBuf::from("/env/path")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
