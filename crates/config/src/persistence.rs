//! Locating, reading and writing configuration files.
//!
//! Files are read as JSON5, so plain JSON works too. The first file found
//! wins:
//!
//! 1. `./labboard.json5`, then `./labboard.json`
//! 2. `config.json5`, then `config.json`, in the user configuration
//!    directory (`~/.config/labboard/` on Linux)
//!
//! Files are written as pretty-printed JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: [&str; 2] = ["labboard.json5", "labboard.json"];

const USER_DIR_NAME: &str = "labboard";

const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Returns the user configuration directory, `~/.config/labboard/` on Linux.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] when the platform has none.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_DIR_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Finds the configuration file, looking in the working directory first.
///
/// # Examples
///
/// ```no_run
/// use labboard_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file in the given local and user directories.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read, or
/// [`ConfigError::Parse`] if it does not parse into `T`.
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` as pretty-printed JSON, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if `value` cannot be serialized, or
/// [`ConfigError::WriteFile`] if the file or its directory cannot be
/// written.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;

    type Settings = BTreeMap<String, u64>;

    #[test]
    fn reads_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labboard.json5");
        fs::write(&path, "{\n  // seconds\n  timeout: 5,\n}\n").unwrap();

        let settings: Settings = read_config_file(&path).unwrap();
        assert_eq!(settings["timeout"], 5);
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labboard.json");
        fs::write(&path, "{ timeout: ").unwrap();

        let err = read_config_file::<Settings>(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path: p, .. } if *p == path));
        assert!(err.to_string().contains("labboard.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_config_file::<Settings>("/nonexistent/labboard.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn write_creates_directories_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user").join("labboard").join("config.json");
        let settings = Settings::from([("timeout".to_string(), 30)]);

        write_config_file(&path, &settings).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        assert_eq!(read_config_file::<Settings>(&path).unwrap(), settings);
    }

    #[test]
    fn local_json5_wins() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        for path in [
            local.path().join("labboard.json"),
            local.path().join("labboard.json5"),
            user.path().join("config.json5"),
        ] {
            fs::write(path, "{}").unwrap();
        }

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(local.path().join("labboard.json5")));
    }

    #[test]
    fn user_directory_is_the_fallback() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join("config.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), Some(user.path()));
        assert_eq!(found, Some(user.path().join("config.json")));
        assert_eq!(find_config_file_in(local.path(), None), None);
    }

    #[test]
    fn directories_named_like_config_files_are_skipped() {
        let local = TempDir::new().unwrap();
        fs::create_dir(local.path().join("labboard.json5")).unwrap();
        fs::write(local.path().join("labboard.json"), "{}").unwrap();

        let found = find_config_file_in(local.path(), None);
        assert_eq!(found, Some(local.path().join("labboard.json")));
    }
}
