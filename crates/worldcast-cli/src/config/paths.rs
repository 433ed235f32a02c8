//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the user config root.
const APP_DIR: &str = "worldcast";

/// Resolves the config file path.
///
/// - `{dir}/config.toml` when `dir` is given.
/// - `$XDG_CONFIG_HOME/worldcast/config.toml` when that variable is set.
/// - `~/.config/worldcast/config.toml` otherwise.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    config_path_from(dir.map(PathBuf::as_path), xdg.as_deref(), home.as_deref())
}

fn config_path_from(dir: Option<&Path>, xdg: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }
    if let Some(xdg) = xdg.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(xdg.join(APP_DIR).join(CONFIG_FILE));
    }
    let Some(home) = home else {
        bail!("HOME environment variable is not set");
    };
    Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_dir_override_wins() {
        // Arrange
        let dir = PathBuf::from("/tmp/worldcast-test");

        // Act
        let path = config_path_from(
            Some(&dir),
            Some(Path::new("/xdg")),
            Some(Path::new("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/worldcast-test/config.toml"));
    }

    #[test]
    fn test_xdg_config_home() {
        // Arrange & Act
        let path = config_path_from(None, Some(Path::new("/xdg")), Some(Path::new("/home/u")))
            .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/worldcast/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        // Arrange & Act
        let empty_xdg = config_path_from(None, Some(Path::new("")), Some(Path::new("/home/u")))
            .unwrap();
        let no_xdg = config_path_from(None, None, Some(Path::new("/home/u"))).unwrap();

        // Assert
        assert_eq!(empty_xdg, PathBuf::from("/home/u/.config/worldcast/config.toml"));
        assert_eq!(no_xdg, empty_xdg);
    }

    #[test]
    fn test_no_home_is_error() {
        // Arrange & Act
        let result = config_path_from(None, None, None);

        // Assert
        assert!(result.unwrap_err().to_string().contains("HOME"));
    }

    #[test]
    fn test_resolve_default() {
        // Arrange & Act
        let path = resolve_config_path(None).unwrap();

        // Assert
        assert!(path.ends_with("worldcast/config.toml"));
    }
}
