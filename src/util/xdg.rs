use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Get the XDG config directory for dotwrap
///
/// Returns `$XDG_CONFIG_HOME/dotwrap` or `~/.config/dotwrap` if not set
pub fn config_dir() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").filter(|value| !value.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => home_dir()?.join(".config"),
    };

    Ok(base.join("dotwrap"))
}

/// Get the home directory
pub fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .context("Failed to get home directory")
        .map(|bd| bd.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_config_dir_honours_xdg_config_home() {
        let temp = TempDir::new().unwrap();
        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());

        let dir = config_dir().unwrap();

        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(dir, temp.path().join("dotwrap"));
    }

    #[test]
    #[serial]
    fn test_config_dir_falls_back_to_home() {
        let previous = env::var_os("XDG_CONFIG_HOME");
        env::remove_var("XDG_CONFIG_HOME");

        let dir = config_dir().unwrap();

        if let Some(value) = previous {
            env::set_var("XDG_CONFIG_HOME", value);
        }
        assert_eq!(dir, home_dir().unwrap().join(".config/dotwrap"));
    }

    #[test]
    fn test_home_dir() {
        let dir = home_dir().unwrap();
        assert!(dir.is_absolute());
    }
}
