use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON task list used instead of the built-in seed board.
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "TASKBOARD_CONFIG";

impl AppConfig {
    /// `$TASKBOARD_CONFIG` if set, else `<config_dir>/taskboard/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        resolve_config_path(std::env::var_os(CONFIG_ENV), dirs::config_dir())
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing or malformed files yield the default configuration. A relative
    /// `tasks_file` is taken relative to the directory holding the config file.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        let Ok(mut config) = toml::from_str::<Self>(&content) else {
            return Self::default();
        };
        if let (Some(tasks_file), Some(dir)) = (config.tasks_file.as_mut(), path.parent()) {
            if tasks_file.is_relative() {
                *tasks_file = dir.join(&*tasks_file);
            }
        }
        config
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir.map(|dir| dir.join("taskboard").join("config.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.tasks_file.is_none());
        assert_eq!(config.effective_log_level(), "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "tasks_file = \"/tmp/board.json\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.tasks_file, Some(PathBuf::from("/tmp/board.json")));
        assert_eq!(config.effective_log_level(), "debug");
    }

    #[test]
    fn test_relative_tasks_file_resolves_next_to_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tasks_file = \"boards/redesign.json\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(
            config.tasks_file,
            Some(dir.path().join("boards").join("redesign.json"))
        );
    }

    #[test]
    fn test_config_path_resolution() {
        let base = PathBuf::from("/home/dev/.config");
        assert_eq!(
            resolve_config_path(None, Some(base.clone())),
            Some(base.join("taskboard").join("config.toml"))
        );
        assert_eq!(
            resolve_config_path(Some(OsString::from("/etc/taskboard.toml")), Some(base.clone())),
            Some(PathBuf::from("/etc/taskboard.toml"))
        );
        assert_eq!(
            resolve_config_path(Some(OsString::new()), Some(base.clone())),
            Some(base.join("taskboard").join("config.toml"))
        );
        assert_eq!(resolve_config_path(None, None), None);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.tasks_file.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [not toml").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.log_level.is_none());
    }
}
