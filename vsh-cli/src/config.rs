// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shell configuration file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use vsh_core::{VshError, VshResult};

/// Values the shell needs before it can start
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Actor name shown in the prompt and recorded in the session log
    pub username: String,
    /// Zip archive to browse
    pub filesystem: PathBuf,
    /// Where the session log is written on exit
    pub logfile: PathBuf,
    /// Commands replayed before the prompt appears
    #[serde(default)]
    pub startup_script: Option<PathBuf>,
}

impl Config {
    /// Read a TOML config. Relative paths inside it are taken relative to
    /// the directory holding the file.
    pub fn load(path: impl AsRef<Path>) -> VshResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| VshError::Config(format!("{}: {}", path.display(), e)))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base)
    }

    pub fn parse(text: &str, base: &Path) -> VshResult<Self> {
        let mut config: Config = toml::from_str(text)?;
        if config.username.trim().is_empty() {
            return Err(VshError::Config("username must not be empty".into()));
        }
        config.filesystem = resolve(base, &config.filesystem);
        config.logfile = resolve(base, &config.logfile);
        config.startup_script = config.startup_script.map(|p| resolve(base, &p));
        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            username = "testuser"
            filesystem = "test_fs.zip"
            logfile = "/var/log/session_log.json"
            startup_script = "startup.vsh"
            "#,
            Path::new("/etc/vsh"),
        )
        .unwrap();
        assert_eq!(config.username, "testuser");
        assert_eq!(config.filesystem, PathBuf::from("/etc/vsh/test_fs.zip"));
        assert_eq!(config.logfile, PathBuf::from("/var/log/session_log.json"));
        assert_eq!(config.startup_script, Some(PathBuf::from("/etc/vsh/startup.vsh")));
    }

    #[test]
    fn test_startup_script_optional() {
        let config = Config::parse(
            "username = \"u\"\nfilesystem = \"fs.zip\"\nlogfile = \"log.json\"\n",
            Path::new(""),
        )
        .unwrap();
        assert!(config.startup_script.is_none());
        assert_eq!(config.filesystem, PathBuf::from("fs.zip"));
    }

    #[test]
    fn test_missing_key() {
        let err = Config::parse("username = \"u\"\nlogfile = \"log.json\"\n", Path::new("")).unwrap_err();
        assert!(matches!(err, VshError::Config(ref msg) if msg.contains("filesystem")));
    }

    #[test]
    fn test_empty_username() {
        let err = Config::parse(
            "username = \" \"\nfilesystem = \"fs.zip\"\nlogfile = \"log.json\"\n",
            Path::new(""),
        )
        .unwrap_err();
        assert!(matches!(err, VshError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, VshError::Config(_)));
    }

    #[test]
    fn test_load_resolves_against_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vsh.toml");
        std::fs::write(&path, "username = \"u\"\nfilesystem = \"fs.zip\"\nlogfile = \"log.json\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.filesystem, dir.path().join("fs.zip"));
        assert_eq!(config.logfile, dir.path().join("log.json"));
    }
}
