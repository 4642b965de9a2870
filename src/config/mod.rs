use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    /// Dark palette when true, light otherwise (toggled with `t`).
    pub dark: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Log file lives here.
    pub data_dir: PathBuf,
    /// Where `color-history.json` is written.
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of swatches in the history strip.
    pub visible: usize,
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark: false }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("dev", "tincture", "tincture")
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("tincture"));
        let export_dir = UserDirs::new()
            .and_then(|u| u.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| data_dir.clone());
        Self {
            data_dir,
            export_dir,
        }
    }
}

impl HistoryConfig {
    /// The strip shows between 1 and 10 swatches.
    pub fn clamp(&mut self) {
        self.visible = self.visible.clamp(1, crate::history::DEFAULT_VISIBLE);
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            visible: crate::history::DEFAULT_VISIBLE,
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)?;
    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "tincture", "tincture").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg =
        toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    cfg.history.clamp();
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: Config = toml::from_str("[theme]\ndark = true\n").unwrap();
        assert!(cfg.theme.dark);
        assert!(cfg.input.mouse);
        assert_eq!(cfg.history.visible, 10);
    }

    #[test]
    fn test_load_clamps_visible_history() {
        let dir = std::env::temp_dir().join(format!("tincture-visible-{}", std::process::id()));
        let path = dir.join("config.toml");
        fs::create_dir_all(&dir).unwrap();

        fs::write(&path, "[history]\nvisible = 50\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap().history.visible, 10);

        fs::write(&path, "[history]\nvisible = 0\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap().history.visible, 1);

        fs::write(&path, "[history]\nvisible = 4\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap().history.visible, 4);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("tincture-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg, defaults::defaults());

        let mut changed = cfg.clone();
        changed.theme.dark = !changed.theme.dark;
        save(&changed, Some(&path)).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), changed);

        let _ = fs::remove_dir_all(&dir);
    }
}
