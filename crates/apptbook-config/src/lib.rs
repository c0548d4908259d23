use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "apptbook";
const CONFIG_FILENAME: &str = "config.toml";
const DATA_FILENAME: &str = "addressbook.json";

pub const DEFAULT_CHILD_TAG_COLOR: Rgb = Rgb(0xff, 0x50, 0x50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: Option<PathBuf>,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub color: bool,
    pub child_tag_color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb`.
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            ui: UiConfig {
                color: false,
                child_tag_color: DEFAULT_CHILD_TAG_COLOR,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("config file given with --config does not exist: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid ui.child_tag_color value (expected #rrggbb): {0}")]
    InvalidColor(String),
    #[error("cannot read apptbook config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed apptbook config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_path: Option<PathBuf>,
    ui: Option<UiFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UiFile {
    color: Option<bool>,
    child_tag_color: Option<String>,
}

/// Loads the config. Without `--config` a missing file, or no usable
/// config directory, falls back to the defaults.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let explicit = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) if !explicit => {
            return Ok(AppConfig::default());
        }
        Err(err) => return Err(err),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::MissingConfigFile(path));
        }
        return Ok(AppConfig::default());
    }
    read_config(&path)
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(path);
    }
    let base = xdg_base("XDG_CONFIG_HOME", &[".config"]).map_err(|err| match err {
        ConfigError::InvalidDataPath(path) => ConfigError::InvalidConfigPath(path),
        other => other,
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Picks the address book file: the explicit path, then the config value,
/// then the XDG data directory.
pub fn resolve_data_path(custom: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = custom.or_else(|| config.data_path.clone()) {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataPath(path));
        }
        return Ok(path);
    }
    let base = xdg_base("XDG_DATA_HOME", &[".local", "share"])?;
    Ok(base.join(APP_DIR).join(DATA_FILENAME))
}

/// `$var` when set, otherwise the home directory joined with `fallback`.
/// An empty `$var` is reported as an invalid data path; callers remap it.
fn xdg_base(var: &str, fallback: &[&str]) -> Result<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataPath(path));
        }
        return Ok(path);
    }
    let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
    Ok(fallback.iter().fold(home, |path, part| path.join(part)))
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(path) = parsed.data_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataPath(path));
        }
        config.data_path = Some(path);
    }

    if let Some(ui) = parsed.ui {
        if let Some(color) = ui.color {
            config.ui.color = color;
        }
        if let Some(raw) = ui.child_tag_color {
            config.ui.child_tag_color =
                Rgb::parse_hex(&raw).ok_or(ConfigError::InvalidColor(raw))?;
        }
    }

    Ok(config)
}
