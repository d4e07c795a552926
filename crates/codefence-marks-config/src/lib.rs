use codefence_marks_engine::{
    KeywordConfig, KeywordConfigError, KeywordEntry, KeywordStyle, ThemeKind,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid keyword table in config file at {config_path}: {source}")]
    InvalidKeywords {
        config_path: PathBuf,
        source: KeywordConfigError,
    },
}

/// Theme names accepted in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSetting {
    Light,
    Dark,
    HighContrast,
    HighContrastLight,
}

impl ThemeSetting {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "high-contrast" => Some(Self::HighContrast),
            "high-contrast-light" => Some(Self::HighContrastLight),
            _ => None,
        }
    }
}

impl From<ThemeSetting> for ThemeKind {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => ThemeKind::Light,
            ThemeSetting::Dark => ThemeKind::Dark,
            ThemeSetting::HighContrast => ThemeKind::HighContrast,
            ThemeSetting::HighContrastLight => ThemeKind::HighContrastLight,
        }
    }
}

/// One `[[keyword]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSetting {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `resources/light` and `resources/dark` icon sets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSetting>,

    /// Keyword tables in classifier order. Empty means the built-in set.
    #[serde(default, rename = "keyword", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<KeywordSetting>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded resources path
        config.resources_path = config
            .resources_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        // Surface bad keyword tables at load time rather than at first scan
        config
            .keyword_config()
            .map_err(|source| ConfigError::InvalidKeywords {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Writes to the default location, refusing to replace an existing file.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let config_path = Self::config_path();
        if config_path.exists() {
            anyhow::bail!("config file {} already exists", config_path.display());
        }
        self.save_to_path(&config_path)?;
        Ok(config_path)
    }

    /// A config whose keyword tables spell out `keywords` in order.
    pub fn with_keywords(keywords: &KeywordConfig) -> Self {
        Self {
            keywords: keywords
                .entries()
                .iter()
                .map(|entry| KeywordSetting {
                    name: entry.keyword.clone(),
                    icon: entry.style.icon.clone(),
                    color: entry.style.color.clone(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/codefence-marks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The keyword set to scan with: the configured tables, or the built-in
    /// set when none are configured.
    pub fn keyword_config(&self) -> Result<KeywordConfig, KeywordConfigError> {
        if self.keywords.is_empty() {
            return Ok(KeywordConfig::default());
        }
        KeywordConfig::new(
            self.keywords
                .iter()
                .map(|k| {
                    KeywordEntry::new(
                        k.name.clone(),
                        KeywordStyle::new(k.icon.as_deref(), k.color.as_deref()),
                    )
                })
                .collect(),
        )
    }

    pub fn theme_kind(&self) -> Option<ThemeKind> {
        self.theme.map(ThemeKind::from)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
