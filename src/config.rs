//! Generator constants and the layered configuration that produces them.
//!
//! Precedence: CLI > env > config file > defaults. Only the first config file
//! that exists is read: `--config`, `$INITLIST_CONFIG`,
//! `<config dir>/initlist-gen.toml`, `./initlist-gen.toml`.

use crate::errors::GenError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_INDEX: u32 = 256;
pub const DEFAULT_SPLIT: u32 = 20;
pub const DEFAULT_PREFIX: &str = "RAINY_INITIALIZER_LIST";

/// Upper bound for `max_index`.
pub const MAX_INDEX_LIMIT: u32 = 4096;
/// Upper bound for `split`; explicit bodies grow quadratically with it.
pub const SPLIT_LIMIT: u32 = 256;

pub const CONFIG_FILE_NAME: &str = "initlist-gen.toml";

/// Constants the sequence builder is constructed with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Highest generated index; definitions cover `1..=max_index`.
    pub max_index: u32,
    /// Last index of the explicit regime.
    pub split: u32,
    /// Macro name prefix; definitions are named `{prefix}_{index}`.
    pub prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_index: DEFAULT_MAX_INDEX, split: DEFAULT_SPLIT, prefix: DEFAULT_PREFIX.to_string() }
    }
}

impl GeneratorConfig {
    /// Checks that the two regimes are disjoint and cover `1..=max_index`, and that the
    /// prefix can name a preprocessor macro.
    ///
    /// # Errors
    /// Returns a configuration error (`GenError::is_configuration`) on the first violation.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_index == 0 || self.max_index > MAX_INDEX_LIMIT {
            return Err(GenError::InvalidMaxIndex(self.max_index));
        }
        // index 1 has nothing to refer back to, so the explicit regime can't be empty
        let limit = self.max_index.min(SPLIT_LIMIT);
        if self.split == 0 || self.split > limit {
            return Err(GenError::InvalidSplit { split: self.split, limit });
        }
        if !is_identifier(&self.prefix) {
            return Err(GenError::InvalidPrefix(self.prefix.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn explicit_len(&self) -> u32 {
        self.split.min(self.max_index)
    }

    #[must_use]
    pub fn recursive_len(&self) -> u32 {
        self.max_index.saturating_sub(self.split)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One configuration layer; unset fields fall through to the layer below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub max_index: Option<u32>,
    pub split: Option<u32>,
    pub prefix: Option<String>,
}

impl ConfigOverrides {
    /// Fill unset fields from `lower`.
    #[must_use]
    pub fn or(self, lower: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            max_index: self.max_index.or(lower.max_index),
            split: self.split.or(lower.split),
            prefix: self.prefix.or(lower.prefix),
        }
    }

    #[must_use]
    pub fn apply(self, base: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            max_index: self.max_index.unwrap_or(base.max_index),
            split: self.split.unwrap_or(base.split),
            prefix: self.prefix.unwrap_or(base.prefix),
        }
    }

    /// Reads `INITLIST_MAX_INDEX`, `INITLIST_SPLIT` and `INITLIST_PREFIX` through `lookup`.
    ///
    /// # Errors
    /// Returns `GenError::Config` when a numeric variable does not parse.
    pub fn from_env_with<F>(lookup: F) -> Result<ConfigOverrides, GenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let num = |key: &str| -> Result<Option<u32>, GenError> {
            match lookup(key) {
                Some(v) => v
                    .trim()
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|e| GenError::Config(format!("{key}={v:?}: {e}"))),
                None => Ok(None),
            }
        };
        Ok(ConfigOverrides {
            max_index: num("INITLIST_MAX_INDEX")?,
            split: num("INITLIST_SPLIT")?,
            prefix: lookup("INITLIST_PREFIX"),
        })
    }

    /// # Errors
    /// See [`ConfigOverrides::from_env_with`].
    pub fn from_env() -> Result<ConfigOverrides, GenError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// # Errors
    /// Returns `GenError::Config` if the file can't be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<ConfigOverrides, GenError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str::<ConfigOverrides>(&text)
            .map_err(|e| GenError::Config(format!("{}: {e}", path.display())))
    }
}

/// Candidate config files in lookup order.
#[must_use]
pub fn config_paths(cli_cfg: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = cli_cfg {
        paths.push(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("INITLIST_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Some(dir) = dirs_next::config_dir() {
        paths.push(dir.join(CONFIG_FILE_NAME));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Reads the first existing file among `paths`; no file means an empty layer.
///
/// # Errors
/// Propagates [`ConfigOverrides::from_file`] failures for the file that exists.
pub fn read_first_existing(paths: &[PathBuf]) -> Result<ConfigOverrides, GenError> {
    match paths.iter().find(|p| p.exists()) {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            ConfigOverrides::from_file(p)
        }
        None => Ok(ConfigOverrides::default()),
    }
}

/// Resolves the effective configuration and validates it.
///
/// An explicitly named `cli_cfg` must exist; the other candidates are optional.
///
/// # Errors
/// Returns config file, env parse, or validation errors.
pub fn load_config(cli_cfg: Option<&Path>, cli: ConfigOverrides) -> Result<GeneratorConfig, GenError> {
    if let Some(p) = cli_cfg {
        if !p.exists() {
            return Err(GenError::Config(format!("{}: config file not found", p.display())));
        }
    }
    let file = read_first_existing(&config_paths(cli_cfg))?;
    let env = ConfigOverrides::from_env()?;
    let cfg = cli.or(env).or(file).apply(GeneratorConfig::default());
    cfg.validate()?;
    Ok(cfg)
}
