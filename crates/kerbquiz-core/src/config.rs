//! kerbquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::quiz::QuizOptions;

/// Top-level kerbquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KerbquizConfig {
    /// Corpus JSON file.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Decoy candidates added to every question.
    #[serde(default = "default_decoy_count")]
    pub decoy_count: usize,
    /// Randomize quote order at startup.
    #[serde(default = "default_true")]
    pub shuffle_quotes: bool,
    /// Fixed random seed (None = seeded from entropy).
    #[serde(default)]
    pub seed: Option<u64>,
    /// Oldest quoteboard year kept by `import`.
    #[serde(default = "default_min_year")]
    pub min_year: u32,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.json")
}
fn default_decoy_count() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_min_year() -> u32 {
    2018
}

impl Default for KerbquizConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            decoy_count: default_decoy_count(),
            shuffle_quotes: true,
            seed: None,
            min_year: default_min_year(),
        }
    }
}

impl KerbquizConfig {
    pub fn quiz_options(&self) -> QuizOptions {
        QuizOptions {
            decoy_count: self.decoy_count,
            shuffle_quotes: self.shuffle_quotes,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `kerbquiz.toml` in the current directory
/// 2. `~/.config/kerbquiz/config.toml`
///
/// Environment variable overrides: `KERBQUIZ_DATA`, `KERBQUIZ_DECOY_COUNT`, `KERBQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<KerbquizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("kerbquiz.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => KerbquizConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<KerbquizConfig> {
    let mut config: KerbquizConfig = toml::from_str(content)?;
    let data_path = resolve_env_vars(&config.data_path.to_string_lossy());
    config.data_path = PathBuf::from(data_path);
    Ok(config)
}

fn apply_env_overrides(config: &mut KerbquizConfig) -> Result<()> {
    if let Ok(path) = std::env::var("KERBQUIZ_DATA") {
        config.data_path = PathBuf::from(path);
    }
    if let Ok(count) = std::env::var("KERBQUIZ_DECOY_COUNT") {
        config.decoy_count = count
            .parse()
            .with_context(|| format!("invalid KERBQUIZ_DECOY_COUNT: {count}"))?;
    }
    if let Ok(seed) = std::env::var("KERBQUIZ_SEED") {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("invalid KERBQUIZ_SEED: {seed}"))?,
        );
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("kerbquiz"))
}
