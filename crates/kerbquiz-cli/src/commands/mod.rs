pub mod import;
pub mod init;
pub mod play;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kerbquiz_core::config::{load_config_from, KerbquizConfig};

/// Load the config file and apply command-line overrides on top.
pub fn settings(
    config_path: Option<PathBuf>,
    data: Option<PathBuf>,
    seed: Option<u64>,
    decoys: Option<usize>,
) -> Result<KerbquizConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(data) = data {
        config.data_path = data;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(decoys) = decoys {
        config.decoy_count = decoys;
    }
    tracing::debug!(
        data = %config.data_path.display(),
        decoys = config.decoy_count,
        seed = ?config.seed,
        "resolved settings"
    );
    Ok(config)
}

/// Seeded generator when a seed is configured, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
