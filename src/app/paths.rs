// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins: an explicit directory, `--config-dir`,
//! `ART_SPACE_CONFIG_DIR`, then `<platform config dir>/ArtSpace`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "ArtSpace";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "ART_SPACE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; returns `false` when an override was
/// already installed.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Resolves the config directory, `explicit` taking priority over everything.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        explicit,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        // An empty variable counts as unset.
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|dir| dir.join(APP_NAME)))
}
