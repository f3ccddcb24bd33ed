//! Generated configuration artifacts.
//!
//! Every artifact is rendered as a whole and overwrites whatever is on
//! disk. Regeneration is deterministic given a config; the two secrets
//! rotate on every run, which is intentional.

pub mod compose;
pub mod env_file;
pub mod nginx;

use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::paths;
use std::fs;
use std::os::unix::fs::PermissionsExt;

/// Render and write the environment and composition files into the
/// installation directory, creating it if needed.
pub fn write_all(config: &DeploymentConfig) -> Result<()> {
    fs::create_dir_all(&config.install_dir)?;

    let env_path = paths::env_file(&config.install_dir);
    fs::write(&env_path, env_file::render(config))?;
    // Owner-only: the file holds both generated passwords.
    fs::set_permissions(&env_path, fs::Permissions::from_mode(0o600))?;

    fs::write(
        paths::compose_file(&config.install_dir),
        compose::render(),
    )?;

    Ok(())
}
