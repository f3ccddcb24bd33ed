//! Stage-A reverse proxy: vhost file, enable symlink, validate, reload.

use crate::artifacts::nginx;
use crate::config::DeploymentConfig;
use crate::error::{Error, Result};
use crate::paths;
use crate::runner;
use crate::steps::Step;
use std::fs;
use std::os::unix::fs::symlink;

pub struct ConfigureProxy;

impl Step for ConfigureProxy {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn description(&self) -> String {
        "Configure nginx to front the application".to_string()
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()> {
        install_site(config)?;
        validate_and_reload()
    }
}

/// Write the vhost into sites-available and enable it.
fn install_site(config: &DeploymentConfig) -> Result<()> {
    let available = paths::site_available(&config.target_host);
    fs::write(&available, nginx::render(config))?;

    // Recreate the enable symlink so reruns converge.
    let enabled = paths::site_enabled(&config.target_host);
    if enabled.symlink_metadata().is_ok() {
        fs::remove_file(&enabled)?;
    }
    symlink(&available, &enabled)?;

    // The distribution default site would shadow our server block.
    let default_site = paths::default_site_enabled();
    if default_site.symlink_metadata().is_ok() {
        fs::remove_file(&default_site)?;
    }

    Ok(())
}

/// Dry-run the config, then signal the daemon. A config that fails
/// validation never reaches the daemon; the prior one stays active.
pub fn validate_and_reload() -> Result<()> {
    validate_and_reload_with(
        || runner::run_capture("nginx", &["-t"]).map(|_| ()),
        || runner::run_checked("systemctl", &["reload", "nginx"]),
    )
}

fn validate_and_reload_with<V, R>(validate: V, reload: R) -> Result<()>
where
    V: FnOnce() -> Result<()>,
    R: FnOnce() -> Result<()>,
{
    if let Err(e) = validate() {
        return Err(Error::ProxyValidation(e.to_string()));
    }
    reload()
}
