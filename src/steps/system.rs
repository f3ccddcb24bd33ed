//! System preparation: package index, pending upgrades, prerequisites.

use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::runner;
use crate::steps::Step;

/// Packages the later steps assume are present.
const PREREQUISITES: &[&str] = &[
    "ca-certificates",
    "curl",
    "nginx",
    "certbot",
    "python3-certbot-nginx",
];

/// Keeps apt from ever prompting; dpkg prompts would hang the run.
pub const APT_ENV: &[(&str, &str)] = &[("DEBIAN_FRONTEND", "noninteractive")];

pub struct SystemPreparation;

impl Step for SystemPreparation {
    fn name(&self) -> &'static str {
        "system"
    }

    fn description(&self) -> String {
        "Update packages and install prerequisites".to_string()
    }

    fn run(&self, _config: &DeploymentConfig) -> Result<()> {
        runner::run_checked_env("apt-get", &["update"], APT_ENV)?;
        runner::run_checked_env("apt-get", &["upgrade", "-y"], APT_ENV)?;

        let mut args = vec!["install", "-y"];
        args.extend_from_slice(PREREQUISITES);
        runner::run_checked_env("apt-get", &args, APT_ENV)?;

        Ok(())
    }
}
