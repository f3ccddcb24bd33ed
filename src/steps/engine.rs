//! Container engine install and activation.

use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::runner;
use crate::steps::Step;
use crate::steps::system::APT_ENV;
use crate::ui;

pub struct ContainerEngine;

impl Step for ContainerEngine {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn description(&self) -> String {
        "Install and enable the Docker engine".to_string()
    }

    fn run(&self, _config: &DeploymentConfig) -> Result<()> {
        if runner::command_exists("docker") {
            ui::dim("docker already installed, skipping install");
        } else {
            runner::run_checked_env(
                "apt-get",
                &["install", "-y", "docker.io", "docker-compose-v2"],
                APT_ENV,
            )?;
        }

        runner::run_checked("systemctl", &["enable", "--now", "docker"])?;
        Ok(())
    }
}
