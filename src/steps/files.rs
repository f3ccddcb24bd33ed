//! Artifact generation step: the environment and composition files.

use crate::artifacts;
use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::paths;
use crate::steps::Step;
use crate::ui;

pub struct WriteArtifacts;

impl Step for WriteArtifacts {
    fn name(&self) -> &'static str {
        "artifacts"
    }

    fn description(&self) -> String {
        "Generate the environment and compose files".to_string()
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()> {
        artifacts::write_all(config)?;
        ui::dim(&format!(
            "wrote {}",
            paths::env_file(&config.install_dir).display()
        ));
        ui::dim(&format!(
            "wrote {}",
            paths::compose_file(&config.install_dir).display()
        ));
        Ok(())
    }
}
