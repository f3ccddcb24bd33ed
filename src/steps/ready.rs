//! Block until the application answers on its loopback port.
//!
//! Exhausting the poll is fatal: the remaining steps would front a
//! service that is not there.

use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::probe::ReadinessCheck;
use crate::steps::Step;
use crate::ui;

pub struct WaitForApplication;

impl Step for WaitForApplication {
    fn name(&self) -> &'static str {
        "readiness"
    }

    fn description(&self) -> String {
        "Wait for the application to answer on loopback".to_string()
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()> {
        let attempts = ReadinessCheck::new(config.loopback_url()).wait()?;
        ui::dim(&format!("ready after {attempts} attempt(s)"));
        Ok(())
    }
}
