//! ufw policy: default-deny incoming, SSH and web traffic allowed.

use crate::config::DeploymentConfig;
use crate::error::Result;
use crate::runner;
use crate::steps::Step;

pub struct Firewall;

impl Step for Firewall {
    fn name(&self) -> &'static str {
        "firewall"
    }

    fn description(&self) -> String {
        "Configure the firewall (deny incoming, allow SSH/HTTP/HTTPS)".to_string()
    }

    fn run(&self, _config: &DeploymentConfig) -> Result<()> {
        // Reset first so reruns converge instead of accumulating rules.
        runner::run_checked("ufw", &["--force", "reset"])?;
        runner::run_checked("ufw", &["default", "deny", "incoming"])?;
        runner::run_checked("ufw", &["default", "allow", "outgoing"])?;
        runner::run_checked("ufw", &["allow", "OpenSSH"])?;
        // The profile covers ports 80 and 443.
        runner::run_checked("ufw", &["allow", "Nginx Full"])?;
        runner::run_checked("ufw", &["--force", "enable"])?;
        Ok(())
    }
}
