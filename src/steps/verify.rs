//! Final end-to-end check through the public hostname.

use crate::config::DeploymentConfig;
use crate::error::{Error, Result};
use crate::probe::ReadinessCheck;
use crate::steps::Step;
use crate::ui;

/// A short ceiling: the stack is already up, this only proves the
/// proxy path works from the outside.
const VERIFY_ATTEMPTS: u32 = 6;

/// 301 joins the accepted set: once stage B is in place, plain HTTP
/// answers with the redirect.
const VERIFY_ACCEPTED: &[u16] = &[200, 301, 302, 401];

pub struct VerifyDeployment;

impl Step for VerifyDeployment {
    fn name(&self) -> &'static str {
        "verify"
    }

    fn description(&self) -> String {
        "Verify the deployment through the public hostname".to_string()
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()> {
        let check = ReadinessCheck::new(format!("http://{}/", config.target_host))
            .with_attempts(VERIFY_ATTEMPTS)
            .with_accepted(VERIFY_ACCEPTED);

        match check.wait() {
            Ok(attempts) => {
                ui::dim(&format!("answered after {attempts} attempt(s)"));
                Ok(())
            }
            Err(e) => Err(Error::Verification(e.to_string())),
        }
    }
}
