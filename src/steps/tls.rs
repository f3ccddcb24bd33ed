//! Certificate acquisition.
//!
//! certbot's nginx plugin rewrites the stage-A vhost in place, adding
//! TLS termination and the HTTP-to-HTTPS redirect. Failure here is a
//! warning, not an abort: the deployment stays reachable over HTTP and
//! the operator can retry once DNS settles.

use crate::config::DeploymentConfig;
use crate::error::{Error, Result};
use crate::runner;
use crate::steps::{Step, proxy};

pub struct AcquireCertificate;

impl Step for AcquireCertificate {
    fn name(&self) -> &'static str {
        "certificate"
    }

    fn description(&self) -> String {
        "Obtain a TLS certificate and enable the HTTPS redirect".to_string()
    }

    fn run(&self, config: &DeploymentConfig) -> Result<()> {
        let result = runner::run_checked(
            "certbot",
            &[
                "--nginx",
                "-d",
                &config.target_host,
                "--non-interactive",
                "--agree-tos",
                "--register-unsafely-without-email",
                "--redirect",
            ],
        );
        if let Err(e) = result {
            return Err(Error::CertificateAcquisition(e.to_string()));
        }

        // The rewrite happened; same validate-then-reload discipline.
        proxy::validate_and_reload()
    }
}
