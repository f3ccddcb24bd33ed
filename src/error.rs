//! Error taxonomy for the provisioning run.
//!
//! Every failure carries a severity that decides whether the step
//! sequence aborts or records a warning and moves on, plus a
//! remediation hint for the operator.

use thiserror::Error;

/// How a failed step affects the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Abort the whole sequence. No compensation or rollback; already
    /// applied steps are left in place for inspection.
    Fatal,
    /// Record the failure, print advice, continue with the next step.
    Warning,
}

/// Errors that can occur while provisioning.
#[derive(Debug, Error)]
pub enum Error {
    /// A compiled-in setting was left at its placeholder value, or the
    /// process lacks the privileges the run requires.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external tool exited non-zero or could not be spawned.
    #[error("{tool} failed{}", detail(.code, .stderr))]
    ToolInvocation {
        /// The command line that failed, for the operator's eyes.
        tool: String,
        /// Exit code, when the process ran at all.
        code: Option<i32>,
        /// Captured stderr; empty when stdio was inherited.
        stderr: String,
    },

    /// The readiness poll exhausted its attempt ceiling.
    #[error("{url} not ready after {attempts} attempts")]
    ReadinessTimeout { url: String, attempts: u32 },

    /// certbot could not obtain or install the certificate.
    #[error("certificate acquisition failed: {0}")]
    CertificateAcquisition(String),

    /// nginx rejected the generated config; the reload was not attempted.
    #[error("reverse proxy validation failed: {0}")]
    ProxyValidation(String),

    /// The final end-to-end check through the public hostname failed.
    #[error("verification failed: {0}")]
    Verification(String),

    /// Artifact or symlink write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn detail(code: &Option<i32>, stderr: &str) -> String {
    let mut out = match code {
        Some(code) => format!(" (exit {code})"),
        None => String::new(),
    };
    if !stderr.is_empty() {
        out.push_str(": ");
        out.push_str(stderr);
    }
    out
}

impl Error {
    /// Whether this error aborts the sequence or is reported and skipped.
    pub fn severity(&self) -> Severity {
        match self {
            Self::CertificateAcquisition(_) | Self::ProxyValidation(_) | Self::Verification(_) => {
                Severity::Warning
            }
            _ => Severity::Fatal,
        }
    }

    /// Process exit code: the failing tool's own code when known.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolInvocation {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }

    /// Actionable advice for resolving this error.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Configuration(_) => {
                "Edit TARGET_HOST and ADMIN_USER in src/config.rs, rebuild, and run as root"
            }
            Self::ToolInvocation { .. } => {
                "Fix the reported tool failure and rerun; completed steps are safe to repeat"
            }
            Self::ReadinessTimeout { .. } => {
                "Inspect the containers with 'docker compose logs' before rerunning"
            }
            Self::CertificateAcquisition(_) => {
                "Check that DNS points at this host, then run certbot --nginx manually"
            }
            Self::ProxyValidation(_) => {
                "Run 'nginx -t' to see the rejected directive; the previous config is still active"
            }
            Self::Verification(_) => {
                "DNS may not have propagated yet; check the URL from the summary manually"
            }
            Self::Io(_) => "Check permissions on the installation directory",
        }
    }
}

/// Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_fatal_variants() {
        assert_eq!(
            Error::Configuration("placeholder".into()).severity(),
            Severity::Fatal
        );
        assert_eq!(
            Error::ToolInvocation {
                tool: "ufw".into(),
                code: Some(1),
                stderr: String::new(),
            }
            .severity(),
            Severity::Fatal
        );
        assert_eq!(
            Error::ReadinessTimeout {
                url: "http://127.0.0.1:5678".into(),
                attempts: 60,
            }
            .severity(),
            Severity::Fatal
        );
    }

    #[test]
    fn test_severity_warning_variants() {
        assert_eq!(
            Error::CertificateAcquisition("rate limited".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            Error::ProxyValidation("unexpected token".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            Error::Verification("no route to host".into()).severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_exit_code_propagates_tool_code() {
        let err = Error::ToolInvocation {
            tool: "apt-get update".into(),
            code: Some(100),
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 100);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        assert_eq!(Error::Configuration("x".into()).exit_code(), 1);
        let spawn_failed = Error::ToolInvocation {
            tool: "certbot".into(),
            code: None,
            stderr: "No such file or directory".into(),
        };
        assert_eq!(spawn_failed.exit_code(), 1);
    }

    #[test]
    fn test_tool_invocation_display() {
        let err = Error::ToolInvocation {
            tool: "nginx -t".into(),
            code: Some(1),
            stderr: "unknown directive".into(),
        };
        assert_eq!(
            err.to_string(),
            "nginx -t failed (exit 1): unknown directive"
        );

        let inherited = Error::ToolInvocation {
            tool: "apt-get upgrade -y".into(),
            code: Some(100),
            stderr: String::new(),
        };
        assert_eq!(inherited.to_string(), "apt-get upgrade -y failed (exit 100)");
    }
}
