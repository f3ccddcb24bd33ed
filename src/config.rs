//! Deployment configuration: operator-edited settings plus per-run
//! generated secrets.
//!
//! The config is resolved once, validated before any step mutates the
//! host, and passed by reference to every step. It is never persisted
//! by the orchestrator itself; the only durable copy of the secrets is
//! the generated environment file.

use crate::error::{Error, Result};
use crate::ui;
use base64::Engine;
use rand::RngCore;
use std::path::PathBuf;

// ============================================================================
// Operator settings - edit these before building
// ============================================================================

/// Fully qualified domain name the host will serve. The run refuses to
/// start while this is still the placeholder.
pub const TARGET_HOST: &str = "n8n.example.com";

/// Basic-auth administrator account for the n8n editor.
pub const ADMIN_USER: &str = "admin";

// ============================================================================
// Fixed layout
// ============================================================================

/// Placeholder shipped in `TARGET_HOST`.
pub const PLACEHOLDER_HOST: &str = "n8n.example.com";

/// Default admin user; usable, but warned about.
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Where the generated artifacts and the compose project live.
pub const INSTALL_DIR: &str = "/opt/n8n";

/// Loopback port the application container publishes.
pub const APP_PORT: u16 = 5678;

/// Bytes of CSPRNG entropy per generated secret.
const SECRET_LEN_BYTES: usize = 24;

/// Resolved, immutable configuration for one provisioning run.
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub target_host: String,
    pub admin_user: String,
    pub install_dir: PathBuf,
    pub db_password: String,
    pub app_password: String,
}

impl DeploymentConfig {
    /// Resolve from the compiled-in operator settings.
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(TARGET_HOST, ADMIN_USER)
    }

    /// Resolve from explicit values. Secrets are freshly generated on
    /// every call, so a rerun rotates both credentials.
    pub fn resolve_from(target_host: &str, admin_user: &str) -> Result<Self> {
        if target_host == PLACEHOLDER_HOST {
            return Err(Error::Configuration(format!(
                "TARGET_HOST is still the placeholder \"{PLACEHOLDER_HOST}\""
            )));
        }
        if admin_user == DEFAULT_ADMIN_USER {
            ui::warn(&format!(
                "admin user is the default \"{DEFAULT_ADMIN_USER}\"; consider changing it"
            ));
        }

        Ok(Self {
            target_host: target_host.to_string(),
            admin_user: admin_user.to_string(),
            install_dir: PathBuf::from(INSTALL_DIR),
            db_password: generate_secret(),
            app_password: generate_secret(),
        })
    }

    /// Externally reachable URL once TLS is in place.
    pub fn public_url(&self) -> String {
        format!("https://{}/", self.target_host)
    }

    /// Loopback URL the reverse proxy forwards to.
    pub fn loopback_url(&self) -> String {
        format!("http://127.0.0.1:{APP_PORT}")
    }
}

/// Generate one password-grade secret: CSPRNG bytes, base64 URL-safe
/// without padding so the value stays a literal in `KEY=VALUE` lines.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_LEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
