//! Environment file consumed by compose `${KEY}` substitution.
//!
//! Flat `KEY=VALUE` lines, no quoting: the generated secrets use a
//! base64 URL-safe alphabet, so every value is literal-safe.

use crate::config::{APP_PORT, DeploymentConfig};
use std::fmt::Write;

/// Database name and role shared by both services.
const DB_NAME: &str = "n8n";
const DB_USER: &str = "n8n";

pub fn render(config: &DeploymentConfig) -> String {
    let mut output = String::new();

    writeln!(output, "# Database").unwrap();
    writeln!(output, "POSTGRES_DB={DB_NAME}").unwrap();
    writeln!(output, "POSTGRES_USER={DB_USER}").unwrap();
    writeln!(output, "POSTGRES_PASSWORD={}", config.db_password).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "# Application").unwrap();
    writeln!(output, "N8N_HOST={}", config.target_host).unwrap();
    writeln!(output, "N8N_PROTOCOL=https").unwrap();
    writeln!(output, "N8N_PORT={APP_PORT}").unwrap();
    writeln!(output, "N8N_BASIC_AUTH_ACTIVE=true").unwrap();
    writeln!(output, "N8N_BASIC_AUTH_USER={}", config.admin_user).unwrap();
    writeln!(output, "N8N_BASIC_AUTH_PASSWORD={}", config.app_password).unwrap();
    writeln!(output, "N8N_USER_MANAGEMENT_DISABLED=true").unwrap();
    writeln!(output, "N8N_PERSONALIZATION_ENABLED=false").unwrap();
    writeln!(output, "WEBHOOK_URL=https://{}/", config.target_host).unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_config() -> DeploymentConfig {
        DeploymentConfig {
            target_host: "demo.example.org".into(),
            admin_user: "ops".into(),
            install_dir: "/opt/n8n".into(),
            db_password: "db-secret".into(),
            app_password: "app-secret".into(),
        }
    }

    #[test]
    fn test_exact_output() {
        let expected = "\
# Database
POSTGRES_DB=n8n
POSTGRES_USER=n8n
POSTGRES_PASSWORD=db-secret

# Application
N8N_HOST=demo.example.org
N8N_PROTOCOL=https
N8N_PORT=5678
N8N_BASIC_AUTH_ACTIVE=true
N8N_BASIC_AUTH_USER=ops
N8N_BASIC_AUTH_PASSWORD=app-secret
N8N_USER_MANAGEMENT_DISABLED=true
N8N_PERSONALIZATION_ENABLED=false
WEBHOOK_URL=https://demo.example.org/
";
        assert_eq!(render(&fixed_config()), expected);
    }

    #[test]
    fn test_rendering_is_deterministic_with_secrets_held_constant() {
        let config = fixed_config();
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn test_host_and_admin_lines() {
        let output = render(&fixed_config());
        assert!(output.contains("N8N_HOST=demo.example.org\n"));
        assert!(output.contains("N8N_BASIC_AUTH_USER=ops\n"));
    }

    #[test]
    fn test_feature_disable_flags_present() {
        let output = render(&fixed_config());
        assert!(output.contains("N8N_USER_MANAGEMENT_DISABLED=true\n"));
        assert!(output.contains("N8N_PERSONALIZATION_ENABLED=false\n"));
    }
}
