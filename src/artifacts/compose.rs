//! Container-composition file: a Postgres service and the application
//! service on a private bridge network.
//!
//! All deployment-specific values flow in through `${KEY}` substitution
//! from the environment file, so the rendered text itself is identical
//! across runs. The application binds only to loopback; the reverse
//! proxy is the sole public path to it.

use crate::config::APP_PORT;

pub fn render() -> String {
    format!(
        r#"services:
  db:
    image: postgres:16-alpine
    restart: unless-stopped
    environment:
      - POSTGRES_DB=${{POSTGRES_DB}}
      - POSTGRES_USER=${{POSTGRES_USER}}
      - POSTGRES_PASSWORD=${{POSTGRES_PASSWORD}}
    volumes:
      - db_data:/var/lib/postgresql/data
    healthcheck:
      test: ["CMD-SHELL", "pg_isready -U ${{POSTGRES_USER}} -d ${{POSTGRES_DB}}"]
      interval: 10s
      timeout: 5s
      retries: 5
    networks:
      - backend

  n8n:
    image: n8nio/n8n:latest
    restart: unless-stopped
    depends_on:
      db:
        condition: service_healthy
    ports:
      - "127.0.0.1:{port}:{port}"
    environment:
      - DB_TYPE=postgresdb
      - DB_POSTGRESDB_HOST=db
      - DB_POSTGRESDB_PORT=5432
      - DB_POSTGRESDB_DATABASE=${{POSTGRES_DB}}
      - DB_POSTGRESDB_USER=${{POSTGRES_USER}}
      - DB_POSTGRESDB_PASSWORD=${{POSTGRES_PASSWORD}}
      - N8N_HOST=${{N8N_HOST}}
      - N8N_PROTOCOL=${{N8N_PROTOCOL}}
      - N8N_PORT=${{N8N_PORT}}
      - N8N_BASIC_AUTH_ACTIVE=${{N8N_BASIC_AUTH_ACTIVE}}
      - N8N_BASIC_AUTH_USER=${{N8N_BASIC_AUTH_USER}}
      - N8N_BASIC_AUTH_PASSWORD=${{N8N_BASIC_AUTH_PASSWORD}}
      - N8N_USER_MANAGEMENT_DISABLED=${{N8N_USER_MANAGEMENT_DISABLED}}
      - N8N_PERSONALIZATION_ENABLED=${{N8N_PERSONALIZATION_ENABLED}}
      - WEBHOOK_URL=${{WEBHOOK_URL}}
    volumes:
      - n8n_data:/home/node/.n8n
    networks:
      - backend

volumes:
  db_data:
  n8n_data:

networks:
  backend:
    driver: bridge
"#,
        port = APP_PORT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_application_binds_loopback_only() {
        let output = render();
        assert!(output.contains("      - \"127.0.0.1:5678:5678\"\n"));
        // The loopback publish is the only port mapping in the file.
        assert_eq!(output.matches("ports:").count(), 1);
        assert!(!output.contains("0.0.0.0"));
    }

    #[test]
    fn test_application_waits_for_healthy_database() {
        let output = render();
        assert!(output.contains("condition: service_healthy"));
        assert!(output.contains("pg_isready"));
    }

    #[test]
    fn test_named_volumes_and_bridge_network() {
        let output = render();
        assert!(output.contains("db_data:/var/lib/postgresql/data"));
        assert!(output.contains("n8n_data:/home/node/.n8n"));
        assert!(output.contains("driver: bridge"));
    }

    #[test]
    fn test_services_restart_with_the_engine() {
        let output = render();
        assert_eq!(output.matches("restart: unless-stopped").count(), 2);
    }

    #[test]
    fn test_credentials_arrive_via_substitution() {
        let output = render();
        assert!(output.contains("- POSTGRES_PASSWORD=${POSTGRES_PASSWORD}"));
        assert!(output.contains("- N8N_BASIC_AUTH_PASSWORD=${N8N_BASIC_AUTH_PASSWORD}"));
    }
}
