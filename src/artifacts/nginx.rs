//! Stage-A (HTTP-only) nginx virtual host.
//!
//! Stage B - TLS termination and the HTTP redirect - is written into
//! the same file by certbot's nginx plugin, not rendered here. The
//! upgrade headers keep the editor's WebSocket push channel working,
//! and the 60s timeouts tolerate slow workflow executions.

use crate::config::{APP_PORT, DeploymentConfig};

pub fn render(config: &DeploymentConfig) -> String {
    format!(
        r#"server {{
    listen 80;
    server_name {host};

    location / {{
        proxy_pass http://127.0.0.1:{port};
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection "upgrade";
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_set_header X-Forwarded-Host $host;
        proxy_set_header X-Forwarded-Port $server_port;
        proxy_connect_timeout 60s;
        proxy_send_timeout 60s;
        proxy_read_timeout 60s;
    }}
}}
"#,
        host = config.target_host,
        port = APP_PORT
    )
}
