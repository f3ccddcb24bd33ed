//! Final operator-facing summary.
//!
//! Nothing here is persisted; the credentials shown are recoverable
//! only from the generated environment file.

use crate::config::DeploymentConfig;
use crate::steps::RunReport;
use crate::ui;

pub fn print_summary(config: &DeploymentConfig, report: &RunReport) {
    ui::header("Deployment summary");

    if report.is_clean() {
        ui::success("all steps completed");
    } else {
        ui::warn(&format!(
            "completed with {} warning(s)",
            report.warnings.len()
        ));
        for (step, message) in &report.warnings {
            ui::dim(&format!("{step}: {message}"));
        }
    }

    ui::section("Access");
    ui::kv("URL", &config.public_url());
    ui::kv("Admin user", &config.admin_user);
    ui::kv("Admin password", &config.app_password);
    ui::kv("Database password", &config.db_password);
    ui::dim(&format!(
        "credentials are stored in {}/.env",
        config.install_dir.display()
    ));

    ui::section("Operations");
    let dir = config.install_dir.display();
    ui::kv("Logs", &format!("cd {dir} && docker compose logs -f"));
    ui::kv("Restart", &format!("cd {dir} && docker compose restart"));
    ui::kv(
        "Update",
        &format!("cd {dir} && docker compose pull && docker compose up -d"),
    );
}
