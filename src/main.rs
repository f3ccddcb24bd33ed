mod artifacts;
mod cli;
mod config;
mod error;
mod paths;
mod privilege;
mod probe;
mod report;
mod runner;
mod steps;
mod ui;

use clap::Parser;
use cli::Cli;
use config::DeploymentConfig;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        ui::error(&e.to_string());
        ui::dim(e.advice());
        std::process::exit(e.exit_code());
    }
}

fn run() -> error::Result<()> {
    privilege::ensure_root()?;

    // Resolve and validate before any step touches the host.
    let config = DeploymentConfig::resolve()?;

    ui::header(&format!("Provisioning {}", config.target_host));
    ui::kv("Admin user", &config.admin_user);
    ui::kv("Install dir", &config.install_dir.display().to_string());

    let steps = steps::provisioning_steps();
    let report = steps::execute(&steps, &config)?;

    report::print_summary(&config, &report);
    Ok(())
}
