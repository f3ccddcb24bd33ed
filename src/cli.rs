use clap::Parser;

/// Single entry point: no subcommands, configuration is edited in
/// source (see `config.rs`) before the binary is built.
#[derive(Parser)]
#[command(name = "n8n-provision")]
#[command(version)]
#[command(about = "Provision a production n8n host in one run", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
