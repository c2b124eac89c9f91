//! # quorum CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Quorum governance stack CLI.
///
/// Validates field templates and inspects the visibility policy table for
/// the person-record engine.
#[derive(Parser, Debug)]
#[command(name = "quorum", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compile and report a field template file.
    Template(quorum_cli::template::TemplateArgs),
    /// Print and verify the visibility policy table.
    Policy(quorum_cli::policy::PolicyArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Template(args) => quorum_cli::template::run(&args),
        Commands::Policy(args) => quorum_cli::policy::run(&args),
    }
}
