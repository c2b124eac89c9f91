//! # Policy Subcommand
//!
//! Prints the visibility policy table and optionally runs the
//! monotonicity verification.

use clap::Args;

use quorum_visibility::{verify_policy_monotonic, Access, POLICY};

/// Arguments for the policy subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Verify table monotonicity and completeness.
    #[arg(long)]
    pub check: bool,
}

/// Print the policy table; with `--check`, verify it.
pub fn run(args: &PolicyArgs) -> anyhow::Result<()> {
    println!("{:<28} {:<13} {:<13} {:<13}", "column", "public", "internal", "admin");
    for row in POLICY {
        println!(
            "{:<28} {:<13} {:<13} {:<13}",
            row.column,
            access_name(row.public),
            access_name(row.internal),
            access_name(row.admin)
        );
    }

    if args.check {
        verify_policy_monotonic()?;
        println!("policy table verified: monotonic and complete");
    }
    Ok(())
}

fn access_name(access: Access) -> &'static str {
    match access {
        Access::Always => "always",
        Access::Never => "never",
        Access::IfPublished => "if-published",
    }
}
