//! # quorum-cli — Operator Tooling
//!
//! Subcommand handlers for the `quorum` binary: template validation and
//! visibility-policy inspection. The binary entry point lives in
//! `main.rs`; each subcommand keeps its args struct and handler in its own
//! module.

pub mod policy;
pub mod template;
