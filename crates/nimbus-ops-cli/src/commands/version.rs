//! Version command - show version information

use anyhow::Result;
use clap::Args;
use colored::*;

#[derive(Args)]
pub struct VersionCommand;

impl VersionCommand {
    pub fn execute(&self) -> Result<()> {
        println!("{} {}", "Nimbus Ops CLI".bold(), env!("CARGO_PKG_VERSION").green());
        println!();
        println!("  {} {}", "Rust edition:".cyan(), "2021");
        println!("  {} {}", "Platform:".cyan(), std::env::consts::OS);

        Ok(())
    }
}
