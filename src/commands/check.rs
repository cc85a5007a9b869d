//! Implementation of the `picdiff check` command.
//!
//! Runs the same client checks the other commands do and prints what the
//! tool would use.

use crate::config::Config;
use crate::error::Result;

use super::prepare_client;

/// Execute the `picdiff check` command.
pub fn cmd_check(config: &Config) -> Result<()> {
    let client = prepare_client(config, true)?;
    let version = client.version()?;
    let here = client.here()?;

    println!("Piccolo Client");
    println!("==============");
    println!();
    println!("  Binary:         {}", config.binary);
    println!("  Version:        {} (minimum {})", version, config.min_version);
    println!("  Repository:     {}", config.server);
    println!("  Review server:  {}", config.review_server);
    if let Some(user) = &config.submit_as {
        println!("  Submit as:      {}", user);
    }
    if !here.is_empty() {
        println!();
        println!("Client information:");
        for line in here.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}
