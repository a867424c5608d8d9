//! # Redstone Console
//!
//! The command console of the Redstone Synthesis toolkit, independent of any
//! window or widget toolkit. A console keeps a registry of commands with fixed
//! arities, splits typed lines on `~`, checks arity, dispatches to handlers and
//! records everything in an append-only transcript.
//!
//! ## Features
//!
//! - Registry with explicit arities and registration-order help listing
//! - Delimiter tokenizer that keeps arguments verbatim (spaces included)
//! - Dispatcher that turns every failure into transcript text
//! - Session state shared with handlers (the Minecraft saves directory)
//! - Out-of-band entry prompts for menu-driven commands
//!
//! ## Example
//!
//! ```no_run
//! use redstone_console::{config::Config, core::Console};
//!
//! let mut console = Console::with_defaults(&Config::default())?;
//! console.submit("set_minecraft_directory~C:\\Saves");
//! for line in console.transcript().lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr so stdout only carries transcript text
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
