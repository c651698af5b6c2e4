//! Omnigage Voice Engagement CLI Library
//!
//! This library provides everything needed to launch an outbound voice
//! engagement against the Omnigage API: uploading recordings, creating the
//! JSON:API resources that make up a voice blast, populating the engagement
//! queue and scheduling it.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Local persistence of run records
//! - `omnigage` - Omnigage API client, resources and uploads
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `workflow` - The ordered voice engagement launch
//!
//! # Example
//!
//! ```
//! use omnivox::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> omnivox::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod omnigage;
pub mod types;
pub mod utils;
pub mod workflow;

/// Result type used at the CLI and configuration boundary.
///
/// API operations return the typed [`omnigage::ApiError`]; anything that
/// only needs to be reported to the user is boxed into this alias.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a progress line with a blue `o`.
///
/// ```
/// info!("Upload ID: {}", upload_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completed step with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits the process with status 1.
///
/// Only for the CLI layer; library code returns errors instead.
///
/// ```
/// error!("Launch failed: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for problems that do not stop the run.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
