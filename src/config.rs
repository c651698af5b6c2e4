//! Configuration management for the Omnigage voice engagement client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the API
//! credentials, the API host and the local data directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, resolved by [`credentials`])
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::types::Credentials;

/// Default Omnigage API host path.
pub const DEFAULT_API_URL: &str = "https://api.omnigage.io/api/v1/";

pub const ENV_TOKEN_KEY: &str = "OMNIGAGE_TOKEN_KEY";
pub const ENV_TOKEN_SECRET: &str = "OMNIGAGE_TOKEN_SECRET";
pub const ENV_ACCOUNT_KEY: &str = "OMNIGAGE_ACCOUNT_KEY";
pub const ENV_API_URL: &str = "OMNIGAGE_API_URL";
pub const ENV_DATA_DIR: &str = "OMNIVOX_DATA_DIR";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the data directory if it doesn't exist and loads variables from
/// `omnivox/.env` inside it. Variables already present in the process
/// environment are not overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/omnivox/.env`
/// - macOS: `~/Library/Application Support/omnivox/.env`
/// - Windows: `%LOCALAPPDATA%/omnivox/.env`
///
/// `OMNIVOX_DATA_DIR` replaces the platform directory when set.
///
/// # Errors
///
/// This function will return an error if:
/// - The data directory cannot be created
/// - The `.env` file exists but cannot be parsed
///
/// A missing `.env` file is not an error; the credentials may come from the
/// environment or the command line instead.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Returns the local data directory used for the `.env` file and run records.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var(ENV_DATA_DIR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("omnivox");
    path
}

/// Returns the Omnigage API host path.
///
/// Reads `OMNIGAGE_API_URL` and falls back to [`DEFAULT_API_URL`].
pub fn api_url() -> String {
    env::var(ENV_API_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the API token key from Account -> Developer -> API Tokens.
pub fn token_key() -> Result<String, String> {
    required(ENV_TOKEN_KEY)
}

/// Returns the API token secret paired with [`token_key`].
///
/// # Security Note
///
/// The secret should be kept confidential and never exposed in logs
/// or version control.
pub fn token_secret() -> Result<String, String> {
    required(ENV_TOKEN_SECRET)
}

/// Returns the account key from Account -> Settings -> General.
pub fn account_key() -> Result<String, String> {
    required(ENV_ACCOUNT_KEY)
}

/// Resolves the full set of credentials.
///
/// Each `Some` argument (usually a command-line flag) wins over the matching
/// environment variable. The host falls back to [`api_url`].
///
/// # Errors
///
/// Returns an error naming the first missing variable.
pub fn credentials(
    token_key: Option<String>,
    token_secret: Option<String>,
    account_key: Option<String>,
    host: Option<String>,
) -> Result<Credentials, String> {
    Ok(Credentials {
        token_key: resolve(token_key, self::token_key)?,
        token_secret: resolve(token_secret, self::token_secret)?,
        account_key: resolve(account_key, self::account_key)?,
        host: host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(api_url),
    })
}

fn resolve(
    value: Option<String>,
    fallback: fn() -> Result<String, String>,
) -> Result<String, String> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => Ok(v),
        None => fallback(),
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!(
            "{} must be set (environment, .env file or command-line flag)",
            name
        )),
    }
}
