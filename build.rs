//! Build script for the Omnigage voice engagement CLI.
//!
//! Copies the `.env.example` template next to where the binary looks for its
//! `.env` file, so a fresh install has the list of settings at hand.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// Destination:
/// - Linux: `~/.local/share/omnivox/.env.example`
/// - macOS: `~/Library/Application Support/omnivox/.env.example`
/// - Windows: `%LOCALAPPDATA%/omnivox/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the copy fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("omnivox");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
