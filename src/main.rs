//! zipmode CLI - list POSIX file modes recorded in a ZIP archive.
//!
//! Prints one line per Unix-authored entry of the archive's central
//! directory. Entries written by other hosts carry no POSIX permissions
//! and are omitted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use zipmode::unix_external_file_attributes;

/// List POSIX file modes recorded in a ZIP archive
#[derive(Parser)]
#[command(name = "zipmode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ZIP archive
    archive: PathBuf,

    /// Print the raw 32-bit attribute value in hex instead of the octal mode
    #[arg(short, long)]
    raw: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let scan = unix_external_file_attributes(&cli.archive)
        .with_context(|| format!("failed to scan '{}'", cli.archive.display()))?;

    let mut names: Vec<&String> = scan.attributes.keys().collect();
    names.sort();

    for name in names {
        let attrs = scan.attributes[name];
        if cli.raw {
            println!("{attrs:#010x}\t{name}");
        } else {
            // The POSIX mode lives in the upper 16 bits.
            println!("{:06o}\t{name}", attrs >> 16);
        }
    }

    if let Some(mismatch) = scan.count_mismatch {
        eprintln!(
            "WARNING: expected {} entries in central directory of '{}', but found {}",
            mismatch.declared,
            cli.archive.display(),
            mismatch.found
        );
    }

    Ok(())
}
