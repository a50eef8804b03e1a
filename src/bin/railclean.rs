//! railclean: Clean a raw rail network dump into per-table JSON files
//!
//! Takes no arguments. Reads `../tut_full_dump.json` and writes nine files to
//! `./output/`, both relative to the crate directory.
//!
//! Usage:
//!   railclean
//!
//!   # More detail on progress
//!   RUST_LOG=railclean=debug railclean

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use railclean::CleanConfig;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CleanConfig::default();
    info!(
        dump = %config.dump_path.display(),
        output = %config.output_dir.display(),
        "railclean v{}",
        env!("CARGO_PKG_VERSION")
    );

    let summary = railclean::run(&config)
        .with_context(|| format!("Failed to clean {}", config.dump_path.display()))?;

    println!();
    println!("{}", summary);
    Ok(())
}
