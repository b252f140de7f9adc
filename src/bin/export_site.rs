//! Export the portfolio as static files.
//!
//! Run with: cargo run --bin export_site
//! Writes to OUTPUT_DIR (default `dist`).

use portfolio_site::logging::{init_tracing, DEFAULT_FILTER};
use portfolio_site::{export_site, Portfolio, SiteConfig};

fn main() -> anyhow::Result<()> {
    init_tracing(DEFAULT_FILTER);

    let config = SiteConfig::from_env()?;
    let portfolio = Portfolio::load(&config)?;
    let report = export_site(&portfolio, &config.output_dir)?;

    println!("Exported {} files to {}", report.files.len(), report.out_dir.display());
    for id in &report.skipped {
        println!("  skipped {} (no case study)", id);
    }

    Ok(())
}
