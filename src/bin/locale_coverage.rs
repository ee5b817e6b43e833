//! Translation coverage report - lists keys each language is missing
//!
//! Usage:
//!   cargo run --bin locale-coverage            # Human-readable summary
//!   cargo run --bin locale-coverage -- --json  # Full report as JSON
//!
//! Exits with status 1 when any placeholder mismatch is found, since those
//! render broken text. Missing keys only fall back to the key and are
//! reported without failing.

use agri_insights::i18n::{Catalog, CoverageReport};
use anyhow::Result;
use tracing::warn;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agri_insights=info".parse()?),
        )
        .init();

    let json = std::env::args().any(|arg| arg == "--json");
    let report = CoverageReport::build(Catalog::builtin());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Reference language: {}", report.reference.name());
        for coverage in &report.languages {
            println!(
                "{:<10} {:>5.1}%  missing: {}",
                coverage.language.name(),
                coverage.percent(),
                coverage.missing.len()
            );
            for key in &coverage.missing {
                println!("    - {}", key);
            }
        }
    }

    let mismatched: Vec<_> = report
        .languages
        .iter()
        .filter(|c| !c.placeholder_mismatches.is_empty())
        .collect();
    for coverage in &mismatched {
        warn!(
            "{} placeholders differ for: {:?}",
            coverage.language.name(),
            coverage.placeholder_mismatches
        );
    }
    if !mismatched.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
