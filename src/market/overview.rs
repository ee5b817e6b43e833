//! Outlooks for several commodities computed side by side.

use crate::market::{analyze, generate_series, Analysis, Commodity, PredictorError, Series};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

/// Series and analysis for one commodity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlook {
    pub series: Series,
    pub analysis: Analysis,
}

/// Generate and analyze one commodity.
pub fn outlook(
    commodity: Commodity,
    horizon_days: u32,
    start: NaiveDate,
) -> Result<Outlook, PredictorError> {
    let series = generate_series(commodity, horizon_days, start)?;
    let analysis = analyze(&series.points)?;
    Ok(Outlook { series, analysis })
}

/// Result of one overview entry, keyed by the requested name.
#[derive(Debug)]
pub struct OverviewEntry {
    pub name: String,
    pub outlook: Result<Outlook>,
}

/// Compute outlooks for every name on the blocking pool.
///
/// Entries come back in input order. A bad name or horizon fails only its
/// own entry.
pub async fn market_overview(
    names: &[String],
    horizon_days: u32,
    start: NaiveDate,
) -> Vec<OverviewEntry> {
    let handles = names.iter().map(|name| {
        let name = name.clone();
        tokio::task::spawn_blocking(move || {
            Commodity::from_name(&name).and_then(|c| outlook(c, horizon_days, start))
        })
    });

    let results = join_all(handles).await;

    let entries: Vec<OverviewEntry> = names
        .iter()
        .zip(results)
        .map(|(name, joined)| {
            let outlook = match joined {
                Ok(Ok(outlook)) => Ok(outlook),
                Ok(Err(e)) => {
                    warn!("No outlook for '{}': {}", name, e);
                    Err(e.into())
                }
                Err(e) => {
                    warn!("Outlook task for '{}' failed: {}", name, e);
                    Err(anyhow!("outlook task failed: {}", e))
                }
            };
            OverviewEntry {
                name: name.clone(),
                outlook,
            }
        })
        .collect();

    let succeeded = entries.iter().filter(|e| e.outlook.is_ok()).count();
    info!(
        "Market overview: {}/{} commodities over {} days",
        succeeded,
        entries.len(),
        horizon_days
    );

    entries
}
