//! Synthetic market predictor.
//!
//! Generates reproducible daily price series for catalog commodities and
//! summarizes them into a sell/hold recommendation with confidence scores.
//! Everything here is a pure computation; "today" is the only outside
//! input, and only through `generate_series_from_today`.

mod analysis;
mod catalog;
mod error;
mod overview;
mod rng;
mod series;

pub use analysis::{analyze, Analysis, OptimalAction};
pub use catalog::{Commodity, CommoditySpec};
pub use error::PredictorError;
pub use overview::{market_overview, outlook, Outlook, OverviewEntry};
pub use rng::SeededRng;
pub use series::{generate_series, generate_series_from_today, PricePoint, Series};
