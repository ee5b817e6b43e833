//! Summary analytics over a price series.

use crate::market::{PredictorError, PricePoint};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Best price must beat the current one by this factor to recommend holding.
const HOLD_THRESHOLD: f64 = 1.03;

const VOLATILITY_FLOOR: f64 = 0.4;
const VOLATILITY_CEILING: f64 = 0.95;

/// Recommended action for the grower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptimalAction {
    Hold,
    Sell,
}

impl OptimalAction {
    /// Translation key for the localized action label.
    pub fn translation_key(&self) -> &'static str {
        match self {
            OptimalAction::Hold => "predictor.action.hold",
            OptimalAction::Sell => "predictor.action.sell",
        }
    }

    /// Translation key for the localized advice sentence.
    pub fn advice_key(&self) -> &'static str {
        match self {
            OptimalAction::Hold => "predictor.advice.hold",
            OptimalAction::Sell => "predictor.advice.sell",
        }
    }
}

impl fmt::Display for OptimalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimalAction::Hold => f.write_str("HOLD"),
            OptimalAction::Sell => f.write_str("SELL"),
        }
    }
}

/// Read-only summary of a price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Price of the first point
    pub current_price: f64,
    /// Highest price in the series
    pub best_price: f64,
    /// Earliest date at which `best_price` occurs
    pub best_sell_date: NaiveDate,
    /// Population mean of all prices
    pub mean: f64,
    /// Population standard deviation of all prices
    pub std_dev: f64,
    /// `1 / (1 + std_dev / mean)` clamped to `[0.4, 0.95]`
    pub volatility_score: f64,
    /// Short-horizon confidence, always within `[50, 99]`
    pub confidence_7: u32,
    /// Long-horizon confidence, always within `[40, 95]`
    pub confidence_30: u32,
    pub optimal_action: OptimalAction,
}

/// Analyze a series.
///
/// Pure: the same points always produce the same analysis.
///
/// # Errors
/// `EmptySeries` if `points` is empty.
pub fn analyze(points: &[PricePoint]) -> Result<Analysis, PredictorError> {
    let first = points.first().ok_or(PredictorError::EmptySeries)?;
    let current_price = first.price;

    let mut best = first;
    for point in &points[1..] {
        if point.price > best.price {
            best = point;
        }
    }

    let count = points.len() as f64;
    // Divide before summing so prices near f64::MAX cannot overflow
    let mean: f64 = points.iter().map(|p| p.price / count).sum();
    let std_dev = population_std_dev(points, mean, count);

    // All-zero prices: no relative spread
    let relative_spread = if mean > 0.0 { std_dev / mean } else { 0.0 };
    // NaN only comes from non-finite or overflowing input; score it as least stable
    let volatility_score = if relative_spread.is_nan() {
        VOLATILITY_FLOOR
    } else {
        (1.0 / (1.0 + relative_spread)).clamp(VOLATILITY_FLOOR, VOLATILITY_CEILING)
    };

    let confidence_30 = (volatility_score * 100.0).round() as u32;
    let confidence_7 = ((f64::from(confidence_30 + 10) * 1.05).round() as u32).clamp(50, 99);

    let optimal_action = if best.price > current_price * HOLD_THRESHOLD {
        OptimalAction::Hold
    } else {
        OptimalAction::Sell
    };

    Ok(Analysis {
        current_price,
        best_price: best.price,
        best_sell_date: best.date,
        mean,
        std_dev,
        volatility_score,
        confidence_7,
        confidence_30,
        optimal_action,
    })
}

/// Population standard deviation, computed on deviations scaled by the
/// largest one so squaring cannot overflow.
fn population_std_dev(points: &[PricePoint], mean: f64, count: f64) -> f64 {
    let scale = points
        .iter()
        .map(|p| (p.price - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }

    let scaled_variance: f64 = points
        .iter()
        .map(|p| ((p.price - mean) / scale).powi(2) / count)
        .sum();
    scaled_variance.sqrt() * scale
}
