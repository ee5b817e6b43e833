//! Deterministic synthetic daily price series.

use crate::market::{Commodity, PredictorError, SeededRng};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Amplitude of the ~monthly seasonal wave, as a fraction of base price
const MONTHLY_AMPLITUDE: f64 = 0.012;

/// Amplitude of the weekly seasonal wave, as a fraction of base price
const WEEKLY_AMPLITUDE: f64 = 0.006;

/// Per-day trend increment, scaled by day index and trend multiplier
const TREND_RATE: f64 = 0.0003;

/// Width of the random perturbation band, as a fraction of base price
const NOISE_AMPLITUDE: f64 = 0.05;

/// One day's price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    /// Rupees per kilogram, two decimal places
    pub price: f64,
}

/// Price series for one commodity, one point per consecutive day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub commodity: Commodity,
    pub points: Vec<PricePoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }
}

/// Generate `horizon_days` daily prices for `commodity`, starting at `start`.
///
/// Each day adds a seasonal component (two sinusoids), a linear trend term
/// and a bounded perturbation drawn from a generator seeded by the commodity
/// name to the previous price. The running price is clamped to
/// `[0.6 * base, 1.9 * base]` and rounded to two decimals after every step.
///
/// # Errors
/// `InvalidHorizon` if `horizon_days` is 0.
pub fn generate_series(
    commodity: Commodity,
    horizon_days: u32,
    start: NaiveDate,
) -> Result<Series, PredictorError> {
    if horizon_days == 0 {
        return Err(PredictorError::InvalidHorizon { days: horizon_days });
    }

    let base = commodity.base_price();
    let floor = commodity.price_floor();
    let ceiling = commodity.price_ceiling();
    let mut rng = SeededRng::from_seed(commodity.name());
    let mut running = base;
    let mut points = Vec::with_capacity(horizon_days as usize);

    for day in 0..horizon_days {
        let t = f64::from(day);
        let seasonal = base
            * (MONTHLY_AMPLITUDE * (2.0 * PI * t / 30.0).sin()
                + WEEKLY_AMPLITUDE * (2.0 * PI * t / 7.0).sin());
        let trend = base * commodity.trend_multiplier() * TREND_RATE * t;
        let noise = (rng.next_f64() - 0.5) * NOISE_AMPLITUDE * base;

        running = round_cents((running + seasonal + trend + noise).clamp(floor, ceiling));
        points.push(PricePoint {
            date: start + Days::new(u64::from(day)),
            price: running,
        });
    }

    debug!(
        "Generated {} day series for {} starting {}",
        horizon_days, commodity, start
    );

    Ok(Series { commodity, points })
}

/// Look `name` up in the catalog and generate a series starting today
/// (local calendar date).
pub fn generate_series_from_today(name: &str, horizon_days: u32) -> Result<Series, PredictorError> {
    let commodity = Commodity::from_name(name)?;
    generate_series(commodity, horizon_days, Local::now().date_naive())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn commodity(name: &str) -> Commodity {
        Commodity::from_name(name).expect("catalog commodity")
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_potato_seven_days() {
        let series = generate_series(commodity("Potato"), 7, start()).expect("series");

        assert_eq!(series.len(), 7);
        assert_eq!(series.first().map(|p| p.date), Some(start()));
        for point in &series.points {
            assert!(point.price >= 16.8 - EPSILON && point.price <= 53.2 + EPSILON);
        }
    }

    #[test]
    fn test_dates_are_consecutive() {
        let series = generate_series(commodity("Onion"), 40, start()).expect("series");
        for (i, pair) in series.points.windows(2).enumerate() {
            assert_eq!(
                pair[1].date,
                pair[0].date.succ_opt().expect("next day"),
                "gap after index {}",
                i
            );
        }
    }

    #[test]
    fn test_prices_have_two_decimals() {
        let series = generate_series(commodity("Cotton"), 60, start()).expect("series");
        for point in &series.points {
            let cents = point.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "price {}", point.price);
        }
    }

    #[test]
    fn test_from_today_starts_today() {
        let series = generate_series_from_today("Tomato", 3).expect("series");
        let today = Local::now().date_naive();
        // Tolerate the test straddling midnight
        let first = series.first().expect("non-empty").date;
        assert!(first == today || first.succ_opt() == Some(today));
    }

    // ==================== Determinism Tests ====================

    #[test]
    fn test_same_inputs_identical_output() {
        let a = generate_series(commodity("Tomato"), 30, start()).expect("series");
        let b = generate_series(commodity("Tomato"), 30, start()).expect("series");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).expect("json"),
            serde_json::to_string(&b).expect("json")
        );
    }

    #[test]
    fn test_shorter_horizon_is_prefix() {
        let long = generate_series(commodity("Rice"), 30, start()).expect("series");
        let short = generate_series(commodity("Rice"), 10, start()).expect("series");
        assert_eq!(short.points[..], long.points[..10]);
    }

    #[test]
    fn test_commodities_differ() {
        let tomato = generate_series(commodity("Tomato"), 10, start()).expect("series");
        let onion = generate_series(commodity("Onion"), 10, start()).expect("series");
        let tomato_prices: Vec<f64> = tomato.points.iter().map(|p| p.price).collect();
        let onion_prices: Vec<f64> = onion.points.iter().map(|p| p.price).collect();
        assert_ne!(tomato_prices, onion_prices);
    }

    // ==================== Contract Tests ====================

    #[test]
    fn test_zero_horizon_rejected() {
        let err = generate_series(commodity("Wheat"), 0, start()).unwrap_err();
        assert_eq!(err, PredictorError::InvalidHorizon { days: 0 });
    }

    #[test]
    fn test_long_horizon_stays_within_bounds() {
        let potato = commodity("Potato");
        let series = generate_series(potato, 400, start()).expect("series");

        assert_eq!(series.len(), 400);
        assert_eq!(
            series.points.last().map(|p| p.date),
            Some(start() + Days::new(399))
        );
        for point in &series.points {
            assert!(point.price >= potato.price_floor() - EPSILON);
            assert!(point.price <= potato.price_ceiling() + EPSILON);
        }
    }

    #[test]
    fn test_unknown_commodity_rejected() {
        let err = generate_series_from_today("Dragonfruit", 7).unwrap_err();
        assert!(matches!(err, PredictorError::UnknownCommodity { .. }));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_prices_within_bounds(
            index in 0usize..8,
            horizon in 1u32..=730,
        ) {
            let commodity = Commodity::all()[index];
            let series = generate_series(commodity, horizon, start()).expect("series");
            prop_assert_eq!(series.len(), horizon as usize);
            for point in &series.points {
                prop_assert!(point.price >= commodity.price_floor() - EPSILON);
                prop_assert!(point.price <= commodity.price_ceiling() + EPSILON);
            }
        }
    }
}
