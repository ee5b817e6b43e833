//! Fixed commodity catalog used by the market predictor.

use crate::market::PredictorError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Static description of a catalog commodity.
#[derive(Debug, Clone, PartialEq)]
pub struct CommoditySpec {
    /// Display name, also the generator seed (e.g., "Tomato")
    pub name: &'static str,

    /// Reference wholesale price in rupees per kilogram
    pub base_price: f64,

    /// Scales the linear trend term of the generated series
    pub trend_multiplier: f64,
}

const CATALOG: &[CommoditySpec] = &[
    CommoditySpec {
        name: "Tomato",
        base_price: 32.0,
        trend_multiplier: 1.4,
    },
    CommoditySpec {
        name: "Onion",
        base_price: 35.0,
        trend_multiplier: 1.2,
    },
    CommoditySpec {
        name: "Potato",
        base_price: 28.0,
        trend_multiplier: 0.8,
    },
    CommoditySpec {
        name: "Wheat",
        base_price: 24.0,
        trend_multiplier: 0.5,
    },
    CommoditySpec {
        name: "Rice",
        base_price: 42.0,
        trend_multiplier: 0.6,
    },
    CommoditySpec {
        name: "Maize",
        base_price: 21.0,
        trend_multiplier: 0.7,
    },
    CommoditySpec {
        name: "Soybean",
        base_price: 46.0,
        trend_multiplier: 1.0,
    },
    CommoditySpec {
        name: "Cotton",
        base_price: 68.0,
        trend_multiplier: 0.9,
    },
];

/// A commodity known to be in the catalog.
///
/// Only obtainable through `from_name` or `all`, so every `Commodity` has a
/// base price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commodity {
    spec: &'static CommoditySpec,
}

impl Commodity {
    /// Look a commodity up by name, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Result<Commodity, PredictorError> {
        let wanted = name.trim();
        CATALOG
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(wanted))
            .map(|spec| Commodity { spec })
            .ok_or_else(|| PredictorError::UnknownCommodity {
                name: name.to_string(),
            })
    }

    /// Every catalog commodity, in catalog order.
    pub fn all() -> Vec<Commodity> {
        CATALOG.iter().map(|spec| Commodity { spec }).collect()
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn base_price(&self) -> f64 {
        self.spec.base_price
    }

    pub fn trend_multiplier(&self) -> f64 {
        self.spec.trend_multiplier
    }

    /// Lowest price a generated series may reach (60% of base).
    pub fn price_floor(&self) -> f64 {
        0.6 * self.spec.base_price
    }

    /// Highest price a generated series may reach (190% of base).
    pub fn price_ceiling(&self) -> f64 {
        1.9 * self.spec.base_price
    }

    /// Translation key for the commodity's localized name.
    pub fn translation_key(&self) -> String {
        format!("commodity.{}", self.spec.name.to_lowercase())
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec.name)
    }
}

impl Serialize for Commodity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.spec.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_potato() {
        let potato = Commodity::from_name("Potato").expect("potato exists");
        assert_eq!(potato.name(), "Potato");
        assert_eq!(potato.base_price(), 28.0);
    }

    #[test]
    fn test_from_name_ignores_case_and_whitespace() {
        let tomato = Commodity::from_name("  tOMATO ").expect("tomato exists");
        assert_eq!(tomato.name(), "Tomato");
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Commodity::from_name("Saffron").unwrap_err();
        assert_eq!(
            err,
            PredictorError::UnknownCommodity {
                name: "Saffron".to_string()
            }
        );
        assert!(err.to_string().contains("Saffron"));
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<_> = Commodity::all().iter().map(|c| c.name()).collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_bounds_scale_with_base_price() {
        let potato = Commodity::from_name("potato").expect("potato exists");
        assert!((potato.price_floor() - 16.8).abs() < 1e-9);
        assert!((potato.price_ceiling() - 53.2).abs() < 1e-9);
    }

    #[test]
    fn test_all_prices_positive() {
        for commodity in Commodity::all() {
            assert!(commodity.base_price() > 0.0);
            assert!(commodity.trend_multiplier() > 0.0);
        }
    }

    #[test]
    fn test_translation_key() {
        let soybean = Commodity::from_name("Soybean").expect("soybean exists");
        assert_eq!(soybean.translation_key(), "commodity.soybean");
    }

    #[test]
    fn test_serializes_as_name() {
        let rice = Commodity::from_name("rice").expect("rice exists");
        assert_eq!(serde_json::to_string(&rice).expect("serialize"), "\"Rice\"");
    }
}
