//! Locale resolution and synthetic market predictions for the multilingual
//! farm advisory front-end.
//!
//! - [`i18n`]: language selection, persistence and key translation
//! - [`market`]: deterministic price series and sell/hold analysis
//! - [`report`]: localized text rendering of a market outlook

pub mod config;
pub mod i18n;
pub mod market;
pub mod report;
