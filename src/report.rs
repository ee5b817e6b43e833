//! Plain-text predictor report in the session language.

use crate::i18n::Translator;
use crate::market::{Commodity, Outlook};

/// Render the predictor card for one commodity.
///
/// Every label goes through the translator, so missing translations show up
/// as their keys rather than breaking the report.
pub fn render_outlook(t: &Translator<'_>, outlook: &Outlook) -> String {
    let analysis = &outlook.analysis;
    let commodity_name = localized_commodity(t, outlook.series.commodity);
    let days = outlook.series.len().to_string();

    let mut lines = vec![
        format!(
            "{} | {}: {} | {}",
            t.translate("predictor.title"),
            t.translate("predictor.commodity"),
            commodity_name,
            t.translate_with("predictor.horizon", &[("days", days.as_str())])
        ),
        format!(
            "{}: ₹{:.2}",
            t.translate("predictor.currentPrice"),
            analysis.current_price
        ),
        format!(
            "{}: ₹{:.2} ({}: {})",
            t.translate("predictor.bestPrice"),
            analysis.best_price,
            t.translate("predictor.bestSellDate"),
            analysis.best_sell_date.format("%Y-%m-%d")
        ),
        format!(
            "{}: {}% | {}: {}%",
            t.translate("predictor.confidence7"),
            analysis.confidence_7,
            t.translate("predictor.confidence30"),
            analysis.confidence_30
        ),
        format!(
            "→ {}",
            t.translate(analysis.optimal_action.translation_key())
        ),
    ];

    let advice_key = analysis.optimal_action.advice_key();
    if t.lookup(advice_key).is_some() {
        lines.push(t.translate_with(advice_key, &[("commodity", commodity_name.as_str())]));
    }

    lines.join("\n")
}

/// Localized commodity name, falling back to the catalog name.
pub fn localized_commodity(t: &Translator<'_>, commodity: Commodity) -> String {
    t.lookup(&commodity.translation_key())
        .map(str::to_string)
        .unwrap_or_else(|| commodity.name().to_string())
}
