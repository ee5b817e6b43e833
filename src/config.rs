use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Locale
    pub language_override: Option<String>,
    pub platform_language: Option<String>,
    pub locale_store_path: String,

    // Predictor
    pub default_commodity: String,
    pub horizon_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locale - explicit override beats anything persisted
            language_override: non_empty_var("APP_LANGUAGE"),
            platform_language: platform_language(),
            locale_store_path: std::env::var("LOCALE_STORE_PATH")
                .unwrap_or_else(|_| "data/locale.json".to_string()),

            // Predictor
            default_commodity: std::env::var("DEFAULT_COMMODITY")
                .unwrap_or_else(|_| "Tomato".to_string()),
            horizon_days: match std::env::var("PREDICTOR_HORIZON_DAYS") {
                Ok(value) => parse_horizon(&value)
                    .context("PREDICTOR_HORIZON_DAYS must be a positive whole number of days")?,
                Err(_) => 30,
            },
        })
    }
}

/// Language reported by the platform, POSIX style (`hi_IN.UTF-8`).
fn platform_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|key| non_empty_var(key))
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_horizon(value: &str) -> Result<u32> {
    let days: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid horizon '{}'", value))?;
    if days == 0 {
        bail!("horizon cannot be zero");
    }
    Ok(days)
}
