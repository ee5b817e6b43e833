//! Market predictor report in the active language.
//!
//! Usage:
//!   agri-insights                      # Report for DEFAULT_COMMODITY
//!   agri-insights Onion                # Report for a specific commodity
//!   agri-insights --lang hi Onion      # Switch (and persist) the language first
//!   agri-insights --all                # Report for every catalog commodity
//!   agri-insights --json Onion         # Series and analysis as JSON
//!
//! Optional environment variables:
//! - APP_LANGUAGE (explicit language override)
//! - LOCALE_STORE_PATH (defaults to data/locale.json)
//! - DEFAULT_COMMODITY (defaults to Tomato)
//! - PREDICTOR_HORIZON_DAYS (defaults to 30)

use agri_insights::config::Config;
use agri_insights::i18n::{FileLocaleStore, LocaleSession, LookupMetrics};
use agri_insights::market::{market_overview, outlook, Commodity, Outlook};
use agri_insights::report::render_outlook;
use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing::{debug, info};

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    language: Option<String>,
    commodity: Option<String>,
    all: bool,
    json: bool,
}

impl Args {
    fn parse(raw: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        let mut raw = raw.into_iter();

        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--lang" => {
                    args.language = Some(raw.next().context("--lang needs a language code")?);
                }
                "--all" => args.all = true,
                "--json" => args.json = true,
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                _ if args.commodity.is_none() => args.commodity = Some(arg),
                _ => bail!("Unexpected argument: {}", arg),
            }
        }

        Ok(args)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agri_insights=info".parse()?),
        )
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    let store = FileLocaleStore::new(&config.locale_store_path);
    let mut session = LocaleSession::start(
        store,
        config.language_override.clone(),
        config.platform_language.clone(),
    );
    if let Some(language) = &args.language {
        session.set_language(language);
    }
    let t = session.translator();

    let today = Local::now().date_naive();
    let outlooks: Vec<Outlook> = if args.all {
        let names: Vec<String> = Commodity::all()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        market_overview(&names, config.horizon_days, today)
            .await
            .into_iter()
            .map(|entry| entry.outlook.with_context(|| format!("Outlook for {}", entry.name)))
            .collect::<Result<_>>()?
    } else {
        let name = args
            .commodity
            .as_deref()
            .unwrap_or(&config.default_commodity);
        let commodity = Commodity::from_name(name)?;
        vec![outlook(commodity, config.horizon_days, today)?]
    };

    info!(
        "Rendering {} outlook(s) in '{}'",
        outlooks.len(),
        t.language()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outlooks)?);
    } else {
        let cards: Vec<String> = outlooks.iter().map(|o| render_outlook(&t, o)).collect();
        println!("{}", cards.join("\n\n"));
    }

    debug!("{}", LookupMetrics::global().report().format_log());
    Ok(())
}
