mod cli;
mod output;

use agropulse::config::Config;
use agropulse::datasources::{load_expenses, load_prices, OpenWeatherMapClient};
use agropulse::logic::{
    advise_irrigation, classify_weather_risk, compute_growth_stage, estimate_profit,
    expenses_by_category, filter_options, filter_prices, select_best_market, AdvisoryEngine,
};
use agropulse::models::{CropType, MandiPrice, PriceFilter, WeatherReading};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands, WeatherArgs};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Stage { crop, sown, today } => {
            let (crop_type, sowing_date) = match (crop, sown) {
                (Some(crop), Some(sown)) => (crop, sown),
                (crop, sown) => {
                    let config = load_config(cli.config)?;
                    (
                        crop.unwrap_or(config.farm.crop_type),
                        sown.unwrap_or(config.farm.sowing_date),
                    )
                }
            };
            let today = today.unwrap_or_else(local_today);
            let gs = compute_growth_stage(sowing_date, &crop_type, today);
            let crop = CropType::resolve(&crop_type);

            if cli.json {
                output::print_json(&json!({ "crop": crop, "growthStage": gs }))?;
            } else {
                output::print_growth_stage(crop, &gs);
            }
        }
        Commands::Weather { weather } => {
            let reading = resolve_weather(&weather, cli.config).await?;
            let alert = classify_weather_risk(&reading);

            if cli.json {
                output::print_json(&json!({ "weather": reading, "alert": alert }))?;
            } else {
                output::print_weather(&reading);
                output::print_alert(&alert);
            }
        }
        Commands::Advise { weather, today } => {
            let config = load_config(cli.config.clone())?;
            let farm = config.farm.to_profile();
            let reading = resolve_weather(&weather, cli.config).await?;
            let today = today.unwrap_or_else(local_today);

            let advisory = AdvisoryEngine::new().evaluate(&farm, &reading, today);

            if cli.json {
                output::print_json(&advisory)?;
            } else {
                output::print_farm(&farm);
                println!();
                output::print_advisory(&advisory);
            }
        }
        Commands::Market {
            prices,
            district,
            market,
            commodity,
        } => {
            let all_prices = load_prices(&prices)
                .with_context(|| format!("loading prices from {}", prices.display()))?;
            let filter = PriceFilter {
                district,
                market,
                commodity,
            };
            let matched: Vec<MandiPrice> = filter_prices(&all_prices, &filter)
                .into_iter()
                .cloned()
                .collect();
            let best = select_best_market(&matched);
            tracing::info!(total = all_prices.len(), matched = matched.len(), "Prices filtered");

            if cli.json {
                output::print_json(&json!({
                    "prices": matched,
                    "bestMarket": best,
                    "filterOptions": filter_options(&all_prices),
                }))?;
            } else {
                output::print_prices(&matched, best);
            }
        }
        Commands::Profit {
            expenses,
            expected_yield,
            price,
        } => {
            let expenses = load_expenses(&expenses)
                .with_context(|| format!("loading expenses from {}", expenses.display()))?;
            let estimate = estimate_profit(&expenses, expected_yield, price);
            let by_category = expenses_by_category(&expenses);

            if cli.json {
                output::print_json(&estimate)?;
            } else {
                output::print_profit(&estimate, &by_category);
            }
        }
        Commands::Irrigate {
            stage,
            crop,
            weather,
        } => {
            let reading = resolve_weather(&weather, cli.config).await?;
            let crop_type = crop.unwrap_or_else(|| CropType::DEFAULT.as_str().to_string());
            let advice = advise_irrigation(&reading, stage, &crop_type);

            if cli.json {
                output::print_json(&json!({
                    "stage": stage,
                    "weather": reading,
                    "irrigation": advice,
                }))?;
            } else {
                output::print_weather(&reading);
                println!();
                output::print_irrigation(&advice);
            }
        }
        Commands::Crops => {
            if cli.json {
                let crops: Vec<_> = CropType::all()
                    .iter()
                    .map(|c| json!({ "crop": c, "thresholds": c.thresholds() }))
                    .collect();
                output::print_json(&crops)?;
            } else {
                output::print_crops();
            }
        }
        Commands::Init => {
            let (config, path) = Config::setup_interactive()?;
            tracing::info!(path = %path.display(), farm = %config.farm.name, "Config written");
        }
        Commands::Check => check(cli.config).await?,
    }

    Ok(())
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_config(config_override: Option<PathBuf>) -> anyhow::Result<Config> {
    if !Config::exists(config_override.as_ref()) {
        bail!("No configuration found. Run `agropulse init` to create one.");
    }
    Ok(Config::load(config_override)?)
}

/// Manual flags when given, otherwise the live reading for the configured farm.
async fn resolve_weather(
    args: &WeatherArgs,
    config_override: Option<PathBuf>,
) -> anyhow::Result<WeatherReading> {
    if args.is_manual() {
        return args
            .manual_reading()
            .context("--temp and --humidity must be given together");
    }

    let config = load_config(config_override)?;
    let owm = config
        .weather()
        .context("OpenWeatherMap is not configured; pass --temp and --humidity instead")?;

    let reading = OpenWeatherMapClient::new(owm.clone())
        .fetch_current()
        .await
        .context("fetching current weather")?;
    Ok(reading)
}

async fn check(config_override: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_override)?;
    let farm = config.farm.to_profile();

    println!("Config OK");
    output::print_farm(&farm);

    match config.weather() {
        Some(owm) => {
            let client = OpenWeatherMapClient::new(owm.clone());
            match client.test_connection().await {
                Ok(true) => println!("  OpenWeatherMap: OK"),
                Ok(false) => println!("  OpenWeatherMap: rejected request (check API key)"),
                Err(e) => {
                    tracing::warn!("OpenWeatherMap check failed: {}", e);
                    println!("  OpenWeatherMap: OFFLINE");
                }
            }
        }
        None => println!("  OpenWeatherMap: not configured"),
    }

    Ok(())
}
