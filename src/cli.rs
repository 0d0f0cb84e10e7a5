use agropulse::models::{Stage, WeatherReading};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "agropulse",
    version,
    about = "Crop advisories, weather alerts and mandi prices for your farm"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Manual weather values; when temperature and humidity are both absent the
/// live reading from OpenWeatherMap is used instead.
#[derive(Args, Debug, Default, Clone)]
pub struct WeatherArgs {
    /// Temperature, °C
    #[arg(long, allow_negative_numbers = true)]
    pub temp: Option<f64>,

    /// Relative humidity, %
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Rainfall, mm
    #[arg(long)]
    pub rain: Option<f64>,

    /// Wind speed, m/s
    #[arg(long)]
    pub wind: Option<f64>,
}

impl WeatherArgs {
    pub fn is_manual(&self) -> bool {
        self.temp.is_some() || self.humidity.is_some()
    }

    /// Build a reading from the flags. Missing rainfall and wind count as zero.
    pub fn manual_reading(&self) -> Option<WeatherReading> {
        let temperature = self.temp?;
        let humidity = self.humidity?;
        Some(
            WeatherReading::new(temperature, humidity, self.rain.unwrap_or(0.0))
                .with_wind_speed(self.wind.unwrap_or(0.0))
                .with_description("Manual entry"),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the crop's growth stage
    Stage {
        /// Crop name, defaults to the configured farm's crop
        #[arg(long)]
        crop: Option<String>,

        /// Sowing date (YYYY-MM-DD), defaults to the configured farm's
        #[arg(long)]
        sown: Option<NaiveDate>,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Classify weather risk
    Weather {
        #[command(flatten)]
        weather: WeatherArgs,
    },
    /// Full advisory for the configured farm
    Advise {
        #[command(flatten)]
        weather: WeatherArgs,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List mandi prices and pick the best market
    Market {
        /// JSON file with price quotes
        prices: PathBuf,

        #[arg(long)]
        district: Option<String>,

        #[arg(long)]
        market: Option<String>,

        #[arg(long)]
        commodity: Option<String>,
    },
    /// Estimate season profit from expenses
    Profit {
        /// JSON file with expenses
        expenses: PathBuf,

        /// Expected yield, quintals
        #[arg(long = "yield")]
        expected_yield: f64,

        /// Expected modal price, ₹ per quintal
        #[arg(long)]
        price: f64,
    },
    /// Irrigation and fertilizer advice for a given growth stage
    Irrigate {
        /// Seedling, Vegetative, Flowering or Harvesting
        #[arg(long, value_parser = parse_stage)]
        stage: Stage,

        /// Crop name, defaults to Rice
        #[arg(long)]
        crop: Option<String>,

        #[command(flatten)]
        weather: WeatherArgs,
    },
    /// List supported crops and their growth calendars
    Crops,
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}

fn parse_stage(s: &str) -> Result<Stage, String> {
    Stage::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Stage::all().iter().map(Stage::as_str).collect();
        format!("unknown stage '{}', expected one of: {}", s, names.join(", "))
    })
}
