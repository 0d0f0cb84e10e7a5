use crate::error::{AgroPulseError, Result};
use crate::models::{CropType, FarmProfile, FarmSizeUnit, Season};
use chrono::NaiveDate;
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    pub openweathermap: Option<OpenWeatherMapConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub crop_type: String,
    pub sowing_date: NaiveDate,
    pub season: Option<String>,
    pub farm_size: Option<f64>,
    #[serde(default)]
    pub farm_size_unit: FarmSizeUnit,
    pub state: Option<String>,
    pub district: Option<String>,
}

impl FarmConfig {
    pub fn to_profile(&self) -> FarmProfile {
        let season = self.season.as_ref().and_then(|s| {
            Season::from_str(s).or_else(|| {
                tracing::warn!(season = %s, "Unknown season in config, ignoring");
                None
            })
        });

        if CropType::from_str(&self.crop_type).is_none() {
            tracing::warn!(
                crop_type = %self.crop_type,
                "Unknown crop type in config, growth stages will use the {} calendar",
                CropType::DEFAULT
            );
        }

        FarmProfile {
            name: self.name.clone(),
            crop_type: self.crop_type.clone(),
            sowing_date: self.sowing_date,
            season,
            farm_size: self.farm_size,
            farm_size_unit: self.farm_size_unit,
            state: self.state.clone(),
            district: self.district.clone(),
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgroPulseError::Config(format!(
                "Config file not found at {:?}. Run `agropulse init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgroPulseError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!(path = %config_path.display(), "Loading config");
        Self::from_yaml(&config_str)
    }

    /// Parse YAML config text, substituting `${VAR}` from the environment.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AgroPulseError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agropulse").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agropulse/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgroPulseError::Config("Cannot determine config directory".into()))?
            .join("agropulse");
        Ok(config_dir.join("config.yaml"))
    }

    /// Weather client settings, if configured with a key and enabled.
    pub fn weather(&self) -> Option<&OpenWeatherMapConfig> {
        self.openweathermap
            .as_ref()
            .filter(|c| c.enabled && !c.api_key.is_empty())
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgroPulse!");
        println!();

        println!("Farm");
        let name: String = prompt("  Farm name", "My Farm".to_string())?;
        let crop_type: String = prompt("  Crop (Rice, Wheat, Cotton, ...)", "Rice".to_string())?;
        let sowing_date: String = prompt(
            "  Sowing date (YYYY-MM-DD)",
            chrono::Local::now().date_naive().to_string(),
        )?;
        let sowing_date = NaiveDate::parse_from_str(&sowing_date, "%Y-%m-%d")
            .map_err(|e| AgroPulseError::Config(format!("Invalid sowing date: {}", e)))?;
        let season: String = prompt("  Season (Kharif, Rabi, Zaid)", "Kharif".to_string())?;
        let farm_size: f64 = prompt("  Farm size (acres)", 2.0)?;
        let state: String = prompt("  State", "Karnataka".to_string())?;
        let district: String = prompt("  District", "Mysore".to_string())?;

        println!();

        println!("OpenWeatherMap (leave API key blank to skip)");
        let owm_api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(input_error)?;

        let openweathermap = if owm_api_key.is_empty() {
            None
        } else {
            let latitude: f64 = prompt("  Latitude", 12.2958)?;
            let longitude: f64 = prompt("  Longitude", 76.6394)?;

            Some(OpenWeatherMapConfig {
                api_key: owm_api_key,
                latitude,
                longitude,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            farm: FarmConfig {
                name,
                crop_type,
                sowing_date,
                season: Some(season),
                farm_size: Some(farm_size),
                farm_size_unit: FarmSizeUnit::Acres,
                state: Some(state),
                district: Some(district),
            },
            openweathermap,
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgroPulseError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# AgroPulse Configuration\n# Generated by `agropulse init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

fn prompt<T>(label: &str, default: T) -> Result<T>
where
    T: Clone + std::fmt::Display + std::str::FromStr,
    T::Err: std::fmt::Display + std::fmt::Debug,
{
    Input::new()
        .with_prompt(label)
        .default(default)
        .interact_text()
        .map_err(input_error)
}

fn input_error(e: dialoguer::Error) -> AgroPulseError {
    AgroPulseError::Config(format!("Input error: {}", e))
}
