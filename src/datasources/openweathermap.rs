use crate::config::OpenWeatherMapConfig;
use crate::error::{AgroPulseError, Result};
use crate::models::WeatherReading;
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap current weather response
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    #[serde(default)]
    wind: Option<OwmWind>,
    #[serde(default)]
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn current_url(&self) -> String {
        format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, self.config.latitude, self.config.longitude, self.config.api_key
        )
    }

    /// Fetch current conditions at the configured coordinates
    pub async fn fetch_current(&self) -> Result<WeatherReading> {
        tracing::info!(
            lat = self.config.latitude,
            lon = self.config.longitude,
            "Fetching current weather"
        );

        let response = self
            .client
            .get(self.current_url())
            .send()
            .await
            .map_err(|e| AgroPulseError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgroPulseError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        let owm_response: OwmCurrentResponse = response.json().await.map_err(|e| {
            AgroPulseError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })?;

        let reading = convert_response(owm_response);
        tracing::debug!(?reading, "Weather reading received");
        Ok(reading)
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.current_url())
            .send()
            .await
            .map_err(|e| AgroPulseError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        Ok(response.status().is_success())
    }
}

fn convert_response(response: OwmCurrentResponse) -> WeatherReading {
    // Prefer the last hour's rain; a dry hour falls back to the 3-hour total
    let rainfall = response
        .rain
        .as_ref()
        .and_then(|r| r.one_hour.filter(|v| *v > 0.0).or(r.three_hour))
        .unwrap_or(0.0);

    let description = response
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    WeatherReading {
        temperature: response.main.temp.round(),
        humidity: response.main.humidity,
        rainfall,
        wind_speed: response.wind.map(|w| w.speed).unwrap_or(0.0).round(),
        description,
        feels_like: Some(response.main.feels_like.round()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> OpenWeatherMapConfig {
        OpenWeatherMapConfig {
            api_key: "test_key".to_string(),
            latitude: 12.2958,
            longitude: 76.6394,
            enabled: true,
        }
    }

    fn parse(json: &str) -> WeatherReading {
        convert_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn client_uses_metric_units() {
        let client = OpenWeatherMapClient::new(sample_config());
        let url = client.current_url();
        assert!(url.contains("units=metric"));
        assert!(url.contains("lat=12.2958"));
        assert!(url.contains("appid=test_key"));
    }

    #[test]
    fn converts_rainy_response() {
        let reading = parse(
            r#"{
                "weather": [{"id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d"}],
                "main": {"temp": 27.6, "feels_like": 30.2, "humidity": 88, "pressure": 1008},
                "wind": {"speed": 4.6},
                "rain": {"1h": 3.2}
            }"#,
        );
        assert_eq!(reading.temperature, 28.0);
        assert_eq!(reading.humidity, 88.0);
        assert_eq!(reading.rainfall, 3.2);
        assert_eq!(reading.wind_speed, 5.0);
        assert_eq!(reading.description, "moderate rain");
        assert_eq!(reading.feels_like, Some(30.0));
    }

    #[test]
    fn falls_back_to_three_hour_rain() {
        let reading = parse(
            r#"{
                "weather": [{"description": "light rain"}],
                "main": {"temp": 24.0, "feels_like": 24.0, "humidity": 80},
                "rain": {"3h": 7.5}
            }"#,
        );
        assert_eq!(reading.rainfall, 7.5);
    }

    #[test]
    fn zero_one_hour_rain_uses_three_hour_total() {
        let reading = parse(
            r#"{
                "weather": [{"description": "light rain"}],
                "main": {"temp": 24.0, "feels_like": 24.0, "humidity": 80},
                "rain": {"1h": 0, "3h": 4.5}
            }"#,
        );
        assert_eq!(reading.rainfall, 4.5);

        let reading = parse(
            r#"{"main": {"temp": 24.0, "feels_like": 24.0, "humidity": 80}, "rain": {"1h": 0}}"#,
        );
        assert_eq!(reading.rainfall, 0.0);
    }

    #[test]
    fn dry_response_without_optional_blocks() {
        let reading = parse(r#"{"main": {"temp": 36.4, "feels_like": 38.9, "humidity": 22}}"#);
        assert_eq!(reading.temperature, 36.0);
        assert_eq!(reading.rainfall, 0.0);
        assert_eq!(reading.wind_speed, 0.0);
        assert_eq!(reading.description, "Unknown");
    }
}
