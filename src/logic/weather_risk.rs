use crate::models::{AlertSeverity, AlertType, WeatherAlert, WeatherReading};

/// One row of the alert table: a condition and the alert it raises.
pub struct AlertRule {
    pub applies: fn(&WeatherReading) -> bool,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: &'static str,
    pub recommendation: &'static str,
}

impl AlertRule {
    fn to_alert(&self) -> WeatherAlert {
        WeatherAlert {
            alert_type: self.alert_type,
            severity: self.severity,
            message: self.message.to_string(),
            recommendation: self.recommendation.to_string(),
        }
    }
}

/// Evaluated top to bottom; the first match is the only alert raised, so
/// extreme heat masks a simultaneous drought and so on. Keep the order.
pub const ALERT_RULES: &[AlertRule] = &[
    AlertRule {
        applies: |w| w.temperature > 40.0,
        alert_type: AlertType::Heatwave,
        severity: AlertSeverity::High,
        message: "Extreme heat warning!",
        recommendation: "Increase irrigation frequency. Provide shade if possible. \
                         Water during early morning or evening.",
    },
    AlertRule {
        applies: |w| w.temperature > 35.0,
        alert_type: AlertType::Heatwave,
        severity: AlertSeverity::Medium,
        message: "High temperature alert",
        recommendation: "Increase watering. Monitor crop for heat stress signs.",
    },
    AlertRule {
        applies: |w| w.rainfall > 50.0,
        alert_type: AlertType::HeavyRain,
        severity: AlertSeverity::High,
        message: "Heavy rain expected",
        recommendation: "Delay irrigation. Ensure proper drainage. \
                         Postpone fertilizer application.",
    },
    AlertRule {
        applies: |w| w.rainfall > 20.0,
        alert_type: AlertType::HeavyRain,
        severity: AlertSeverity::Medium,
        message: "Rain expected",
        recommendation: "Delay irrigation for 2-3 days. Check for waterlogging.",
    },
    AlertRule {
        applies: |w| w.temperature < 5.0,
        alert_type: AlertType::Frost,
        severity: AlertSeverity::High,
        message: "Frost warning!",
        recommendation: "Cover sensitive crops. Water soil before sunset to retain heat.",
    },
    AlertRule {
        applies: |w| w.humidity < 30.0 && w.rainfall == 0.0,
        alert_type: AlertType::Drought,
        severity: AlertSeverity::Medium,
        message: "Dry conditions",
        recommendation: "Increase irrigation. Consider mulching to retain soil moisture.",
    },
];

const FAVORABLE: AlertRule = AlertRule {
    applies: |_| true,
    alert_type: AlertType::Normal,
    severity: AlertSeverity::Low,
    message: "Weather conditions are favorable",
    recommendation: "Continue normal farming activities. Maintain regular irrigation schedule.",
};

/// Classify a reading into exactly one alert.
pub fn classify_weather_risk(weather: &WeatherReading) -> WeatherAlert {
    ALERT_RULES
        .iter()
        .find(|rule| (rule.applies)(weather))
        .unwrap_or(&FAVORABLE)
        .to_alert()
}
