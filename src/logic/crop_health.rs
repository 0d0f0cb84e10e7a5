use crate::models::{AlertSeverity, CropHealth, HealthStatus, Stage, WeatherAlert, WeatherReading};

/// Crop health score
///
/// Starts from 100 and subtracts a penalty for every stress present. Unlike
/// weather alerts, penalties stack.
///
/// - Heat: >38°C -25, >35°C -10
/// - Humidity: >85% -15 (disease), <30% -10
/// - Rainfall >50mm: -20 (waterlogging)
/// - Alert severity: high -20, medium -10
/// - Flowering with >35°C or >30mm rain: -15
pub fn score_crop_health(weather: &WeatherReading, stage: Stage, alert: &WeatherAlert) -> CropHealth {
    let mut score: i32 = 100;
    let mut factors: Vec<String> = Vec::new();

    let mut penalize = |points: i32, factor: Option<&str>| {
        score -= points;
        if let Some(f) = factor {
            factors.push(f.to_string());
        }
    };

    if weather.temperature > 38.0 {
        penalize(25, Some("Heat stress risk"));
    } else if weather.temperature > 35.0 {
        penalize(10, Some("Moderate heat"));
    }

    if weather.humidity > 85.0 {
        penalize(15, Some("Disease risk from high humidity"));
    } else if weather.humidity < 30.0 {
        penalize(10, Some("Low humidity stress"));
    }

    if weather.rainfall > 50.0 {
        penalize(20, Some("Waterlogging risk"));
    }

    match alert.severity {
        AlertSeverity::High => penalize(20, None),
        AlertSeverity::Medium => penalize(10, None),
        AlertSeverity::Low => {}
    }

    if stage == Stage::Flowering && (weather.temperature > 35.0 || weather.rainfall > 30.0) {
        penalize(15, Some("Critical flowering stage at risk"));
    }

    if factors.is_empty() {
        factors.push("All conditions favorable".to_string());
    }

    let score = score.max(0);

    CropHealth {
        status: HealthStatus::from_score(score),
        score,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify_weather_risk;
    use crate::models::AlertType;

    fn alert(severity: AlertSeverity) -> WeatherAlert {
        WeatherAlert {
            alert_type: AlertType::Normal,
            severity,
            message: String::new(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn favorable_conditions_score_full() {
        let reading = WeatherReading::new(28.0, 60.0, 0.0);
        let health = score_crop_health(&reading, Stage::Vegetative, &alert(AlertSeverity::Low));
        assert_eq!(health.score, 100);
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.factors, vec!["All conditions favorable"]);
    }

    #[test]
    fn penalties_stack() {
        let reading = WeatherReading::new(39.0, 90.0, 0.0);
        let health = score_crop_health(&reading, Stage::Vegetative, &alert(AlertSeverity::High));
        assert_eq!(health.score, 40);
        assert_eq!(health.status, HealthStatus::Moderate);
        assert_eq!(
            health.factors,
            vec!["Heat stress risk", "Disease risk from high humidity"]
        );
    }

    #[test]
    fn severity_penalty_adds_no_factor() {
        let reading = WeatherReading::new(28.0, 60.0, 0.0);
        let health = score_crop_health(&reading, Stage::Seedling, &alert(AlertSeverity::Medium));
        assert_eq!(health.score, 90);
        assert_eq!(health.factors, vec!["All conditions favorable"]);
    }

    #[test]
    fn moderate_heat_and_low_humidity() {
        let reading = WeatherReading::new(36.0, 25.0, 0.0);
        let health = score_crop_health(&reading, Stage::Seedling, &alert(AlertSeverity::Low));
        assert_eq!(health.score, 80);
        assert_eq!(health.factors, vec!["Moderate heat", "Low humidity stress"]);
    }

    #[test]
    fn flowering_is_sensitive_to_rain() {
        let reading = WeatherReading::new(28.0, 60.0, 35.0);
        let at_flowering =
            score_crop_health(&reading, Stage::Flowering, &alert(AlertSeverity::Medium));
        assert_eq!(at_flowering.score, 75);
        assert_eq!(at_flowering.factors, vec!["Critical flowering stage at risk"]);

        let at_vegetative =
            score_crop_health(&reading, Stage::Vegetative, &alert(AlertSeverity::Medium));
        assert_eq!(at_vegetative.score, 90);
    }

    #[test]
    fn every_penalty_at_once() {
        // 25 + 15 + 20 + 20 + 15
        let reading = WeatherReading::new(45.0, 95.0, 80.0);
        let health = score_crop_health(&reading, Stage::Flowering, &alert(AlertSeverity::High));
        assert_eq!(health.score, 5);
        assert_eq!(health.status, HealthStatus::Risk);
        assert_eq!(health.factors.len(), 4);
    }

    #[test]
    fn uses_classified_alert() {
        let reading = WeatherReading::new(30.0, 70.0, 60.0);
        let alert = classify_weather_risk(&reading);
        let health = score_crop_health(&reading, Stage::Harvesting, &alert);
        // -20 waterlogging, -20 high heavy_rain alert
        assert_eq!(health.score, 60);
        assert_eq!(health.status, HealthStatus::Moderate);
        assert_eq!(health.factors, vec!["Waterlogging risk"]);
    }

    #[test]
    fn repeated_calls_agree() {
        let reading = WeatherReading::new(37.0, 88.0, 55.0);
        let alert = classify_weather_risk(&reading);
        assert_eq!(
            score_crop_health(&reading, Stage::Flowering, &alert),
            score_crop_health(&reading, Stage::Flowering, &alert)
        );
    }
}
