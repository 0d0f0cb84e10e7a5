use super::{advise_irrigation, classify_weather_risk, growth_stage_for, score_crop_health};
use crate::models::{
    CropHealth, CropType, FarmProfile, GrowthStage, IrrigationAdvice, WeatherAlert,
    WeatherReading,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one farm on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub farm: String,
    /// Crop whose calendar was used, after fallback
    pub crop: CropType,
    pub date: NaiveDate,
    pub weather: WeatherReading,
    pub growth_stage: GrowthStage,
    pub alert: WeatherAlert,
    pub irrigation: IrrigationAdvice,
    pub health: CropHealth,
}

/// Runs the calculators in order: growth stage, weather alert, irrigation,
/// then health (which needs both the stage and the alert).
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryEngine;

impl AdvisoryEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, farm: &FarmProfile, weather: &WeatherReading, today: NaiveDate) -> Advisory {
        let crop = farm.crop();
        let growth_stage = growth_stage_for(crop, farm.sowing_date, today);
        let alert = classify_weather_risk(weather);
        let irrigation = advise_irrigation(weather, growth_stage.stage, &farm.crop_type);
        let health = score_crop_health(weather, growth_stage.stage, &alert);

        tracing::debug!(
            farm = %farm.name,
            stage = %growth_stage.stage,
            alert = %alert.alert_type,
            score = health.score,
            "Advisory computed"
        );

        Advisory {
            farm: farm.name.clone(),
            crop,
            date: today,
            weather: weather.clone(),
            growth_stage,
            alert,
            irrigation,
            health,
        }
    }
}
