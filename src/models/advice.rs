use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WaterQuantity {
    Low,
    Medium,
    High,
}

impl WaterQuantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterQuantity::Low => "Low",
            WaterQuantity::Medium => "Medium",
            WaterQuantity::High => "High",
        }
    }
}

impl std::fmt::Display for WaterQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationAdvice {
    pub timing: String,
    pub water_quantity: WaterQuantity,
    pub fertilizer_timing: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Moderate,
    Risk,
}

impl HealthStatus {
    pub fn from_score(score: i32) -> Self {
        if score >= 70 {
            HealthStatus::Healthy
        } else if score >= 40 {
            HealthStatus::Moderate
        } else {
            HealthStatus::Risk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Moderate => "Moderate",
            HealthStatus::Risk => "Risk",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropHealth {
    pub status: HealthStatus,
    pub score: i32,
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(HealthStatus::from_score(100), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(70), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(69), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_score(40), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_score(39), HealthStatus::Risk);
        assert_eq!(HealthStatus::from_score(0), HealthStatus::Risk);
    }

    #[test]
    fn irrigation_advice_serializes_camel_case() {
        let advice = IrrigationAdvice {
            timing: "Reduce watering gradually".into(),
            water_quantity: WaterQuantity::Low,
            fertilizer_timing: "Stop fertilizer application".into(),
            notes: "Conditions normal. Follow standard schedule.".into(),
        };
        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["waterQuantity"], "Low");
        assert_eq!(json["fertilizerTiming"], "Stop fertilizer application");
    }
}
