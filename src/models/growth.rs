use serde::{Deserialize, Serialize};

/// Phenological phase of a crop, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Seedling,
    Vegetative,
    Flowering,
    Harvesting,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Seedling,
            Stage::Vegetative,
            Stage::Flowering,
            Stage::Harvesting,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Seedling => "Seedling",
            Stage::Vegetative => "Vegetative",
            Stage::Flowering => "Flowering",
            Stage::Harvesting => "Harvesting",
        }
    }

    /// Label shown for the phase after this one.
    pub fn next_label(&self) -> &'static str {
        match self {
            Stage::Seedling => "Vegetative",
            Stage::Vegetative => "Flowering",
            Stage::Flowering => "Harvesting",
            Stage::Harvesting => "Harvest Complete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "seedling" => Some(Stage::Seedling),
            "vegetative" => Some(Stage::Vegetative),
            "flowering" => Some(Stage::Flowering),
            "harvesting" | "harvest" => Some(Stage::Harvesting),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStage {
    pub stage: Stage,
    pub days_since_sowing: i64,
    /// Percent through the current stage window, 0-100
    pub progress: f64,
    pub next_stage: String,
    pub days_to_next_stage: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Seedling < Stage::Vegetative);
        assert!(Stage::Vegetative < Stage::Flowering);
        assert!(Stage::Flowering < Stage::Harvesting);
    }

    #[test]
    fn stage_round_trip() {
        for stage in Stage::all() {
            assert_eq!(Stage::from_str(stage.as_str()), Some(*stage));
        }
        assert_eq!(Stage::from_str("ripening"), None);
    }

    #[test]
    fn growth_stage_serializes_camel_case() {
        let gs = GrowthStage {
            stage: Stage::Flowering,
            days_since_sowing: 70,
            progress: 50.0,
            next_stage: "Harvesting".into(),
            days_to_next_stage: 15,
        };
        let json = serde_json::to_value(&gs).unwrap();
        assert_eq!(json["stage"], "Flowering");
        assert_eq!(json["daysSinceSowing"], 70);
        assert_eq!(json["daysToNextStage"], 15);
    }
}
