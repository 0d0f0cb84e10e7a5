use serde::{Deserialize, Serialize};

/// Cumulative days after sowing at which each growth stage ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStageThresholds {
    pub seedling: i64,
    pub vegetative: i64,
    pub flowering: i64,
    pub harvesting: i64,
}

impl GrowthStageThresholds {
    pub const fn new(seedling: i64, vegetative: i64, flowering: i64, harvesting: i64) -> Self {
        Self {
            seedling,
            vegetative,
            flowering,
            harvesting,
        }
    }

    pub fn is_strictly_increasing(&self) -> bool {
        0 < self.seedling
            && self.seedling < self.vegetative
            && self.vegetative < self.flowering
            && self.flowering < self.harvesting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Cotton,
    Sugarcane,
    Soybean,
    Groundnut,
    Tomato,
    Potato,
    Onion,
    Chilli,
    Mustard,
    Sunflower,
    Pulses,
}

impl CropType {
    /// Crop used when a farm record names a crop we have no calendar for.
    pub const DEFAULT: CropType = CropType::Rice;

    pub fn all() -> &'static [CropType] {
        &[
            CropType::Rice,
            CropType::Wheat,
            CropType::Maize,
            CropType::Cotton,
            CropType::Sugarcane,
            CropType::Soybean,
            CropType::Groundnut,
            CropType::Tomato,
            CropType::Potato,
            CropType::Onion,
            CropType::Chilli,
            CropType::Mustard,
            CropType::Sunflower,
            CropType::Pulses,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Rice => "Rice",
            CropType::Wheat => "Wheat",
            CropType::Maize => "Maize",
            CropType::Cotton => "Cotton",
            CropType::Sugarcane => "Sugarcane",
            CropType::Soybean => "Soybean",
            CropType::Groundnut => "Groundnut",
            CropType::Tomato => "Tomato",
            CropType::Potato => "Potato",
            CropType::Onion => "Onion",
            CropType::Chilli => "Chilli",
            CropType::Mustard => "Mustard",
            CropType::Sunflower => "Sunflower",
            CropType::Pulses => "Pulses",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rice" | "paddy" => Some(CropType::Rice),
            "wheat" => Some(CropType::Wheat),
            "maize" | "corn" => Some(CropType::Maize),
            "cotton" => Some(CropType::Cotton),
            "sugarcane" => Some(CropType::Sugarcane),
            "soybean" | "soya" => Some(CropType::Soybean),
            "groundnut" | "peanut" => Some(CropType::Groundnut),
            "tomato" => Some(CropType::Tomato),
            "potato" => Some(CropType::Potato),
            "onion" => Some(CropType::Onion),
            "chilli" | "chili" => Some(CropType::Chilli),
            "mustard" => Some(CropType::Mustard),
            "sunflower" => Some(CropType::Sunflower),
            "pulses" => Some(CropType::Pulses),
            _ => None,
        }
    }

    pub fn thresholds(&self) -> GrowthStageThresholds {
        match self {
            CropType::Rice => GrowthStageThresholds::new(20, 55, 85, 120),
            CropType::Wheat => GrowthStageThresholds::new(15, 45, 75, 120),
            CropType::Maize => GrowthStageThresholds::new(15, 40, 65, 100),
            CropType::Cotton => GrowthStageThresholds::new(25, 60, 100, 180),
            CropType::Sugarcane => GrowthStageThresholds::new(35, 120, 270, 360),
            CropType::Soybean => GrowthStageThresholds::new(15, 35, 60, 100),
            CropType::Groundnut => GrowthStageThresholds::new(15, 40, 70, 110),
            CropType::Tomato => GrowthStageThresholds::new(20, 40, 60, 90),
            CropType::Potato => GrowthStageThresholds::new(15, 40, 60, 90),
            CropType::Onion => GrowthStageThresholds::new(20, 50, 80, 120),
            CropType::Chilli => GrowthStageThresholds::new(25, 50, 75, 120),
            CropType::Mustard => GrowthStageThresholds::new(15, 40, 70, 110),
            CropType::Sunflower => GrowthStageThresholds::new(15, 40, 65, 95),
            CropType::Pulses => GrowthStageThresholds::new(15, 35, 55, 90),
        }
    }

    /// Resolve a free-text crop name, falling back to [`CropType::DEFAULT`].
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::debug!(
                crop_type = %s,
                "Unknown crop type, using {} growth calendar",
                Self::DEFAULT
            );
            Self::DEFAULT
        })
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
