use super::crop::CropType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif (Monsoon)",
            Season::Rabi => "Rabi (Winter)",
            Season::Zaid => "Zaid (Summer)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kharif" | "monsoon" => Some(Season::Kharif),
            "rabi" | "winter" => Some(Season::Rabi),
            "zaid" | "summer" => Some(Season::Zaid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmSizeUnit {
    #[default]
    Acres,
    Hectares,
}

impl FarmSizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmSizeUnit::Acres => "acres",
            FarmSizeUnit::Hectares => "hectares",
        }
    }
}

/// The farm the advisory is computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub name: String,
    /// Free text as entered by the farmer; resolved against the crop catalogue on use
    pub crop_type: String,
    pub sowing_date: NaiveDate,
    pub season: Option<Season>,
    pub farm_size: Option<f64>,
    #[serde(default)]
    pub farm_size_unit: FarmSizeUnit,
    pub state: Option<String>,
    pub district: Option<String>,
}

impl FarmProfile {
    pub fn new(name: String, crop_type: String, sowing_date: NaiveDate) -> Self {
        Self {
            name,
            crop_type,
            sowing_date,
            season: None,
            farm_size: None,
            farm_size_unit: FarmSizeUnit::Acres,
            state: None,
            district: None,
        }
    }

    pub fn crop(&self) -> CropType {
        CropType::resolve(&self.crop_type)
    }

    pub fn farm_size_hectares(&self) -> Option<f64> {
        self.farm_size.map(|size| match self.farm_size_unit {
            FarmSizeUnit::Hectares => size,
            FarmSizeUnit::Acres => size * 0.404_686,
        })
    }

    /// e.g. "3.5 acres (1.42 ha)"
    pub fn size_label(&self) -> Option<String> {
        let size = self.farm_size?;
        let hectares = self.farm_size_hectares()?;
        Some(match self.farm_size_unit {
            FarmSizeUnit::Hectares => format!("{} {}", size, self.farm_size_unit.as_str()),
            FarmSizeUnit::Acres => format!(
                "{} {} ({:.2} ha)",
                size,
                self.farm_size_unit.as_str(),
                hectares
            ),
        })
    }

    /// "district, state", or whichever of the two is set.
    pub fn location(&self) -> Option<String> {
        match (&self.district, &self.state) {
            (Some(d), Some(s)) => Some(format!("{}, {}", d, s)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}
