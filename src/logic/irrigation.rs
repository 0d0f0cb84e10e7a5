use crate::models::{IrrigationAdvice, Stage, WaterQuantity, WeatherReading};

const NORMAL_NOTES: &str = "Conditions normal. Follow standard schedule.";

struct StageBaseline {
    timing: &'static str,
    water: WaterQuantity,
    fertilizer: &'static str,
}

fn baseline(stage: Stage) -> StageBaseline {
    match stage {
        Stage::Seedling => StageBaseline {
            timing: "Light watering twice daily",
            water: WaterQuantity::Low,
            fertilizer: "Apply starter fertilizer after 7 days",
        },
        Stage::Vegetative => StageBaseline {
            timing: "Deep watering every 3-4 days",
            water: WaterQuantity::Medium,
            fertilizer: "Apply nitrogen-rich fertilizer",
        },
        Stage::Flowering => StageBaseline {
            timing: "Consistent moisture, water every 2-3 days",
            water: WaterQuantity::High,
            fertilizer: "Apply phosphorus-rich fertilizer",
        },
        Stage::Harvesting => StageBaseline {
            timing: "Reduce watering gradually",
            water: WaterQuantity::Low,
            fertilizer: "Stop fertilizer application",
        },
    }
}

struct WaterAdjustment {
    applies: fn(&WeatherReading) -> bool,
    /// `None` leaves the quantity alone and only adds the note
    water: Option<WaterQuantity>,
    note: &'static str,
}

// Applied in order and the last one to set a quantity wins, so a hot rainy
// day ends up Low.
const ADJUSTMENTS: &[WaterAdjustment] = &[
    WaterAdjustment {
        applies: |w| w.temperature > 35.0,
        water: Some(WaterQuantity::High),
        note: "Increased water due to high temperature.",
    },
    WaterAdjustment {
        applies: |w| w.rainfall > 10.0,
        water: Some(WaterQuantity::Low),
        note: "Reduced water due to rainfall.",
    },
    WaterAdjustment {
        applies: |w| w.humidity < 40.0,
        water: None,
        note: "Low humidity - consider misting for sensitive crops.",
    },
];

/// Watering and fertilizer advice for the current stage, adjusted for weather.
///
/// `_crop_type` is accepted so callers don't change when crop-specific
/// schedules are added; the current tables are the same for every crop.
pub fn advise_irrigation(weather: &WeatherReading, stage: Stage, _crop_type: &str) -> IrrigationAdvice {
    let base = baseline(stage);
    let mut water = base.water;
    let mut notes: Vec<&str> = Vec::new();

    for adjustment in ADJUSTMENTS.iter().filter(|a| (a.applies)(weather)) {
        if let Some(quantity) = adjustment.water {
            water = quantity;
        }
        notes.push(adjustment.note);
    }

    let notes = if notes.is_empty() {
        NORMAL_NOTES.to_string()
    } else {
        notes.join(" ")
    };

    IrrigationAdvice {
        timing: base.timing.to_string(),
        water_quantity: water,
        fertilizer_timing: base.fertilizer.to_string(),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal() -> WeatherReading {
        WeatherReading::new(28.0, 60.0, 0.0)
    }

    #[test]
    fn baseline_per_stage() {
        let expected = [
            (Stage::Seedling, WaterQuantity::Low),
            (Stage::Vegetative, WaterQuantity::Medium),
            (Stage::Flowering, WaterQuantity::High),
            (Stage::Harvesting, WaterQuantity::Low),
        ];
        for (stage, water) in expected {
            let advice = advise_irrigation(&normal(), stage, "Rice");
            assert_eq!(advice.water_quantity, water, "{}", stage);
            assert_eq!(advice.notes, NORMAL_NOTES);
        }
    }

    #[test]
    fn flowering_base_then_rain_override() {
        let advice = advise_irrigation(&normal(), Stage::Flowering, "Wheat");
        assert_eq!(advice.water_quantity, WaterQuantity::High);
        assert_eq!(advice.timing, "Consistent moisture, water every 2-3 days");
        assert_eq!(advice.fertilizer_timing, "Apply phosphorus-rich fertilizer");

        let rainy = WeatherReading::new(28.0, 60.0, 15.0);
        let advice = advise_irrigation(&rainy, Stage::Flowering, "Wheat");
        assert_eq!(advice.water_quantity, WaterQuantity::Low);
        assert_eq!(advice.notes, "Reduced water due to rainfall.");
    }

    #[test]
    fn heat_raises_water() {
        let hot = WeatherReading::new(37.0, 60.0, 0.0);
        let advice = advise_irrigation(&hot, Stage::Seedling, "Rice");
        assert_eq!(advice.water_quantity, WaterQuantity::High);
        assert_eq!(advice.notes, "Increased water due to high temperature.");
    }

    #[test]
    fn rain_overrides_heat_on_hot_rainy_day() {
        let hot_rainy = WeatherReading::new(38.0, 70.0, 12.0);
        let advice = advise_irrigation(&hot_rainy, Stage::Vegetative, "Rice");
        assert_eq!(advice.water_quantity, WaterQuantity::Low);
        assert_eq!(
            advice.notes,
            "Increased water due to high temperature. Reduced water due to rainfall."
        );
    }

    #[test]
    fn low_humidity_only_adds_note() {
        let dry = WeatherReading::new(28.0, 30.0, 0.0);
        let advice = advise_irrigation(&dry, Stage::Vegetative, "Rice");
        assert_eq!(advice.water_quantity, WaterQuantity::Medium);
        assert_eq!(
            advice.notes,
            "Low humidity - consider misting for sensitive crops."
        );
    }

    #[test]
    fn crop_type_does_not_change_advice() {
        let reading = WeatherReading::new(36.0, 35.0, 0.0);
        assert_eq!(
            advise_irrigation(&reading, Stage::Flowering, "Rice"),
            advise_irrigation(&reading, Stage::Flowering, "Cotton")
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let readings = [
            normal(),
            WeatherReading::new(38.0, 70.0, 12.0),
            WeatherReading::new(28.0, 30.0, 0.0),
        ];
        for reading in &readings {
            for stage in Stage::all() {
                assert_eq!(
                    advise_irrigation(reading, *stage, "Rice"),
                    advise_irrigation(reading, *stage, "Rice")
                );
            }
        }
    }
}
