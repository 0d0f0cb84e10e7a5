use crate::models::{CropType, GrowthStage, Stage};
use chrono::NaiveDate;

/// Work out where a crop sits in its lifecycle on `today`.
///
/// Unknown crop names use the default crop's calendar. A sowing date in the
/// future yields Seedling at 0% progress rather than an error.
pub fn compute_growth_stage(sowing_date: NaiveDate, crop_type: &str, today: NaiveDate) -> GrowthStage {
    growth_stage_for(CropType::resolve(crop_type), sowing_date, today)
}

/// Same as [`compute_growth_stage`] for an already resolved crop.
pub fn growth_stage_for(crop: CropType, sowing_date: NaiveDate, today: NaiveDate) -> GrowthStage {
    let thresholds = crop.thresholds();
    let days = (today - sowing_date).num_days();

    let windows = [
        (Stage::Seedling, 0, thresholds.seedling),
        (Stage::Vegetative, thresholds.seedling, thresholds.vegetative),
        (Stage::Flowering, thresholds.vegetative, thresholds.flowering),
    ];

    let (stage, start, end) = windows
        .iter()
        .copied()
        .find(|(_, _, end)| days <= *end)
        .unwrap_or((Stage::Harvesting, thresholds.flowering, thresholds.harvesting));

    let progress = ((days - start) as f64 / (end - start) as f64 * 100.0).clamp(0.0, 100.0);

    GrowthStage {
        stage,
        days_since_sowing: days,
        progress,
        next_stage: stage.next_label().to_string(),
        days_to_next_stage: (end - days).max(0),
    }
}
