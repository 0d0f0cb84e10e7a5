pub mod advisory;
pub mod crop_health;
pub mod growth_stage;
pub mod irrigation;
pub mod market;
pub mod profit;
pub mod weather_risk;

pub use advisory::{Advisory, AdvisoryEngine};
pub use crop_health::score_crop_health;
pub use growth_stage::{compute_growth_stage, growth_stage_for};
pub use irrigation::advise_irrigation;
pub use market::{
    best_market_recommendation, filter_options, filter_prices, market_score, select_best_market,
};
pub use profit::{estimate_profit, expenses_by_category};
pub use weather_risk::classify_weather_risk;
