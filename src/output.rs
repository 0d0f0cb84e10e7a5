use agropulse::logic::{best_market_recommendation, market_score, Advisory};
use agropulse::models::{
    CropType, ExpenseCategory, FarmProfile, GrowthStage, IrrigationAdvice, MandiPrice,
    ProfitEstimate, WeatherAlert, WeatherReading,
};

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_farm(farm: &FarmProfile) {
    println!("Farm: {} ({} sown {})", farm.name, farm.crop(), farm.sowing_date);
    if let Some(season) = farm.season {
        println!("  Season:   {}", season);
    }
    if let Some(size) = farm.size_label() {
        println!("  Size:     {}", size);
    }
    if let Some(location) = farm.location() {
        println!("  Location: {}", location);
    }
}

pub fn print_growth_stage(crop: CropType, gs: &GrowthStage) {
    println!("{} - {}", crop, gs.stage);
    println!("  Days since sowing: {}", gs.days_since_sowing);
    println!("  Stage progress:    {:.0}%", gs.progress);
    println!("  Next:              {} in {} days", gs.next_stage, gs.days_to_next_stage);
}

pub fn print_weather(weather: &WeatherReading) {
    println!(
        "Weather: {:.0}°C, {:.0}% humidity, {:.1} mm rain, wind {:.0} m/s{}",
        weather.temperature,
        weather.humidity,
        weather.rainfall,
        weather.wind_speed,
        if weather.description.is_empty() {
            String::new()
        } else {
            format!(" ({})", weather.description)
        }
    );
}

pub fn print_alert(alert: &WeatherAlert) {
    println!(
        "{} {} [{}]: {}",
        alert.severity.symbol(),
        alert.alert_type,
        alert.severity,
        alert.message
    );
    println!("  {}", alert.recommendation);
}

pub fn print_advisory(advisory: &Advisory) {
    println!("{} - {}", advisory.farm, advisory.date);
    println!();
    print_weather(&advisory.weather);
    println!();
    print_growth_stage(advisory.crop, &advisory.growth_stage);
    println!();
    print_alert(&advisory.alert);
    println!();
    print_irrigation(&advisory.irrigation);
    println!();
    println!(
        "Crop health: {} ({}/100)",
        advisory.health.status, advisory.health.score
    );
    for factor in &advisory.health.factors {
        println!("  - {}", factor);
    }
}

pub fn print_irrigation(advice: &IrrigationAdvice) {
    println!("Irrigation");
    println!("  Timing:     {}", advice.timing);
    println!("  Water:      {}", advice.water_quantity);
    println!("  Fertilizer: {}", advice.fertilizer_timing);
    println!("  Notes:      {}", advice.notes);
}

pub fn print_prices(prices: &[MandiPrice], best: Option<&MandiPrice>) {
    if prices.is_empty() {
        println!("No price data matches the filter.");
        return;
    }

    println!(
        "{:<24} {:<14} {:<12} {:>8} {:>8} {:>8} {:>7} {:>7}",
        "Market", "District", "Commodity", "Min", "Modal", "Max", "Spread", "Km"
    );
    for price in prices {
        let marker = if best.is_some_and(|b| std::ptr::eq(b, price)) {
            "*"
        } else {
            " "
        };
        println!(
            "{}{:<23} {:<14} {:<12} {:>8.0} {:>8.0} {:>8.0} {:>7.0} {:>7}",
            marker,
            price.market,
            price.district,
            price.commodity,
            price.min_price,
            price.modal_price,
            price.max_price,
            price.price_spread(),
            price
                .distance
                .map(|d| format!("{:.0}", d))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    if let Some(best) = best {
        println!();
        println!("{}", best_market_recommendation(best));
        println!("  Distance-adjusted score: {:.0}", market_score(best));
    }
}

pub fn print_profit(estimate: &ProfitEstimate, by_category: &[(ExpenseCategory, f64)]) {
    println!("Expenses");
    for (category, amount) in by_category {
        println!("  {:<12} ₹{:.0}", category.as_str(), amount);
    }
    println!("  {:<12} ₹{:.0}", "Total", estimate.total_expenses);
    println!();
    println!(
        "Expected revenue: ₹{:.0} ({:.1} quintals)",
        estimate.expected_revenue, estimate.expected_yield
    );
    let label = if estimate.is_profitable {
        "Expected profit"
    } else {
        "Expected loss"
    };
    println!("{}: ₹{:.0}", label, estimate.profit_or_loss.abs());
}

pub fn print_crops() {
    println!(
        "{:<10} {:>9} {:>11} {:>10} {:>11}",
        "Crop", "Seedling", "Vegetative", "Flowering", "Harvesting"
    );
    for crop in CropType::all() {
        let t = crop.thresholds();
        println!(
            "{:<10} {:>9} {:>11} {:>10} {:>11}",
            crop.as_str(), t.seedling, t.vegetative, t.flowering, t.harvesting
        );
    }
}
