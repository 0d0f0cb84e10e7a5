pub mod files;
pub mod openweathermap;

pub use files::{load_expenses, load_prices};
pub use openweathermap::OpenWeatherMapClient;
