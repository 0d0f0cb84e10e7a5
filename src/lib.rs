//! Weather-driven crop advisories for Indian farms.
//!
//! The [`logic`] module holds the advisory engine: growth stage, weather
//! alerts, irrigation advice, crop health and market selection. Every
//! function there is pure; fetching weather and loading price lists lives in
//! [`datasources`].

pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;

pub use error::{AgroPulseError, Result};
