//! Emissions dashboard: reads per-building CO2 CSV files and a monthly JSON
//! document, merges the buildings on a shared year-month axis and prepares
//! line charts filtered by year.

pub mod chart;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod export;
pub mod state;
