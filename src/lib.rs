//! Customer Explorer: a tabbed egui demo with a location-filtered
//! customer grid and an echoing login form.

pub mod app;
pub mod config;
pub mod data;
pub mod logging;
pub mod models;
pub mod ui;
