//! Shared models and ports used across the scan pipeline

pub mod models;
pub mod ports;
