use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::season::Season;

//##########################################################
// Observation
//##########################################################

/// One site-month satellite observation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Monitoring site identifier.
    pub site: String,
    /// Calendar month number, 1..=12. Validated on dataset construction.
    #[serde(rename = "month")]
    pub month_number: u8,
    pub lat: f64,
    pub lon: f64,
    /// Derived reflectance metric, 0..=100.
    pub brightness_index: f64,
    pub daylight_hours: f64,
    /// Sea-ice concentration, percent.
    pub sea_ice: f64,
    /// Cloud cover, percent.
    pub cloud_cover: u8,
    /// Normalized difference vegetation index.
    pub ndvi: f64,
    /// Season label carried in the dataset.
    pub season: Season,
}

impl Observation {
    /// Zero-based month. Records with an out-of-range number are rejected
    /// when the dataset is built, so the fallback is unreachable there.
    pub fn month(&self) -> Month {
        Month::from_number(self.month_number).unwrap_or(Month::JANUARY)
    }
}
