use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::month::Month;
use crate::record::Observation;

//##########################################################
// Dataset
//##########################################################

/// A loaded observation set: the records in file order plus a per-site
/// grouping with each site's records sorted by month. Twelve records per
/// site are expected but not enforced. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Observation>,
    /// Site names in first-appearance order.
    site_order: Vec<String>,
    by_site: HashMap<String, Vec<Observation>>,
}

impl Dataset {
    /// Build from records, validating month numbers and grouping by site.
    pub fn from_records(
        records: Vec<Observation>,
    ) -> Result<Self, DatasetError> {
        for record in &records {
            if !(1..=12).contains(&record.month_number) {
                return Err(DatasetError::MonthOutOfRange {
                    site: record.site.clone(),
                    month: record.month_number,
                });
            }
        }

        let mut site_order = Vec::new();
        let mut by_site: HashMap<String, Vec<Observation>> = HashMap::new();
        for record in &records {
            if !by_site.contains_key(&record.site) {
                site_order.push(record.site.clone());
            }
            by_site
                .entry(record.site.clone())
                .or_default()
                .push(record.clone());
        }
        for series in by_site.values_mut() {
            series.sort_by_key(|r| r.month_number);
        }

        Ok(Self {
            records,
            site_order,
            by_site,
        })
    }

    /// Parse a JSON array of observation records.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Observation> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and parse a dataset file.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sites in first-appearance order.
    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.site_order.iter().map(String::as_str)
    }

    /// Site of the first record, the initial selection target.
    pub fn first_site(&self) -> Option<&str> {
        self.records.first().map(|r| r.site.as_str())
    }

    /// One site's records for the whole year, sorted by month.
    pub fn site_series(&self, site: &str) -> Option<&[Observation]> {
        self.by_site.get(site).map(Vec::as_slice)
    }

    /// Every site's record for one month.
    pub fn month_records(
        &self,
        month: Month,
    ) -> impl Iterator<Item = &Observation> {
        self.records.iter().filter(move |r| r.month() == month)
    }

    /// A single site-month record, when present.
    pub fn record_for(
        &self,
        site: &str,
        month: Month,
    ) -> Option<&Observation> {
        self.by_site
            .get(site)?
            .iter()
            .find(|r| r.month() == month)
    }

    /// (min, max) of the brightness index, the map color domain.
    pub fn brightness_extent(&self) -> Option<(f64, f64)> {
        self.records.iter().fold(None, |extent, r| {
            let value = r.brightness_index;
            match extent {
                None => Some((value, value)),
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            }
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record for site {site:?} has month {month}, expected 1..=12")]
    MonthOutOfRange { site: String, month: u8 },
}

//##########################################################
// Tests
//##########################################################

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    fn record(site: &str, month: u8, brightness: f64) -> Observation {
        Observation {
            site: site.to_string(),
            month_number: month,
            lat: 71.3,
            lon: -156.8,
            brightness_index: brightness,
            daylight_hours: 12.0,
            sea_ice: 50.0,
            cloud_cover: 60,
            ndvi: 0.1,
            season: Month::from_number(month)
                .map(|m| m.season())
                .unwrap_or(Season::Winter),
        }
    }

    #[test]
    fn test_grouping_sorts_each_site_by_month() {
        let dataset = Dataset::from_records(vec![
            record("Tiksi", 3, 40.0),
            record("Tiksi", 1, 60.0),
            record("Alert", 2, 80.0),
            record("Tiksi", 2, 50.0),
        ])
        .unwrap();

        let series = dataset.site_series("Tiksi").unwrap();
        let months: Vec<u8> =
            series.iter().map(|r| r.month_number).collect();
        assert_eq!(months, vec![1, 2, 3]);

        // First-appearance order survives the grouping.
        let sites: Vec<&str> = dataset.sites().collect();
        assert_eq!(sites, vec!["Tiksi", "Alert"]);
        assert_eq!(dataset.first_site(), Some("Tiksi"));
    }

    #[test]
    fn test_month_records_and_lookup() {
        let dataset = Dataset::from_records(vec![
            record("Tiksi", 1, 40.0),
            record("Alert", 1, 80.0),
            record("Alert", 2, 70.0),
        ])
        .unwrap();

        let january = Month::JANUARY;
        assert_eq!(dataset.month_records(january).count(), 2);
        assert_eq!(
            dataset
                .record_for("Alert", january)
                .map(|r| r.brightness_index),
            Some(80.0)
        );
        assert!(dataset
            .record_for("Ny-Alesund", january)
            .is_none());
    }

    #[test]
    fn test_brightness_extent() {
        let dataset = Dataset::from_records(vec![
            record("Tiksi", 1, 35.0),
            record("Tiksi", 2, 90.0),
            record("Alert", 1, 12.0),
        ])
        .unwrap();
        assert_eq!(dataset.brightness_extent(), Some((12.0, 90.0)));
        assert_eq!(Dataset::default().brightness_extent(), None);
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        let err =
            Dataset::from_records(vec![record("Tiksi", 13, 40.0)])
                .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MonthOutOfRange { month: 13, .. }
        ));
    }

    #[test]
    fn test_parse_from_json() {
        let json = r#"[
            {
                "site": "Utqiagvik",
                "month": 4,
                "lat": 71.29,
                "lon": -156.79,
                "brightnessIndex": 88.5,
                "daylightHours": 15.2,
                "seaIce": 95.0,
                "cloudCover": 58,
                "ndvi": -0.06,
                "season": "Spring"
            }
        ]"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.site, "Utqiagvik");
        assert_eq!(record.month().index(), 3);
        assert_eq!(record.season, Season::Spring);
        assert!((record.brightness_index - 88.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_is_allowed() {
        let dataset = Dataset::from_json_str("[]").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.first_site(), None);
    }
}
