use observations::{season_averages, Month, Observation, SeasonAverage};

use crate::store::Store;
use crate::versioned::Memoized;

/// Derived data recomputed only when its inputs change. Season averages and
/// the color domain key on the dataset version alone, so they are computed
/// once per loaded dataset and are stable under re-query; the month slice
/// also keys on the displayed month.
pub struct Cache {
    pub season_averages: Memoized<Store, u64, Vec<SeasonAverage>>,
    /// (min, max) brightness, the map color scale domain.
    pub brightness_domain: Memoized<Store, u64, (f64, f64)>,
    /// Every site's record for the displayed month.
    pub month_records: Memoized<Store, (u64, Month), Vec<Observation>>,
}

impl Cache {
    pub fn new() -> Self {
        let season_averages = Memoized::new(
            |s: &Store| s.dataset.version(),
            |s: &Store| season_averages(s.dataset.get().records()),
        );

        let brightness_domain = Memoized::new(
            |s: &Store| s.dataset.version(),
            |s: &Store| {
                s.dataset
                    .get()
                    .brightness_extent()
                    .unwrap_or((0.0, 100.0))
            },
        );

        let month_records = Memoized::new(
            |s: &Store| (s.dataset.version(), s.current_month),
            |s: &Store| {
                s.dataset
                    .get()
                    .month_records(s.current_month)
                    .cloned()
                    .collect()
            },
        );

        Self {
            season_averages,
            brightness_domain,
            month_records,
        }
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use observations::Dataset;

    fn store_with_two_sites() -> Store {
        let json = r#"[
            {"site": "Alert", "month": 1, "lat": 82.5, "lon": -62.35,
             "brightnessIndex": 30.0, "daylightHours": 0.0, "seaIce": 98.0,
             "cloudCover": 40, "ndvi": -0.08, "season": "Winter"},
            {"site": "Tiksi", "month": 1, "lat": 71.64, "lon": 128.87,
             "brightnessIndex": 50.0, "daylightHours": 0.3, "seaIce": 97.0,
             "cloudCover": 55, "ndvi": -0.07, "season": "Winter"},
            {"site": "Alert", "month": 2, "lat": 82.5, "lon": -62.35,
             "brightnessIndex": 70.0, "daylightHours": 4.0, "seaIce": 98.0,
             "cloudCover": 45, "ndvi": -0.08, "season": "Winter"}
        ]"#;
        Store::new(Dataset::from_json_str(json).unwrap())
    }

    #[test]
    fn test_averages_follow_the_dataset_version() {
        let mut store = store_with_two_sites();
        let mut cache = Cache::new();

        let first = cache.season_averages.get(&store).clone();
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].brightness, Some(50.0));
        // Re-query with an unchanged dataset returns the same aggregates.
        assert_eq!(cache.season_averages.get(&store), &first);

        store.install_dataset(Dataset::default());
        let reloaded = cache.season_averages.get(&store);
        assert_eq!(reloaded[0].brightness, None);
    }

    #[test]
    fn test_month_records_track_the_displayed_month() {
        let mut store = store_with_two_sites();
        let mut cache = Cache::new();

        assert_eq!(cache.month_records.get(&store).len(), 2);
        store.current_month = Month::from_index(1).unwrap();
        assert_eq!(cache.month_records.get(&store).len(), 1);
        store.current_month = Month::from_index(5).unwrap();
        assert!(cache.month_records.get(&store).is_empty());
    }

    #[test]
    fn test_brightness_domain_covers_the_extent() {
        let store = store_with_two_sites();
        let mut cache = Cache::new();
        assert_eq!(*cache.brightness_domain.get(&store), (30.0, 70.0));
    }
}
