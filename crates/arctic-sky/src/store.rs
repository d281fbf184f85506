use observations::{Dataset, Month, SeasonFilter};

use crate::versioned::Versioned;

// -------------------------------------------------------------------
// Playback
// -------------------------------------------------------------------

/// Seconds between autoplay month advances.
pub const PLAYBACK_INTERVAL: f64 = 1.6;

/// Autoplay clock. egui has no interval timers, so playback is a flag plus
/// the frame time of the last advance; the app polls `should_advance` once
/// per frame. Stopping drops the timestamp, leaving no residual timer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Playback {
    playing: bool,
    last_advance: Option<f64>,
}

impl Playback {
    /// Start playing. No-op when already running.
    pub fn start(&mut self, now: f64) {
        if !self.playing {
            self.playing = true;
            self.last_advance = Some(now);
        }
    }

    /// Stop playing and drop the advance timestamp.
    pub fn stop(&mut self) {
        self.playing = false;
        self.last_advance = None;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True when a full interval elapsed since the last advance. Moves the
    /// timestamp forward so the next advance is due one interval from `now`.
    pub fn should_advance(&mut self, now: f64) -> bool {
        if !self.playing {
            return false;
        }
        match self.last_advance {
            Some(last) if now - last >= PLAYBACK_INTERVAL => {
                self.last_advance = Some(now);
                true
            }
            Some(_) => false,
            None => {
                // Restarted without a timestamp: anchor here, advance later.
                self.last_advance = Some(now);
                false
            }
        }
    }
}

// -------------------------------------------------------------------
// Store
// -------------------------------------------------------------------

/// The one shared state object behind all four dashboard panels.
pub struct Store {
    /// Loaded observations; the version drives the derived-data cache.
    pub dataset: Versioned<Dataset>,
    /// True while a dataset load is in flight.
    pub loading: bool,
    pub error_message: Option<String>,
    /// Currently displayed month. Always inside the season filter's set.
    pub current_month: Month,
    /// Site highlighted on the map and feeding the chart and detail panels.
    pub selected_site: Option<String>,
    pub season_filter: SeasonFilter,
    pub playback: Playback,
}

impl Store {
    /// Build a store over a loaded dataset with the default view state.
    pub fn new(dataset: Dataset) -> Self {
        let selected_site = dataset.first_site().map(str::to_owned);
        Self {
            dataset: Versioned::new(dataset),
            loading: false,
            error_message: None,
            current_month: Month::JANUARY,
            selected_site,
            season_filter: SeasonFilter::All,
            playback: Playback::default(),
        }
    }

    /// Replace the dataset and re-seed the data-dependent selections.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        self.selected_site = dataset.first_site().map(str::to_owned);
        self.dataset.set(dataset);
        self.loading = false;
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut playback = Playback::default();
        playback.start(10.0);
        // A later start while running must not re-anchor the clock.
        playback.start(11.5);
        assert!(playback.is_playing());
        assert!(
            playback.should_advance(10.0 + PLAYBACK_INTERVAL),
            "the first start timestamp should still be in effect"
        );
    }

    #[test]
    fn test_stop_leaves_no_residual_timer() {
        let mut playback = Playback::default();
        playback.start(0.0);
        playback.stop();
        assert_eq!(playback, Playback::default());
        assert!(!playback.should_advance(1e9));
    }

    #[test]
    fn test_advance_cadence() {
        let mut playback = Playback::default();
        playback.start(0.0);
        assert!(!playback.should_advance(PLAYBACK_INTERVAL / 2.0));
        assert!(playback.should_advance(PLAYBACK_INTERVAL));
        // The anchor moved: the next advance is an interval further out.
        assert!(!playback.should_advance(PLAYBACK_INTERVAL + 0.1));
        assert!(playback.should_advance(2.0 * PLAYBACK_INTERVAL + 0.1));
    }

    #[test]
    fn test_install_dataset_reseeds_the_selection() {
        let mut store = Store::new(Dataset::default());
        assert_eq!(store.selected_site, None);

        let json = r#"[{
            "site": "Resolute", "month": 1, "lat": 74.7, "lon": -94.83,
            "brightnessIndex": 55.0, "daylightHours": 0.0, "seaIce": 96.0,
            "cloudCover": 50, "ndvi": -0.05, "season": "Winter"
        }]"#;
        let before = store.dataset.version();
        store.install_dataset(Dataset::from_json_str(json).unwrap());
        assert_eq!(store.selected_site.as_deref(), Some("Resolute"));
        assert_ne!(store.dataset.version(), before);
    }
}
