use std::path::PathBuf;

use observations::{Month, SeasonFilter};

use crate::effects::Effect;
use crate::store::Store;

/// Actions dispatched by the dashboard's input handlers.
#[derive(Debug, Clone)]
pub enum Action {
    // Time navigation
    /// Raw month slider input; snapped into the active season filter.
    ScrubMonth { month: Month },
    /// Jump straight to a month (chart point click).
    JumpToMonth { month: Month },
    /// Advance to the next month of the active season cycle.
    AdvanceMonth,

    // Season filtering
    /// Switch the season filter, repairing the month invariant.
    SetSeasonFilter { filter: SeasonFilter },

    // Site selection
    /// Select a site (map point click).
    SelectSite { site: String },

    // Playback
    /// Start or stop autoplay; `now` is the frame clock in seconds.
    TogglePlayback { now: f64 },

    // Dataset and housekeeping
    /// Load a dataset picked from disk.
    LoadDataset { path: PathBuf },
    /// Restore the startup view: January, all seasons, first site.
    ResetView,
    /// Clear any error message.
    ClearErrorMessage,
}

/// Apply a single action to the store.
pub fn update(store: &mut Store, action: Action) -> Vec<Effect> {
    match action {
        // Time navigation
        Action::ScrubMonth { month } => {
            store.current_month = store.season_filter.snap(month);
            store.playback.stop();
            vec![]
        }
        Action::JumpToMonth { month } => {
            // Chart clicks apply verbatim and leave playback running.
            store.current_month = month;
            vec![]
        }
        Action::AdvanceMonth => {
            store.current_month =
                store.season_filter.next_after(store.current_month);
            vec![]
        }

        // Season filtering
        Action::SetSeasonFilter { filter } => {
            store.season_filter = filter;
            if !filter.allows(store.current_month) {
                store.current_month = filter.first();
            }
            store.playback.stop();
            vec![]
        }

        // Site selection
        Action::SelectSite { site } => {
            store.selected_site = Some(site);
            vec![]
        }

        // Playback
        Action::TogglePlayback { now } => {
            if store.playback.is_playing() {
                store.playback.stop();
            } else {
                store.playback.start(now);
            }
            vec![]
        }

        // Dataset and housekeeping
        Action::LoadDataset { path } => {
            store.loading = true;
            vec![Effect::LoadDataset { path }]
        }
        Action::ResetView => {
            store.playback.stop();
            store.current_month = Month::JANUARY;
            store.season_filter = SeasonFilter::All;
            store.selected_site =
                store.dataset.get().first_site().map(str::to_owned);
            vec![]
        }
        Action::ClearErrorMessage => {
            store.error_message = None;
            vec![]
        }
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use observations::{Dataset, Season};

    fn test_store() -> Store {
        let json = r#"[
            {"site": "Utqiagvik", "month": 1, "lat": 71.29, "lon": -156.79,
             "brightnessIndex": 40.0, "daylightHours": 0.0, "seaIce": 96.0,
             "cloudCover": 60, "ndvi": -0.08, "season": "Winter"},
            {"site": "Utqiagvik", "month": 7, "lat": 71.29, "lon": -156.79,
             "brightnessIndex": 30.0, "daylightHours": 24.0, "seaIce": 40.0,
             "cloudCover": 80, "ndvi": 0.4, "season": "Summer"},
            {"site": "Tiksi", "month": 1, "lat": 71.64, "lon": 128.87,
             "brightnessIndex": 45.0, "daylightHours": 0.2, "seaIce": 97.0,
             "cloudCover": 55, "ndvi": -0.08, "season": "Winter"}
        ]"#;
        Store::new(Dataset::from_json_str(json).unwrap())
    }

    fn month(index: usize) -> Month {
        Month::from_index(index).unwrap()
    }

    #[test]
    fn test_season_filter_repairs_the_month_invariant() {
        // Property: after any filter switch from any month, the current
        // month belongs to the new filter's set.
        for filter in SeasonFilter::ALL_FILTERS {
            for start in Month::all() {
                let mut store = test_store();
                store.current_month = start;
                update(&mut store, Action::SetSeasonFilter { filter });
                assert!(
                    filter.allows(store.current_month),
                    "{} left the month at {}",
                    filter.name(),
                    store.current_month.name()
                );
            }
        }
    }

    #[test]
    fn test_winter_filter_resets_to_december() {
        let mut store = test_store();
        store.current_month = month(6);
        update(
            &mut store,
            Action::SetSeasonFilter {
                filter: SeasonFilter::Only(Season::Winter),
            },
        );
        assert_eq!(store.current_month, Month::DECEMBER);
    }

    #[test]
    fn test_scrub_always_lands_inside_the_filter() {
        for filter in SeasonFilter::ALL_FILTERS {
            for raw in Month::all() {
                let mut store = test_store();
                store.season_filter = filter;
                store.current_month = filter.first();
                update(&mut store, Action::ScrubMonth { month: raw });
                assert!(filter.allows(store.current_month));
            }
        }
    }

    #[test]
    fn test_scrub_and_filter_changes_stop_playback() {
        let mut store = test_store();
        store.playback.start(0.0);
        update(&mut store, Action::ScrubMonth { month: month(3) });
        assert!(!store.playback.is_playing());

        store.playback.start(0.0);
        update(
            &mut store,
            Action::SetSeasonFilter {
                filter: SeasonFilter::Only(Season::Fall),
            },
        );
        assert!(!store.playback.is_playing());
    }

    #[test]
    fn test_toggle_twice_returns_to_stopped() {
        let mut store = test_store();
        update(&mut store, Action::TogglePlayback { now: 1.0 });
        assert!(store.playback.is_playing());
        update(&mut store, Action::TogglePlayback { now: 2.0 });
        assert!(!store.playback.is_playing());
        assert!(!store.playback.should_advance(1e9));
    }

    #[test]
    fn test_advance_wraps_within_the_season() {
        let mut store = test_store();
        store.season_filter = SeasonFilter::Only(Season::Winter);
        store.current_month = month(1);
        update(&mut store, Action::AdvanceMonth);
        assert_eq!(store.current_month, Month::DECEMBER);
    }

    #[test]
    fn test_chart_jump_applies_verbatim() {
        let mut store = test_store();
        store.season_filter = SeasonFilter::Only(Season::Winter);
        store.playback.start(0.0);
        update(&mut store, Action::JumpToMonth { month: month(6) });
        assert_eq!(store.current_month, month(6));
        assert!(store.playback.is_playing());
    }

    #[test]
    fn test_reset_view() {
        let mut store = test_store();
        store.current_month = month(9);
        store.season_filter = SeasonFilter::Only(Season::Fall);
        store.selected_site = Some("Tiksi".to_string());
        store.playback.start(0.0);

        update(&mut store, Action::ResetView);

        assert_eq!(store.current_month, Month::JANUARY);
        assert_eq!(store.season_filter, SeasonFilter::All);
        assert_eq!(store.selected_site.as_deref(), Some("Utqiagvik"));
        assert!(!store.playback.is_playing());
    }

    #[test]
    fn test_load_dataset_defers_to_an_effect() {
        let mut store = test_store();
        let effects = update(
            &mut store,
            Action::LoadDataset {
                path: PathBuf::from("somewhere.json"),
            },
        );
        assert!(store.loading);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadDataset { .. }]
        ));
    }

    #[test]
    fn test_select_site_needs_no_validation() {
        let mut store = test_store();
        update(
            &mut store,
            Action::SelectSite {
                site: "Nowhere".to_string(),
            },
        );
        // Unknown sites are tolerated; the views render nothing for them.
        assert_eq!(store.selected_site.as_deref(), Some("Nowhere"));
    }
}
