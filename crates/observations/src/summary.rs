use crate::record::Observation;
use crate::season::Season;

//##########################################################
// Season averages
//##########################################################

/// Mean brightness and daylight over one season's records.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAverage {
    pub season: Season,
    /// Mean brightness index; `None` when the season has no records.
    pub brightness: Option<f64>,
    /// Mean daylight hours; `None` when the season has no records.
    pub daylight: Option<f64>,
}

/// Per-season means over the whole dataset, in Winter..Fall order.
/// Membership follows the season month sets, not the per-record labels.
/// Pure: the same records always produce the same averages.
pub fn season_averages(records: &[Observation]) -> Vec<SeasonAverage> {
    Season::ALL
        .iter()
        .map(|&season| {
            let months = season.months();
            let selected: Vec<&Observation> = records
                .iter()
                .filter(|r| months.contains(&r.month()))
                .collect();
            SeasonAverage {
                season,
                brightness: mean(
                    selected.iter().map(|r| r.brightness_index),
                ),
                daylight: mean(
                    selected.iter().map(|r| r.daylight_hours),
                ),
            }
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

//##########################################################
// Tests
//##########################################################
