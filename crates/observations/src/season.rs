use serde::{Deserialize, Serialize};

use crate::month::Month;

//##########################################################
// Season
//##########################################################

/// Meteorological season of the Arctic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Seasons in display order.
    pub const ALL: [Season; 4] =
        [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Ordered month set. Winter leads with December, so a filter switch
    /// that lands outside the set resets to December, then wraps through
    /// January and February.
    pub fn months(self) -> [Month; 3] {
        let indices = match self {
            Season::Winter => [11, 0, 1],
            Season::Spring => [2, 3, 4],
            Season::Summer => [5, 6, 7],
            Season::Fall => [8, 9, 10],
        };
        indices.map(|i| Month::from_index(i).expect("index in range"))
    }

    /// Display name, identical to the dataset's season labels.
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

//##########################################################
// SeasonFilter
//##########################################################

/// Restriction on which months are navigable in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(Season),
}

impl SeasonFilter {
    /// Filters in the order the season buttons are laid out.
    pub const ALL_FILTERS: [SeasonFilter; 5] = [
        SeasonFilter::All,
        SeasonFilter::Only(Season::Winter),
        SeasonFilter::Only(Season::Spring),
        SeasonFilter::Only(Season::Summer),
        SeasonFilter::Only(Season::Fall),
    ];

    /// Ordered set of months this filter allows.
    pub fn months(self) -> Vec<Month> {
        match self {
            SeasonFilter::All => Month::all().collect(),
            SeasonFilter::Only(season) => season.months().to_vec(),
        }
    }

    pub fn allows(self, month: Month) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(season) => season.months().contains(&month),
        }
    }

    /// First element of the allowed set: January under `All`, December
    /// under Winter, otherwise the season's calendar start.
    pub fn first(self) -> Month {
        match self {
            SeasonFilter::All => Month::JANUARY,
            SeasonFilter::Only(season) => season.months()[0],
        }
    }

    /// Snap a raw month to the nearest allowed one by absolute index
    /// distance. Ties go to the candidate appearing earlier in set order,
    /// so a Winter filter pulls June back to December rather than February.
    pub fn snap(self, raw: Month) -> Month {
        if self.allows(raw) {
            return raw;
        }
        let months = self.months();
        let mut best = months[0];
        for &candidate in &months[1..] {
            if candidate.distance(raw) < best.distance(raw) {
                best = candidate;
            }
        }
        best
    }

    /// Successor of `current` in the allowed cycle, wrapping at the end.
    /// A month outside the set advances to the set's first element.
    pub fn next_after(self, current: Month) -> Month {
        let months = self.months();
        match months.iter().position(|&m| m == current) {
            Some(i) => months[(i + 1) % months.len()],
            None => months[0],
        }
    }

    /// Label for the season buttons.
    pub fn name(self) -> &'static str {
        match self {
            SeasonFilter::All => "All",
            SeasonFilter::Only(season) => season.name(),
        }
    }

    /// The restricted season, when there is one.
    pub fn season(self) -> Option<Season> {
        match self {
            SeasonFilter::All => None,
            SeasonFilter::Only(season) => Some(season),
        }
    }
}

//##########################################################
// Tests
//##########################################################
