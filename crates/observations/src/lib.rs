pub mod dataset;
pub mod month;
pub mod record;
pub mod season;
pub mod summary;

pub use dataset::{Dataset, DatasetError};
pub use month::Month;
pub use record::Observation;
pub use season::{Season, SeasonFilter};
pub use summary::{season_averages, SeasonAverage};
