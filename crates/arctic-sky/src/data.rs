use std::path::Path;

use observations::Dataset;

/// Bundled fallback dataset: one year of observations for eight sites.
const BUNDLED_DATASET: &str =
    include_str!("../data/modis_arctic_2023.json");

/// Dataset file probed relative to the working directory.
const DATASET_FILE: &str = "data/modis_arctic_2023.json";

/// Resolve the startup dataset: a local file when present, the bundled
/// copy otherwise.
pub fn load_startup_dataset() -> Dataset {
    let path = Path::new(DATASET_FILE);
    if path.exists() {
        match Dataset::from_file(path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} records from {DATASET_FILE}",
                    dataset.len()
                );
                return dataset;
            }
            Err(e) => log::warn!(
                "failed to load {DATASET_FILE}: {e}; using bundled data"
            ),
        }
    }
    bundled_dataset()
}

/// The compiled-in dataset. Parsing it can only fail after a bad edit to
/// the bundled file; the app still starts, with empty panels.
pub fn bundled_dataset() -> Dataset {
    Dataset::from_json_str(BUNDLED_DATASET).unwrap_or_else(|e| {
        log::error!("bundled dataset is invalid: {e}");
        Dataset::default()
    })
}
