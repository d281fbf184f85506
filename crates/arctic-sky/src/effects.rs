use std::path::PathBuf;

use observations::Dataset;

use crate::store::Store;

/// Deferred effects that must run outside the reducer (file IO).
#[derive(Debug, Clone)]
pub enum Effect {
    /// Load a dataset from disk and install it in the store.
    LoadDataset { path: PathBuf },
}

/// Execute a single effect against the store.
pub fn run(store: &mut Store, effect: Effect) {
    match effect {
        Effect::LoadDataset { path } => {
            match Dataset::from_file(&path) {
                Ok(dataset) => store.install_dataset(dataset),
                Err(e) => {
                    log::error!("dataset load failed: {e}");
                    store.loading = false;
                    store.error_message =
                        Some(format!("Failed to load dataset: {e}"));
                }
            }
        }
    }
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
