//! Arctic Sky Explorer: an interactive dashboard over seasonal satellite
//! observations for a set of Arctic monitoring sites.

pub mod actions;
pub mod app;
pub mod basemap;
pub mod cache;
pub mod chart_view;
pub mod controls;
pub mod data;
pub mod detail_view;
pub mod effects;
pub mod map_view;
pub mod native;
pub mod palette;
pub mod state;
pub mod store;
pub mod summary_view;
pub mod versioned;
pub mod web;

use eframe::CreationContext;

pub use app::ArcticSkyApp;

/// Build the dashboard app over the startup dataset.
pub fn create_app(_cc: &CreationContext<'_>) -> ArcticSkyApp {
    ArcticSkyApp::new(data::load_startup_dataset())
}
