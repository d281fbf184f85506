use once_cell::sync::Lazy;
use serde::Deserialize;

// -------------------------------------------------------------------
// Projection
// -------------------------------------------------------------------

/// Southern display edge of the map, in degrees latitude.
pub const MAP_EDGE_LAT: f64 = 48.0;

/// Latitude of the Arctic Circle.
pub const ARCTIC_CIRCLE_LAT: f64 = 66.56;

/// North-polar azimuthal equal-area projection onto plot coordinates.
/// The pole maps to the origin, the Greenwich meridian points down, and
/// the radius grows toward the equator on a unit sphere.
pub fn project(lon: f64, lat: f64) -> [f64; 2] {
    let r = latitude_radius(lat);
    let theta = lon.to_radians();
    [r * theta.sin(), -r * theta.cos()]
}

/// Projected radius of a latitude circle.
pub fn latitude_radius(lat: f64) -> f64 {
    2.0 * ((90.0 - lat).to_radians() / 2.0).sin()
}

// -------------------------------------------------------------------
// Coastline
// -------------------------------------------------------------------

/// One coastline polyline, vertices as [lon, lat] pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Ring {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coastline {
    pub rings: Vec<Ring>,
}

const COASTLINE_JSON: &str =
    include_str!("../data/arctic_coastline.json");

/// Bundled boundary rings, parsed once. An unreadable bundle degrades to
/// an empty basemap instead of failing the app.
pub static COASTLINE: Lazy<Coastline> = Lazy::new(|| {
    serde_json::from_str(COASTLINE_JSON).unwrap_or_else(|e| {
        log::error!("bundled coastline is invalid: {e}");
        Coastline { rings: Vec::new() }
    })
});

/// Projected polyline for one ring, clipped to the map edge.
pub fn ring_points(ring: &Ring) -> Vec<[f64; 2]> {
    ring.points
        .iter()
        .filter(|p| p[1] >= MAP_EDGE_LAT)
        .map(|p| project(p[0], p[1]))
        .collect()
}

/// A latitude circle sampled every five degrees of longitude.
pub fn latitude_circle(lat: f64) -> Vec<[f64; 2]> {
    (0..=72)
        .map(|i| project(i as f64 * 5.0 - 180.0, lat))
        .collect()
}

/// A meridian sampled from the map edge up to the pole.
pub fn meridian(lon: f64) -> Vec<[f64; 2]> {
    let steps = 21;
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            project(lon, MAP_EDGE_LAT + t * (90.0 - MAP_EDGE_LAT))
        })
        .collect()
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
