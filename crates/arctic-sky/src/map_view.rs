use eframe::egui;
use egui_plot::{Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};
use observations::{Month, Observation, SeasonFilter};

use crate::basemap;
use crate::palette;

// Map styling constants
const SITE_MIN_RADIUS: f32 = 3.0;
const SITE_MAX_RADIUS: f32 = 11.0;
const MAX_DAYLIGHT_HOURS: f64 = 24.0;
/// Pick distance for site clicks and tooltips, in plot units.
const PICK_RADIUS: f64 = 0.09;

const LAND_COLOR: egui::Color32 = egui::Color32::from_rgb(158, 183, 201);
const GRATICULE_COLOR: egui::Color32 =
    egui::Color32::from_rgb(200, 221, 234);

// Legend constants
const LEGEND_MESH_POINTS: usize = 32;
const LEGEND_WIDTH: f32 = 180.0;
const LEGEND_HEIGHT: f32 = 12.0;

/// Interaction produced by the map.
#[derive(Debug, Clone)]
pub enum MapEvent {
    SiteClicked(String),
}

/// Dot radius from daylight hours, square-root scaled so dot area tracks
/// the hours.
fn site_radius(daylight_hours: f64) -> f32 {
    let t = (daylight_hours / MAX_DAYLIGHT_HOURS).clamp(0.0, 1.0).sqrt();
    SITE_MIN_RADIUS + t as f32 * (SITE_MAX_RADIUS - SITE_MIN_RADIUS)
}

/// Brightness color on the PuBuGn scale over the dataset's extent.
fn brightness_color(
    value: f64,
    domain: (f64, f64),
    alpha: u8,
) -> egui::Color32 {
    let (lo, hi) = domain;
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let c = colorous::PURPLE_BLUE_GREEN.eval_continuous(t);
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, alpha)
}

fn polyline(name: &str, points: Vec<[f64; 2]>) -> Line<'static> {
    Line::new(name.to_owned(), PlotPoints::from(points))
}

/// Draw the polar site map for one month. Returns a click on a site.
pub fn show_map(
    ui: &mut egui::Ui,
    records: &[Observation],
    selected_site: Option<&str>,
    current_month: Month,
    season_filter: SeasonFilter,
    brightness_domain: (f64, f64),
) -> Option<MapEvent> {
    // Sites dim when the displayed month falls outside the season filter.
    // Snapping keeps that from happening, but the rendering stays
    // resilient to it.
    let dimmed = !season_filter.allows(current_month);
    let alpha: u8 = if dimmed { 115 } else { 235 };

    let edge = basemap::latitude_radius(basemap::MAP_EDGE_LAT);

    let plot_response = Plot::new("site_map")
        .data_aspect(1.0)
        .include_x(-edge)
        .include_x(edge)
        .include_y(-edge)
        .include_y(edge)
        .show_axes([false, false])
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Graticule
            for lat in [80.0, 70.0, 60.0, 50.0] {
                plot_ui.line(
                    polyline("", basemap::latitude_circle(lat))
                        .color(GRATICULE_COLOR)
                        .width(0.5),
                );
            }
            for i in 0..12 {
                let lon = i as f64 * 30.0 - 180.0;
                plot_ui.line(
                    polyline("", basemap::meridian(lon))
                        .color(GRATICULE_COLOR)
                        .width(0.5),
                );
            }

            // Arctic Circle
            plot_ui.line(
                polyline(
                    "Arctic Circle",
                    basemap::latitude_circle(basemap::ARCTIC_CIRCLE_LAT),
                )
                .color(palette::BLUE)
                .style(LineStyle::dashed_loose())
                .width(1.2),
            );

            // Coastlines
            for ring in &basemap::COASTLINE.rings {
                let points = basemap::ring_points(ring);
                if points.len() >= 2 {
                    plot_ui.line(
                        polyline("", points).color(LAND_COLOR).width(1.0),
                    );
                }
            }

            // Sites: a white (or dark, when selected) underlay plays the
            // role of the circle outline.
            for record in records {
                let position = basemap::project(record.lon, record.lat);
                let radius = site_radius(record.daylight_hours);
                let selected =
                    selected_site == Some(record.site.as_str());
                let (outline, outline_gap) = if selected {
                    (palette::NAVY, 3.0)
                } else {
                    (egui::Color32::WHITE, 1.5)
                };

                plot_ui.points(
                    Points::new(
                        record.site.clone(),
                        PlotPoints::from(vec![position]),
                    )
                    .shape(MarkerShape::Circle)
                    .radius(radius + outline_gap)
                    .color(outline)
                    .filled(true),
                );
                plot_ui.points(
                    Points::new(
                        record.site.clone(),
                        PlotPoints::from(vec![position]),
                    )
                    .shape(MarkerShape::Circle)
                    .radius(radius)
                    .color(brightness_color(
                        record.brightness_index,
                        brightness_domain,
                        alpha,
                    ))
                    .filled(true),
                );
            }

            // Hit test against the projected site positions.
            let hovered = plot_ui.pointer_coordinate().and_then(|p| {
                records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        let [x, y] = basemap::project(r.lon, r.lat);
                        let d2 = (x - p.x).powi(2) + (y - p.y).powi(2);
                        (i, d2)
                    })
                    .filter(|(_, d2)| *d2 <= PICK_RADIUS * PICK_RADIUS)
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(i, _)| i)
            });
            (hovered, plot_ui.response().clicked())
        });

    let (hovered, clicked) = plot_response.inner;
    let hovered_record = hovered.and_then(|i| records.get(i));

    if let Some(record) = hovered_record {
        let season = current_month.season();
        plot_response.response.on_hover_ui_at_pointer(|ui| {
            ui.strong(&record.site);
            ui.label(format!(
                "{} ({})",
                current_month.name(),
                season.name()
            ));
            ui.label(format!(
                "Brightness: {:.0}",
                record.brightness_index
            ));
            ui.label(format!(
                "Daylight: {:.1} h",
                record.daylight_hours
            ));
            ui.label(format!("Sea ice: {:.0}%", record.sea_ice));
            ui.label(format!("Cloud cover: {}%", record.cloud_cover));
        });

        if clicked {
            return Some(MapEvent::SiteClicked(record.site.clone()));
        }
    }

    None
}

/// Horizontal PuBuGn gradient bar with the domain's end labels.
pub fn show_brightness_legend(
    ui: &mut egui::Ui,
    brightness_domain: (f64, f64),
) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(LEGEND_WIDTH, LEGEND_HEIGHT),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        for i in 0..LEGEND_MESH_POINTS {
            let t0 = i as f32 / LEGEND_MESH_POINTS as f32;
            let t1 = (i + 1) as f32 / LEGEND_MESH_POINTS as f32;
            let segment = egui::Rect::from_min_max(
                egui::pos2(rect.left() + rect.width() * t0, rect.top()),
                egui::pos2(
                    rect.left() + rect.width() * t1,
                    rect.bottom(),
                ),
            );
            let c = colorous::PURPLE_BLUE_GREEN
                .eval_continuous(((t0 + t1) / 2.0) as f64);
            painter.rect_filled(
                segment,
                egui::CornerRadius::ZERO,
                egui::Color32::from_rgb(c.r, c.g, c.b),
            );
        }
        painter.rect_stroke(
            rect,
            egui::CornerRadius::same(2),
            egui::Stroke::new(1.0, GRATICULE_COLOR),
            egui::StrokeKind::Outside,
        );
    }

    let (lo, hi) = brightness_domain;
    ui.horizontal(|ui| {
        ui.small(format!("{lo:.0} (darker ground)"));
        ui.add_space(12.0);
        ui.small(format!("{hi:.0} (bright snow/ice)"));
    });
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_radius_is_sqrt_scaled() {
        assert_eq!(site_radius(0.0), SITE_MIN_RADIUS);
        assert_eq!(site_radius(24.0), SITE_MAX_RADIUS);
        // Quarter daylight gives half the radius range.
        let mid = SITE_MIN_RADIUS
            + 0.5 * (SITE_MAX_RADIUS - SITE_MIN_RADIUS);
        assert!((site_radius(6.0) - mid).abs() < 1e-4);
        // Out-of-range hours clamp instead of overflowing the scale.
        assert_eq!(site_radius(40.0), SITE_MAX_RADIUS);
    }

    #[test]
    fn test_brightness_color_handles_a_flat_domain() {
        // Equal extent ends must not divide by zero.
        let c = brightness_color(50.0, (50.0, 50.0), 255);
        assert_ne!(c, egui::Color32::TRANSPARENT);
    }
}
