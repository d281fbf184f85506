use eframe::egui;
use egui_plot::{
    Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints,
    Points, VLine,
};
use observations::{Month, Observation};

use crate::palette;

/// Daylight hours are drawn on the shared 0..=100 axis.
const DAYLIGHT_SCALE: f64 = 100.0 / 24.0;
const POINT_RADIUS: f32 = 4.5;
/// Pick distance for month points, in months along the x axis.
const PICK_DISTANCE: f64 = 0.45;

/// Interaction produced by the chart.
#[derive(Debug, Clone)]
pub enum ChartEvent {
    MonthClicked(Month),
}

/// Draw one site's seasonal profile. Returns a click on a month point.
pub fn show_chart(
    ui: &mut egui::Ui,
    series: &[Observation],
    current_month: Month,
) -> Option<ChartEvent> {
    if series.is_empty() {
        ui.weak("Select a site on the map to see its year.");
        return None;
    }

    let brightness: Vec<[f64; 2]> = series
        .iter()
        .map(|r| [r.month().index() as f64, r.brightness_index])
        .collect();
    let daylight: Vec<[f64; 2]> = series
        .iter()
        .map(|r| {
            [
                r.month().index() as f64,
                r.daylight_hours * DAYLIGHT_SCALE,
            ]
        })
        .collect();
    let sea_ice: Vec<[f64; 2]> = series
        .iter()
        .map(|r| [r.month().index() as f64, r.sea_ice])
        .collect();

    let plot_response = Plot::new("seasonal_profile")
        .legend(Legend::default().position(Corner::LeftTop))
        .include_x(-0.5)
        .include_x(11.5)
        .include_y(0.0)
        .include_y(105.0)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 0.01 {
                return String::new();
            }
            Month::from_index(rounded as usize)
                .map(|m| m.name().to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(
                    "Daylight (scaled h)",
                    PlotPoints::from(daylight),
                )
                .color(palette::AMBER)
                .fill(0.0)
                .width(1.5),
            );
            plot_ui.line(
                Line::new("Sea ice %", PlotPoints::from(sea_ice))
                    .color(palette::SLATE)
                    .style(LineStyle::dashed_loose())
                    .width(1.8),
            );
            plot_ui.line(
                Line::new(
                    "Brightness index",
                    PlotPoints::from(brightness.clone()),
                )
                .color(palette::BLUE)
                .width(2.5),
            );
            plot_ui.vline(
                VLine::new(
                    "Selected month",
                    current_month.index() as f64,
                )
                .color(palette::NAVY)
                .style(LineStyle::dashed_dense())
                .width(1.5),
            );
            plot_ui.points(
                Points::new("", PlotPoints::from(brightness))
                    .shape(MarkerShape::Circle)
                    .radius(POINT_RADIUS)
                    .color(palette::BLUE)
                    .filled(true),
            );

            let hovered = plot_ui.pointer_coordinate().and_then(|p| {
                series
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        (i, (r.month().index() as f64 - p.x).abs())
                    })
                    .filter(|(_, dx)| *dx <= PICK_DISTANCE)
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(i, _)| i)
            });
            (hovered, plot_ui.response().clicked())
        });

    let (hovered, clicked) = plot_response.inner;
    let hovered_record = hovered.and_then(|i| series.get(i));

    if let Some(record) = hovered_record {
        plot_response.response.on_hover_ui_at_pointer(|ui| {
            ui.strong(&record.site);
            ui.label(format!(
                "{} ({})",
                record.month().name(),
                record.season.name()
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
        });

        if clicked {
            return Some(ChartEvent::MonthClicked(record.month()));
        }
    }

    None
}
