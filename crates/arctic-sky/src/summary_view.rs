use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};
use observations::{SeasonAverage, SeasonFilter};

use crate::palette;

/// Daylight hours share the 0..=100 axis with the brightness index.
const DAYLIGHT_SCALE: f64 = 100.0 / 24.0;
const BRIGHTNESS_BAR_WIDTH: f64 = 0.32;
const DAYLIGHT_BAR_WIDTH: f64 = 0.20;
const ROW_OFFSET: f64 = 0.18;

/// Draw the per-season averages as paired horizontal bars, with the
/// active season filter highlighted.
pub fn show_summary(
    ui: &mut egui::Ui,
    averages: &[SeasonAverage],
    season_filter: SeasonFilter,
) {
    if averages.is_empty() {
        return;
    }

    let rows = averages.len();
    let mut brightness_bars = Vec::new();
    let mut daylight_bars = Vec::new();
    // First season on the top row.
    for (i, average) in averages.iter().enumerate() {
        let y = (rows - 1 - i) as f64;
        let active =
            season_filter.season() == Some(average.season);
        if let Some(value) = average.brightness {
            brightness_bars.push(
                Bar::new(y + ROW_OFFSET, value)
                    .width(BRIGHTNESS_BAR_WIDTH)
                    .fill(if active {
                        palette::NAVY
                    } else {
                        palette::BLUE
                    })
                    .name(format!(
                        "{} · {value:.0} idx",
                        average.season.name()
                    )),
            );
        }
        if let Some(value) = average.daylight {
            daylight_bars.push(
                Bar::new(y - ROW_OFFSET, value * DAYLIGHT_SCALE)
                    .width(DAYLIGHT_BAR_WIDTH)
                    .fill(palette::AMBER)
                    .name(format!(
                        "{} · {value:.1} h",
                        average.season.name()
                    )),
            );
        }
    }

    let season_names: Vec<&'static str> =
        averages.iter().map(|a| a.season.name()).collect();

    Plot::new("season_summary")
        .legend(Legend::default())
        .include_x(0.0)
        .include_x(105.0)
        .include_y(-0.7)
        .include_y(rows as f64 - 0.3)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 0.01 || rounded < 0.0 {
                return String::new();
            }
            let row = rounded as usize;
            if row < season_names.len() {
                season_names[season_names.len() - 1 - row].to_string()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new("Mean brightness", brightness_bars)
                    .horizontal(),
            );
            plot_ui.bar_chart(
                BarChart::new("Mean daylight", daylight_bars)
                    .horizontal(),
            );
        });
}
