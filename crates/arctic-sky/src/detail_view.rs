use eframe::egui;
use egui_extras::{Column, TableBuilder};
use observations::Observation;

const ROW_HEIGHT: f32 = 22.0;

/// Metric rows for the selected site and month. Draws a placeholder when
/// the selection has no record in the dataset.
pub fn show_detail(ui: &mut egui::Ui, record: Option<&Observation>) {
    let Some(record) = record else {
        ui.weak("No record for the current selection.");
        return;
    };

    let ndvi = if record.ndvi >= 0.0 {
        format!("+{:.2}", record.ndvi)
    } else {
        format!("{:.2}", record.ndvi)
    };
    let rows = [
        ("Brightness Index", format!("{:.0}", record.brightness_index)),
        ("Daylight Hours", format!("{:.1} h", record.daylight_hours)),
        ("Sea Ice Concentration", format!("{:.0} %", record.sea_ice)),
        ("Cloud Cover", format!("{} %", record.cloud_cover)),
        ("NDVI", ndvi),
        ("Season", record.season.name().to_string()),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(150.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (label, value) in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.strong(label);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}
