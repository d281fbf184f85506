use eframe::egui;
use observations::{Month, SeasonFilter};

/// Gestures produced by the control strip.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    MonthScrubbed(Month),
    PlaybackToggled,
    ViewReset,
    SeasonPicked(SeasonFilter),
}

/// Selection label, month slider, playback and reset buttons, season
/// buttons. Returns every gesture made this frame.
pub fn show_controls(
    ui: &mut egui::Ui,
    current_month: Month,
    selected_site: Option<&str>,
    season_filter: SeasonFilter,
    playing: bool,
) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.strong(format!(
            "{} · {} ({})",
            selected_site.unwrap_or("—"),
            current_month.name(),
            current_month.season().name()
        ));
    });

    ui.horizontal(|ui| {
        let mut month_index = current_month.index();
        let slider = egui::Slider::new(&mut month_index, 0..=11)
            .text("Month")
            .custom_formatter(|value, _| {
                Month::from_index(value as usize)
                    .map(|m| m.name().to_string())
                    .unwrap_or_default()
            });
        if ui.add(slider).changed() {
            if let Some(month) = Month::from_index(month_index) {
                events.push(ControlEvent::MonthScrubbed(month));
            }
        }

        ui.separator();

        let play_label = if playing { "⏸ Pause" } else { "▶ Play" };
        if ui.button(play_label).clicked() {
            events.push(ControlEvent::PlaybackToggled);
        }
        if ui.button("Reset").clicked() {
            events.push(ControlEvent::ViewReset);
        }
    });

    ui.horizontal(|ui| {
        for filter in SeasonFilter::ALL_FILTERS {
            let active = season_filter == filter;
            if ui.selectable_label(active, filter.name()).clicked() {
                events.push(ControlEvent::SeasonPicked(filter));
            }
        }
    });

    events
}
