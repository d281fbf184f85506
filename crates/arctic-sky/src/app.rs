use std::time::Duration;

use eframe::egui;
use observations::Dataset;

use crate::actions::Action;
use crate::chart_view::{self, ChartEvent};
use crate::controls::{self, ControlEvent};
use crate::detail_view;
use crate::map_view::{self, MapEvent};
use crate::state::State;
use crate::store::Store;
use crate::summary_view;

/// Repaint cadence while autoplay is running.
const PLAYBACK_REPAINT: Duration = Duration::from_millis(100);

/// The dashboard application: one shared state, four synchronized panels.
pub struct ArcticSkyApp {
    state: State,
}

impl ArcticSkyApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: State::new(Store::new(dataset)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open dataset…").clicked() {
                        ui.close();
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file()
                        {
                            self.state
                                .dispatch(Action::LoadDataset { path });
                        }
                    }
                });
            });
        });
    }

    fn controls_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                let events = controls::show_controls(
                    ui,
                    self.state.store.current_month,
                    self.state.store.selected_site.as_deref(),
                    self.state.store.season_filter,
                    self.state.store.playback.is_playing(),
                );

                let now = ctx.input(|i| i.time);
                for event in events {
                    let action = match event {
                        ControlEvent::MonthScrubbed(month) => {
                            Action::ScrubMonth { month }
                        }
                        ControlEvent::PlaybackToggled => {
                            Action::TogglePlayback { now }
                        }
                        ControlEvent::ViewReset => Action::ResetView,
                        ControlEvent::SeasonPicked(filter) => {
                            Action::SetSeasonFilter { filter }
                        }
                    };
                    self.state.dispatch(action);
                }
            });
    }

    fn map_panel(&mut self, ctx: &egui::Context) {
        let panel_width = ctx.available_rect().width() * 0.40;
        egui::SidePanel::left("map_panel")
            .exact_width(panel_width)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                ui.heading("Site Map");
                ui.separator();

                let store = &self.state.store;
                let brightness_domain =
                    *self.state.cache.brightness_domain.get(store);
                let records =
                    self.state.cache.month_records.get(store);

                let map_height = ui.available_height() - 48.0;
                let mut event = None;
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(ui.available_width(), map_height),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        event = map_view::show_map(
                            ui,
                            records,
                            store.selected_site.as_deref(),
                            store.current_month,
                            store.season_filter,
                            brightness_domain,
                        );
                    },
                );

                map_view::show_brightness_legend(ui, brightness_domain);

                if let Some(MapEvent::SiteClicked(site)) = event {
                    self.state.dispatch(Action::SelectSite { site });
                }
            });
    }

    fn detail_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("detail_panel")
            .default_width(280.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                ui.heading("Month Detail");
                ui.separator();

                let store = &self.state.store;
                let record =
                    store.selected_site.as_deref().and_then(|site| {
                        store
                            .dataset
                            .get()
                            .record_for(site, store.current_month)
                    });
                detail_view::show_detail(ui, record);
            });
    }

    fn central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                if self.state.store.loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading dataset…");
                    });
                    ui.separator();
                }

                ui.heading("Seasonal Profile");
                ui.separator();

                let store = &self.state.store;
                let series = store
                    .selected_site
                    .as_deref()
                    .and_then(|site| {
                        store.dataset.get().site_series(site)
                    })
                    .unwrap_or(&[]);

                let chart_height =
                    (ui.available_height() - 60.0) * 0.55;
                let mut event = None;
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(
                        ui.available_width(),
                        chart_height,
                    ),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        event = chart_view::show_chart(
                            ui,
                            series,
                            store.current_month,
                        );
                    },
                );

                ui.separator();
                ui.heading("Season Averages");
                ui.separator();

                let averages =
                    self.state.cache.season_averages.get(store);
                summary_view::show_summary(
                    ui,
                    averages,
                    store.season_filter,
                );

                if let Some(ChartEvent::MonthClicked(month)) = event {
                    self.state.dispatch(Action::JumpToMonth { month });
                }
            });
    }
}

impl eframe::App for ArcticSkyApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        // The frame clock stands in for an interval timer: while playing,
        // keep frames coming and advance whenever the interval elapsed.
        let now = ctx.input(|i| i.time);
        if self.state.store.playback.should_advance(now) {
            self.state.dispatch(Action::AdvanceMonth);
        }
        if self.state.store.playback.is_playing() {
            ctx.request_repaint_after(PLAYBACK_REPAINT);
        }

        // Apply everything dispatched since the last frame, then run the
        // IO it produced. The rest of the frame redraws every panel from
        // the resulting store.
        self.state.flush_actions();
        self.state.flush_effects();

        #[cfg(not(target_arch = "wasm32"))]
        self.menu_bar(ctx);

        self.controls_panel(ctx);
        self.map_panel(ctx);
        self.detail_panel(ctx);
        self.central_panel(ctx);

        if let Some(error) = self.state.store.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.dispatch(Action::ClearErrorMessage);
                    }
                });
        }
    }
}
