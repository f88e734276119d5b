use std::time::Duration;

use crate::state::{Resource, State};
use crate::widgets;

/// Repaint cadence while a fetch is outstanding.
const LOADING_REPAINT: Duration = Duration::from_millis(50);

pub struct HolocronApp {
    state: State,
}

impl HolocronApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Advance the clock, mount the visible table and apply finished fetches.
    fn sync(&mut self) {
        self.state.time.tick();
        let now = self.state.now();

        self.state.selected_table_mut().mount();
        for resource in Resource::ALL {
            self.state.table_mut(resource).poll(now);
        }
    }

    /// Keep frames coming while something is pending; egui would otherwise
    /// sleep until the next input event.
    fn schedule_repaint(&self, ctx: &egui::Context) {
        let now = self.state.now();
        let mut next: Option<Duration> = None;

        for resource in Resource::ALL {
            let table = self.state.table(resource);
            if table.is_loading() {
                next = Some(next.map_or(LOADING_REPAINT, |d| d.min(LOADING_REPAINT)));
            }
            if let Some(remaining) = table.debounce_remaining(now) {
                let remaining = remaining.to_std().unwrap_or_default();
                next = Some(next.map_or(remaining, |d| d.min(remaining)));
            }
        }

        if let Some(after) = next {
            ctx.request_repaint_after(after);
        }
    }
}

impl eframe::App for HolocronApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Holocron");
                ui.separator();
                for resource in Resource::ALL {
                    ui.selectable_value(&mut self.state.selected, resource, resource.title());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let resource = self.state.selected;
            ui.heading(resource.title());
            ui.separator();

            let now = self.state.now();
            widgets::data_table(ui, self.state.table_mut(resource), now);

            ui.add_space(12.0);
            powered_by_egui_and_eframe(ui);
        });

        self.schedule_repaint(ctx);
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Data from ");
        ui.hyperlink_to("SWAPI", "https://swapi.dev");
        ui.label(", powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(".");
    });
}
