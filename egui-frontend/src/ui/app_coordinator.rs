//! # App Coordinator Module
//!
//! The main update loop: keyboard routing, initial mount, and the overall
//! frame layout (header, message row, active calendar view, drawers,
//! popup).
//!
//! Keyboard handling happens before any widget renders: the pressed keys
//! are routed through the input gate derived from the modal state, and the
//! resulting commands are dispatched to the view controller. Because egui
//! is immediate-mode there is no listener object to leak; the gate is
//! re-evaluated from scratch every frame.

use eframe::egui;

use crate::ui::app_state::SchedulerApp;
use crate::ui::state::{route_key, NavCommand, ViewMode, ROUTED_KEYS};

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame: fire the initial dates-set callback.
        if self.view.focus.is_none() {
            self.mount_calendar();
        }

        self.handle_keyboard(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            self.render_messages(ui);

            match self.view.mode {
                ViewMode::Overview => self.render_month_view(ui),
                ViewMode::Detail => self.render_day_view(ui),
            }
        });

        self.render_drawers(ctx);
        self.render_appointment_popup(ctx);
    }
}

impl SchedulerApp {
    /// Poll the routed keys and dispatch whatever passes the gate.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let gate = self.modals.gate();
        let commands: Vec<NavCommand> = ctx.input(|input| {
            ROUTED_KEYS
                .iter()
                .filter(|key| input.key_pressed(**key))
                .filter_map(|key| route_key(*key, gate))
                .collect()
        });

        for command in commands {
            self.dispatch(command);
        }
    }

    /// Apply one routed command to the controller or modal state.
    pub fn dispatch(&mut self, command: NavCommand) {
        match command {
            NavCommand::PreviousPage => {
                if let Some(change) = self.view.go_previous() {
                    self.apply_range_change(change);
                }
            }
            NavCommand::NextPage => {
                if let Some(change) = self.view.go_next() {
                    self.apply_range_change(change);
                }
            }
            NavCommand::OverviewView => {
                if let Some(change) = self.view.switch_to_overview() {
                    self.apply_range_change(change);
                }
            }
            NavCommand::DetailView => {
                if let Some(change) = self.view.switch_to_detail(None) {
                    self.apply_range_change(change);
                }
            }
            NavCommand::OpenFilterDrawer => self.open_filter_drawer(),
            NavCommand::OpenProfilesDrawer => self.modals.show_profiles_drawer = true,
            NavCommand::DismissPopup => self.modals.clear_pending_slot(),
        }
    }

    /// Open the filter drawer with a working copy of the committed
    /// selection.
    pub fn open_filter_drawer(&mut self) {
        self.filter_draft = crate::ui::state::FilterDraftState::from_selection(&self.filters);
        self.modals.show_filter_drawer = true;
    }

    /// Render the error message row, if any.
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
    }
}
