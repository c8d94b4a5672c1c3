//! # Header Module
//!
//! Top navigation bar: filter and profiles buttons on the left, the
//! view toggle, prev/next paging, and the range title on the right. The
//! buttons drive exactly the same controller transitions as the keyboard
//! router.

use eframe::egui;

use super::theme;
use crate::ui::app_state::SchedulerApp;
use crate::ui::state::ViewMode;

impl SchedulerApp {
    /// Render the header row.
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Left section: drawers
            let filter_button = if self.filter_applied() {
                egui::Button::new("🔽 Filter").fill(theme::colors::FILTER_APPLIED)
            } else {
                egui::Button::new("🔽 Filter")
            };
            if ui.add(filter_button).clicked() {
                self.open_filter_drawer();
            }

            if ui.button("👤 Profiles").clicked() {
                self.modals.show_profiles_drawer = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Title (two lines in detail view)
                ui.label(
                    egui::RichText::new(&self.view.title_text)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong(),
                );

                ui.add_space(10.0);

                // Paging
                if ui.button(">").clicked() {
                    if let Some(change) = self.view.go_next() {
                        self.apply_range_change(change);
                    }
                }
                if ui.button("<").clicked() {
                    if let Some(change) = self.view.go_previous() {
                        self.apply_range_change(change);
                    }
                }

                ui.add_space(10.0);

                // View toggle
                let day_selected = self.view.mode == ViewMode::Detail;
                if ui.selectable_label(day_selected, "📋 Day").clicked() {
                    if let Some(change) = self.view.switch_to_detail(None) {
                        self.apply_range_change(change);
                    }
                }
                if ui.selectable_label(!day_selected, "📅 Month").clicked() {
                    if let Some(change) = self.view.switch_to_overview() {
                        self.apply_range_change(change);
                    }
                }
            });
        });
    }
}
