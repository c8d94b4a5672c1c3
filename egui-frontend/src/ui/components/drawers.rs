//! # Drawer Modules
//!
//! The filter drawer and the profiles drawer. While either is open it
//! owns keyboard focus (the input router's gate swallows every key), so
//! closing happens only through the drawer's own buttons.
//!
//! The filter drawer edits a working copy of the selection; nothing
//! changes until Apply commits it, which triggers the refresh path on the
//! already-fetched window.

use eframe::egui;

use crate::ui::app_state::SchedulerApp;

impl SchedulerApp {
    /// Render whichever drawers are open.
    pub fn render_drawers(&mut self, ctx: &egui::Context) {
        if self.modals.show_filter_drawer {
            self.render_filter_drawer(ctx);
        }
        if self.modals.show_profiles_drawer {
            self.render_profiles_drawer(ctx);
        }
    }

    fn render_filter_drawer(&mut self, ctx: &egui::Context) {
        let patients = self.known_patients();
        let doctors = self.known_doctors();

        let mut apply = false;
        let mut close = false;

        egui::SidePanel::left("filter_drawer")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Filter");
                ui.separator();

                ui.label(egui::RichText::new("Patients").strong());
                if patients.is_empty() {
                    ui.weak("No patients in this range");
                }
                for (id, name) in &patients {
                    let mut checked = self.filter_draft.patient_ids.contains(id);
                    if ui.checkbox(&mut checked, name).changed() {
                        if checked {
                            self.filter_draft.patient_ids.insert(id.clone());
                        } else {
                            self.filter_draft.patient_ids.remove(id);
                        }
                    }
                }

                ui.separator();
                ui.label(egui::RichText::new("Doctors").strong());
                if doctors.is_empty() {
                    ui.weak("No doctors in this range");
                }
                for (id, name) in &doctors {
                    let mut checked = self.filter_draft.doctor_ids.contains(id);
                    if ui.checkbox(&mut checked, name).changed() {
                        if checked {
                            self.filter_draft.doctor_ids.insert(id.clone());
                        } else {
                            self.filter_draft.doctor_ids.remove(id);
                        }
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        apply = true;
                    }
                    if ui.button("Clear").clicked() {
                        self.filter_draft.patient_ids.clear();
                        self.filter_draft.doctor_ids.clear();
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        if apply {
            self.apply_filters();
            self.modals.show_filter_drawer = false;
        }
        if close {
            self.modals.show_filter_drawer = false;
        }
    }

    fn render_profiles_drawer(&mut self, ctx: &egui::Context) {
        let people = self.people.clone();
        let mut close = false;

        egui::SidePanel::right("profiles_drawer")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Profiles");
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for person in &people {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&person.name).strong());
                            ui.weak(&person.id);
                        });
                    }
                });

                ui.separator();
                if ui.button("Close").clicked() {
                    close = true;
                }
            });

        if close {
            self.modals.show_profiles_drawer = false;
        }
    }
}
