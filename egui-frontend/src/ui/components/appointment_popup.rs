//! # Appointment Popup Module
//!
//! The create/edit popup bound to the pending slot. Opens in create mode
//! from an empty slot click and in edit mode from an event click (the
//! pending slot then carries the appointment id). While it is open, the
//! input router swallows everything except Escape.

use eframe::egui;

use crate::ui::app_state::SchedulerApp;

/// Deferred popup outcome collected during rendering.
enum PopupAction {
    Save,
    Close,
}

impl SchedulerApp {
    /// Render the appointment popup when a slot is pending.
    pub fn render_appointment_popup(&mut self, ctx: &egui::Context) {
        let Some(slot) = self.modals.pending_slot.clone() else {
            return;
        };
        let people = self.people.clone();
        let title = if slot.is_edit() {
            "Edit Appointment"
        } else {
            "New Appointment"
        };

        let mut action: Option<PopupAction> = None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!("Room {}", slot.room));
                ui.label(format!("{} at {}", slot.start.date(), slot.time));
                ui.separator();

                let patient_label = self.person_name(&self.modals.appointment_form.patient_id);
                egui::ComboBox::from_label("Patient")
                    .selected_text(patient_label)
                    .show_ui(ui, |ui| {
                        for person in &people {
                            ui.selectable_value(
                                &mut self.modals.appointment_form.patient_id,
                                person.id.clone(),
                                &person.name,
                            );
                        }
                    });

                let doctor_label = self.person_name(&self.modals.appointment_form.doctor_id);
                egui::ComboBox::from_label("Doctor")
                    .selected_text(doctor_label)
                    .show_ui(ui, |ui| {
                        for person in &people {
                            ui.selectable_value(
                                &mut self.modals.appointment_form.doctor_id,
                                person.id.clone(),
                                &person.name,
                            );
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("Urgency:");
                    ui.radio_value(&mut self.modals.appointment_form.urgency, 1, "Routine");
                    ui.radio_value(&mut self.modals.appointment_form.urgency, 2, "Elevated");
                    ui.radio_value(&mut self.modals.appointment_form.urgency, 3, "Urgent");
                });

                ui.separator();
                ui.horizontal(|ui| {
                    let can_save = self.modals.appointment_form.is_complete();
                    if ui
                        .add_enabled(can_save, egui::Button::new("Save"))
                        .clicked()
                    {
                        action = Some(PopupAction::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(PopupAction::Close);
                    }
                });
            });

        match action {
            Some(PopupAction::Save) => self.submit_appointment(),
            Some(PopupAction::Close) => self.modals.clear_pending_slot(),
            None => {}
        }
    }
}
