//! # Day View Module
//!
//! The per-room detail grid: seven room columns over the clinic's business
//! hours (09:00-17:00, one-hour slots). Booked slots render as
//! urgency-colored event boxes showing the resolved patient and doctor
//! names; empty slots are clickable to start a new appointment. Dimmed
//! events stay in the grid at reduced opacity.

use chrono::Timelike;
use eframe::egui;
use shared::{DisplayEvent, VisibilityWeight};

use super::theme;
use crate::backend::domain::{filters, formatting};
use crate::ui::app_state::SchedulerApp;

/// Opening and closing hour of the bookable day (half-open).
pub const SLOT_MIN_HOUR: u32 = 9;
pub const SLOT_MAX_HOUR: u32 = 17;

/// Deferred click action collected while the grid renders.
enum GridAction {
    SelectSlot { room_id: String, hour: u32 },
    EditEvent(DisplayEvent),
}

impl SchedulerApp {
    /// Render the per-room day grid for the established range.
    pub fn render_day_view(&mut self, ui: &mut egui::Ui) {
        let Some(range) = self.view.current_range else {
            ui.spinner();
            return;
        };
        let day = range.start.date();
        let rooms = shared::rooms();

        // Snapshot the cells up front so the render closures below don't
        // contend with the controller for borrows.
        let grid = self.build_day_cells(&rooms);
        let mut action: Option<GridAction> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("day_grid")
                .num_columns(rooms.len() + 1)
                .min_col_width(ui.available_width() / (rooms.len() + 1) as f32 - 8.0)
                .spacing(egui::vec2(4.0, 4.0))
                .show(ui, |ui| {
                    // Header row: "Rooms" gutter plus one column per room
                    ui.label(egui::RichText::new("Rooms").strong());
                    for room in &rooms {
                        ui.label(egui::RichText::new(&room.title).strong());
                    }
                    ui.end_row();

                    for (hour, row) in &grid {
                        let slot_start = day.and_hms_opt(*hour, 0, 0).unwrap();
                        ui.label(formatting::slot_time_label(slot_start));

                        for (room, cell) in rooms.iter().zip(row) {
                            match cell {
                                Some((event, weight)) => {
                                    if render_event_box(ui, event, *weight) {
                                        action = Some(GridAction::EditEvent(event.clone()));
                                    }
                                }
                                None => {
                                    if ui
                                        .add_sized(
                                            egui::vec2(ui.available_width().max(80.0), 48.0),
                                            egui::Button::new("＋").frame(false),
                                        )
                                        .clicked()
                                    {
                                        action = Some(GridAction::SelectSlot {
                                            room_id: room.id.clone(),
                                            hour: *hour,
                                        });
                                    }
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        match action {
            Some(GridAction::SelectSlot { room_id, hour }) => {
                let start = day.and_hms_opt(hour, 0, 0).unwrap();
                self.modals.open_slot_for_create(&room_id, start);
            }
            Some(GridAction::EditEvent(event)) => {
                self.modals.open_slot_for_event(&event);
            }
            None => {}
        }
    }

    /// Build the (hour, per-room cell) matrix for the visible day. Each
    /// cell carries the event and its current visibility weight; the
    /// weight is recomputed here on every frame rather than cached.
    fn build_day_cells(
        &self,
        rooms: &[shared::RoomResource],
    ) -> Vec<(u32, Vec<Option<(DisplayEvent, VisibilityWeight)>>)> {
        (SLOT_MIN_HOUR..SLOT_MAX_HOUR)
            .map(|hour| {
                let row = rooms
                    .iter()
                    .map(|room| {
                        self.projection
                            .events()
                            .iter()
                            .find(|event| event_occupies(event, &room.id, hour))
                            .map(|event| {
                                (event.clone(), filters::visibility_weight(event, &self.filters))
                            })
                    })
                    .collect();
                (hour, row)
            })
            .collect()
    }
}

/// Whether an event belongs to the given room column and hour slot. Room
/// placement prefers the explicit grid id, falling back to the extended
/// room number.
fn event_occupies(event: &DisplayEvent, room_id: &str, hour: u32) -> bool {
    let room_matches = match &event.resource_id {
        Some(id) => id == room_id,
        None => event.room_number.to_string() == room_id,
    };
    room_matches && event.start.hour() == hour
}

/// Render one booked slot; returns true when it was clicked.
fn render_event_box(ui: &mut egui::Ui, event: &DisplayEvent, weight: VisibilityWeight) -> bool {
    let fill = theme::weighted_fill(theme::urgency_fill(event.urgency), weight);
    let label = format!("{}\n🩺 {}", event.patient_name, event.doctor_name);

    let button = egui::Button::new(egui::RichText::new(label).color(egui::Color32::BLACK))
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, theme::colors::EVENT_BORDER))
        .rounding(egui::Rounding::same(4.0));

    ui.add_sized(egui::vec2(ui.available_width().max(80.0), 48.0), button)
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event_at(hour: u32, resource_id: Option<&str>, room_number: u32) -> DisplayEvent {
        let start = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        DisplayEvent {
            id: 1,
            resource_id: resource_id.map(str::to_string),
            start,
            calendar_date: start.date(),
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            patient_name: "Jane Doe".to_string(),
            doctor_name: "D1".to_string(),
            urgency: 1,
            room_number,
        }
    }

    #[test]
    fn test_event_occupies_matching_room_and_hour() {
        let event = event_at(10, Some("3"), 3);
        assert!(event_occupies(&event, "3", 10));
        assert!(!event_occupies(&event, "3", 11));
        assert!(!event_occupies(&event, "4", 10));
    }

    #[test]
    fn test_event_occupies_falls_back_to_room_number() {
        let event = event_at(10, None, 5);
        assert!(event_occupies(&event, "5", 10));
        assert!(!event_occupies(&event, "3", 10));
    }
}
