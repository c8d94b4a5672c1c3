//! # Modal State Module
//!
//! Visibility state for the side drawers and the appointment popup, plus
//! the slot selection mediator that turns grid clicks into the singleton
//! [`PendingSlot`].
//!
//! While a drawer or popup is open it owns focus: the input router's gate
//! is derived from this state, and the navigation keys stop dispatching
//! until everything is closed again.

use chrono::NaiveDateTime;
use log::info;
use shared::{DisplayEvent, PendingSlot};

use super::input_router::InputGate;
use crate::backend::domain::formatting;

/// Working copy of the appointment popup's form fields.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFormState {
    pub patient_id: String,
    pub doctor_id: String,
    pub urgency: u8,
}

impl AppointmentFormState {
    pub fn new() -> Self {
        Self {
            patient_id: String::new(),
            doctor_id: String::new(),
            urgency: 1,
        }
    }

    pub fn clear(&mut self) {
        self.patient_id.clear();
        self.doctor_id.clear();
        self.urgency = 1;
    }

    pub fn populate_from_event(&mut self, event: &DisplayEvent) {
        self.patient_id = event.patient_id.clone();
        self.doctor_id = event.doctor_id.clone();
        self.urgency = event.urgency;
    }

    pub fn is_complete(&self) -> bool {
        !self.patient_id.is_empty() && !self.doctor_id.is_empty()
    }
}

/// Drawer visibility and the pending create/edit slot.
#[derive(Debug)]
pub struct ModalState {
    /// Whether the filter drawer is open
    pub show_filter_drawer: bool,

    /// Whether the profiles drawer is open
    pub show_profiles_drawer: bool,

    /// The in-flight create/edit request, if any. Singleton: opening a new
    /// one replaces nothing because the grid is not clickable while the
    /// popup overlay is present.
    pub pending_slot: Option<PendingSlot>,

    /// Form fields for the popup bound to `pending_slot`
    pub appointment_form: AppointmentFormState,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            show_filter_drawer: false,
            show_profiles_drawer: false,
            pending_slot: None,
            appointment_form: AppointmentFormState::new(),
        }
    }

    pub fn any_drawer_open(&self) -> bool {
        self.show_filter_drawer || self.show_profiles_drawer
    }

    /// The keyboard gate implied by the current modal state.
    pub fn gate(&self) -> InputGate {
        InputGate {
            drawer_open: self.any_drawer_open(),
            popup_open: self.pending_slot.is_some(),
        }
    }

    /// Slot selection from the day grid: a room column plus a start
    /// instant becomes a create request.
    pub fn open_slot_for_create(&mut self, room_id: &str, start: NaiveDateTime) {
        let slot = PendingSlot {
            room: room_id.to_string(),
            time: formatting::slot_time_label(start),
            start,
            appointment_id: None,
        };
        info!("🕐 Selected slot: room {} at {}", slot.room, slot.time);
        self.appointment_form.clear();
        self.pending_slot = Some(slot);
    }

    /// Slot selection from clicking an existing event box: carries the
    /// appointment id so the popup opens in edit mode. The room comes from
    /// the grid placement id when present, falling back to the extended
    /// room number otherwise.
    pub fn open_slot_for_event(&mut self, event: &DisplayEvent) {
        let room = event
            .resource_id
            .clone()
            .unwrap_or_else(|| event.room_number.to_string());

        let slot = PendingSlot {
            room,
            time: formatting::slot_time_label(event.start),
            start: event.start,
            appointment_id: Some(event.id),
        };
        info!("🕐 Editing appointment {} in room {}", event.id, slot.room);
        self.appointment_form.populate_from_event(event);
        self.pending_slot = Some(slot);
    }

    /// Close the popup (Escape, close button, or successful submission).
    pub fn clear_pending_slot(&mut self) {
        self.pending_slot = None;
        self.appointment_form.clear();
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Working copy of the filter drawer's checkbox selections. Committed to
/// the app's `FilterSelection` only on Apply.
#[derive(Debug, Clone, Default)]
pub struct FilterDraftState {
    pub patient_ids: std::collections::HashSet<String>,
    pub doctor_ids: std::collections::HashSet<String>,
}

impl FilterDraftState {
    pub fn from_selection(selection: &shared::FilterSelection) -> Self {
        Self {
            patient_ids: selection.patient_ids.clone(),
            doctor_ids: selection.doctor_ids.clone(),
        }
    }

    pub fn to_selection(&self) -> shared::FilterSelection {
        shared::FilterSelection {
            patient_ids: self.patient_ids.clone(),
            doctor_ids: self.doctor_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn event_without_resource_id() -> DisplayEvent {
        DisplayEvent {
            id: 7,
            resource_id: None,
            start: slot_start(),
            calendar_date: slot_start().date(),
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            patient_name: "Jane Doe".to_string(),
            doctor_name: "D1".to_string(),
            urgency: 2,
            room_number: 3,
        }
    }

    #[test]
    fn test_slot_selection_formats_time_label() {
        let mut modals = ModalState::new();
        modals.open_slot_for_create("4", slot_start());

        let slot = modals.pending_slot.as_ref().unwrap();
        assert_eq!(slot.room, "4");
        assert_eq!(slot.time, "09:00 AM");
        assert_eq!(slot.start, slot_start());
        assert!(!slot.is_edit());
    }

    #[test]
    fn test_event_click_opens_edit_slot_with_room_fallback() {
        let mut modals = ModalState::new();
        modals.open_slot_for_event(&event_without_resource_id());

        let slot = modals.pending_slot.as_ref().unwrap();
        // No explicit resource id, so the extended room number stands in.
        assert_eq!(slot.room, "3");
        assert_eq!(slot.appointment_id, Some(7));
        assert!(slot.is_edit());
        assert_eq!(modals.appointment_form.patient_id, "P1");
        assert_eq!(modals.appointment_form.urgency, 2);
    }

    #[test]
    fn test_event_click_prefers_explicit_resource_id() {
        let mut event = event_without_resource_id();
        event.resource_id = Some("6".to_string());

        let mut modals = ModalState::new();
        modals.open_slot_for_event(&event);

        assert_eq!(modals.pending_slot.as_ref().unwrap().room, "6");
    }

    #[test]
    fn test_clear_resets_slot_and_form() {
        let mut modals = ModalState::new();
        modals.open_slot_for_event(&event_without_resource_id());
        modals.clear_pending_slot();

        assert!(modals.pending_slot.is_none());
        assert!(modals.appointment_form.patient_id.is_empty());
    }

    #[test]
    fn test_gate_reflects_modal_state() {
        let mut modals = ModalState::new();
        assert_eq!(modals.gate(), InputGate::default());

        modals.show_filter_drawer = true;
        assert!(modals.gate().drawer_open);

        modals.show_filter_drawer = false;
        modals.open_slot_for_create("1", slot_start());
        assert!(modals.gate().popup_open);
        assert!(!modals.gate().drawer_open);
    }
}
