//! Shared data types for the clinic scheduler.
//!
//! These are the plain-data records that cross the boundaries between the
//! storage layer, the domain logic, and the UI. Raw `Appointment` and
//! `Person` records are owned by the backing store; everything derived for
//! rendering (`DisplayEvent`, visibility weights, pending slots) is built
//! fresh by the domain layer and never mutated in place.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of bookable rooms in the clinic.
pub const ROOM_COUNT: u32 = 7;

/// A booked appointment as persisted by the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    /// Naive local wall-clock timestamp, `YYYY-MM-DDTHH:MM:SS`.
    /// A space separator instead of `T` is tolerated on read.
    pub date_time: String,
    /// Room the appointment is booked in (1..=7)
    pub room_number: u32,
    pub patient_id: String,
    pub doctor_id: String,
    /// Urgency level: 1 = routine, 2 = elevated, 3 = urgent
    pub urgency: u8,
}

/// Fields of an appointment that is about to be created.
///
/// The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub date_time: String,
    pub room_number: u32,
    pub patient_id: String,
    pub doctor_id: String,
    pub urgency: u8,
}

/// A patient or doctor lookup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

/// Render-ready projection of an appointment for the calendar views.
///
/// One `DisplayEvent` exists per appointment inside the currently visible
/// date range. The set is replaced wholesale on every projection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayEvent {
    pub id: i64,
    /// Room id used for grid column placement (string form of the room
    /// number). May be absent on events that never went through grid
    /// placement; `room_number` is the fallback.
    pub resource_id: Option<String>,
    pub start: NaiveDateTime,
    /// Date-only projection of `start`, used for month-view aggregation.
    pub calendar_date: NaiveDate,
    pub patient_id: String,
    pub doctor_id: String,
    /// Resolved patient name, or the raw patient id when unresolved.
    pub patient_name: String,
    /// Resolved doctor name, or the raw doctor id when unresolved.
    pub doctor_name: String,
    pub urgency: u8,
    pub room_number: u32,
}

impl DisplayEvent {
    /// Title label shown on the event box.
    pub fn title(&self) -> String {
        format!("Room {}", self.room_number)
    }
}

/// Half-open visible date window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ViewRange {
    /// Left-inclusive, right-exclusive containment check.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Participant filter selection. Empty sets mean "show everything at full
/// weight" - filtering de-emphasizes events, it never removes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub patient_ids: HashSet<String>,
    pub doctor_ids: HashSet<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.patient_ids.is_empty() && self.doctor_ids.is_empty()
    }
}

/// Rendering weight computed from the filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityWeight {
    Full,
    Dimmed,
}

/// The in-flight create/edit request captured from a slot or event click.
///
/// At most one exists at a time; it lives from the user's selection until
/// the popup closes.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSlot {
    /// Room id as a string ("1".."7").
    pub room: String,
    /// Display time label, e.g. "09:00 AM".
    pub time: String,
    /// The original selected instant, kept for the editor.
    pub start: NaiveDateTime,
    /// Present when editing an existing appointment, absent when creating.
    pub appointment_id: Option<i64>,
}

impl PendingSlot {
    pub fn is_edit(&self) -> bool {
        self.appointment_id.is_some()
    }
}

/// A bookable room column in the day grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResource {
    pub id: String,
    pub title: String,
}

/// The fixed room list (rooms 1..=7).
pub fn rooms() -> Vec<RoomResource> {
    (1..=ROOM_COUNT)
        .map(|n| RoomResource {
            id: n.to_string(),
            title: format!("Room {}", n),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_range_is_half_open() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let range = ViewRange { start, end };

        assert!(range.contains(start));
        assert!(!range.contains(end));
    }

    #[test]
    fn test_display_event_title_names_the_room() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let event = DisplayEvent {
            id: 1,
            resource_id: Some("3".to_string()),
            start,
            calendar_date: start.date(),
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            patient_name: "Jane Doe".to_string(),
            doctor_name: "Dr. Amir Hassan".to_string(),
            urgency: 2,
            room_number: 3,
        };

        assert_eq!(event.title(), "Room 3");
    }

    #[test]
    fn test_rooms_are_one_through_seven() {
        let rooms = rooms();
        assert_eq!(rooms.len(), 7);
        assert_eq!(rooms[0].id, "1");
        assert_eq!(rooms[0].title, "Room 1");
        assert_eq!(rooms[6].id, "7");
    }

    #[test]
    fn test_empty_filter_selection() {
        let mut filters = FilterSelection::default();
        assert!(filters.is_empty());

        filters.patient_ids.insert("P1".to_string());
        assert!(!filters.is_empty());
    }
}
