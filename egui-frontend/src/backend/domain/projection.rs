//! Event projection: raw appointments + people + visible range in,
//! render-ready `DisplayEvent`s out.
//!
//! The projection itself is a pure function. The [`ProjectionEngine`]
//! around it owns the committed event set and the currently established
//! range, and enforces two invariants:
//!
//! - the event set is replaced wholesale on every commit, so consumers
//!   never observe a torn mix of old and new events;
//! - every fetch is keyed to the range/filter state that requested it via a
//!   [`ProjectionTicket`], and a result whose ticket no longer matches the
//!   engine's generation is discarded instead of overwriting fresher state.

use log::{debug, warn};
use shared::{Appointment, DisplayEvent, Person, ViewRange};
use std::collections::HashMap;

use super::formatting::parse_wall_clock;

/// Project raw records into display events for one visible range.
///
/// Appointments outside `[range.start, range.end)` are dropped. Patient and
/// doctor names resolve against `people` by id; an unresolved id falls back
/// to the raw id value rather than erroring. Rows with an unparsable
/// timestamp are skipped with a warning. Output order is not significant.
pub fn project(
    appointments: &[Appointment],
    people: &[Person],
    range: ViewRange,
) -> Vec<DisplayEvent> {
    let people_by_id: HashMap<&str, &Person> =
        people.iter().map(|p| (p.id.as_str(), p)).collect();

    let resolve = |id: &str| -> String {
        people_by_id
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    appointments
        .iter()
        .filter_map(|appointment| {
            let start = match parse_wall_clock(&appointment.date_time) {
                Some(start) => start,
                None => {
                    warn!(
                        "⚠️ Skipping appointment {} with unparsable date_time {:?}",
                        appointment.id, appointment.date_time
                    );
                    return None;
                }
            };

            if !range.contains(start) {
                return None;
            }

            Some(DisplayEvent {
                id: appointment.id,
                resource_id: Some(appointment.room_number.to_string()),
                start,
                calendar_date: start.date(),
                patient_id: appointment.patient_id.clone(),
                doctor_id: appointment.doctor_id.clone(),
                patient_name: resolve(&appointment.patient_id),
                doctor_name: resolve(&appointment.doctor_id),
                urgency: appointment.urgency,
                room_number: appointment.room_number,
            })
        })
        .collect()
}

/// Claim on a projection pass, keyed to the state that requested it.
///
/// Obtained from [`ProjectionEngine::dates_set`] (range-change path) or
/// [`ProjectionEngine::refresh_ticket`] (refresh path) before fetching, and
/// redeemed with [`ProjectionEngine::commit`] after the data arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionTicket {
    generation: u64,
    range: ViewRange,
}

impl ProjectionTicket {
    pub fn range(&self) -> ViewRange {
        self.range
    }
}

/// Owner of the committed display events and the active visible range.
#[derive(Debug, Default)]
pub struct ProjectionEngine {
    range: Option<ViewRange>,
    generation: u64,
    events: Vec<DisplayEvent>,
}

impl ProjectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently committed events.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// The established visible range, if any callback has arrived yet.
    pub fn current_range(&self) -> Option<ViewRange> {
        self.range
    }

    /// Range-change path: install a new visible window and hand back a
    /// ticket for the fetch that must follow. Any ticket issued earlier
    /// becomes stale.
    pub fn dates_set(&mut self, range: ViewRange) -> ProjectionTicket {
        self.range = Some(range);
        self.generation += 1;
        ProjectionTicket {
            generation: self.generation,
            range,
        }
    }

    /// Refresh path: reuse the established range (filters changed or an
    /// edit completed). Returns `None` before the first range-change
    /// callback, in which case the refresh is a no-op.
    pub fn refresh_ticket(&mut self) -> Option<ProjectionTicket> {
        let range = self.range?;
        self.generation += 1;
        Some(ProjectionTicket {
            generation: self.generation,
            range,
        })
    }

    /// Commit a completed fetch. The whole event set is replaced in one
    /// assignment if the ticket is still current; a stale ticket (a newer
    /// range-change or refresh happened since it was issued) is discarded
    /// so a late response can never overwrite fresher state.
    ///
    /// Returns `true` when the commit was applied.
    pub fn commit(
        &mut self,
        ticket: ProjectionTicket,
        appointments: &[Appointment],
        people: &[Person],
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "🗓️ Discarding stale projection result for range {:?}",
                ticket.range
            );
            return false;
        }

        self.events = project(appointments, people, ticket.range);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start_day: u32, end_day: u32) -> ViewRange {
        ViewRange {
            start: NaiveDate::from_ymd_opt(2025, 4, start_day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 4, end_day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn appointment(id: i64, date_time: &str) -> Appointment {
        Appointment {
            id,
            date_time: date_time.to_string(),
            room_number: 3,
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            urgency: 2,
        }
    }

    fn jane() -> Person {
        Person {
            id: "P1".to_string(),
            name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_projection_resolves_names_with_raw_id_fallback() {
        let appointments = vec![appointment(7, "2025-04-15T10:00:00")];
        let people = vec![jane()];

        let events = project(&appointments, &people, range(15, 16));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 7);
        assert_eq!(events[0].resource_id.as_deref(), Some("3"));
        assert_eq!(events[0].patient_name, "Jane Doe");
        // D1 has no person record, so the raw id stands in.
        assert_eq!(events[0].doctor_name, "D1");
        assert_eq!(events[0].urgency, 2);
        assert_eq!(
            events[0].calendar_date,
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_projection_range_is_left_inclusive_right_exclusive() {
        let appointments = vec![
            appointment(1, "2025-04-15T00:00:00"), // exactly at start: included
            appointment(2, "2025-04-15T23:59:59"),
            appointment(3, "2025-04-16T00:00:00"), // exactly at end: excluded
            appointment(4, "2025-04-14T23:59:59"),
        ];

        let events = project(&appointments, &[], range(15, 16));
        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();

        assert!(ids.contains(&1));
        assert!(ids.contains(&2));
        assert!(!ids.contains(&3));
        assert!(!ids.contains(&4));
    }

    #[test]
    fn test_projection_skips_unparsable_rows() {
        let appointments = vec![
            appointment(1, "2025-04-15T10:00:00"),
            appointment(2, "yesterday-ish"),
        ];

        let events = project(&appointments, &[], range(15, 16));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
    }

    #[test]
    fn test_engine_commit_replaces_event_set_wholesale() {
        let mut engine = ProjectionEngine::new();

        let ticket = engine.dates_set(range(15, 16));
        assert!(engine.commit(ticket, &[appointment(1, "2025-04-15T10:00:00")], &[]));
        assert_eq!(engine.events().len(), 1);

        let ticket = engine.dates_set(range(16, 17));
        assert!(engine.commit(ticket, &[appointment(2, "2025-04-16T10:00:00")], &[]));

        // No event from the previous window survives.
        assert_eq!(engine.events().len(), 1);
        assert_eq!(engine.events()[0].id, 2);
    }

    #[test]
    fn test_engine_discards_stale_ticket() {
        let mut engine = ProjectionEngine::new();

        let old_ticket = engine.dates_set(range(15, 16));
        let new_ticket = engine.dates_set(range(16, 17));
        assert!(engine.commit(new_ticket, &[appointment(2, "2025-04-16T10:00:00")], &[]));

        // The late arrival for the superseded window must be discarded.
        assert!(!engine.commit(old_ticket, &[appointment(1, "2025-04-15T10:00:00")], &[]));
        assert_eq!(engine.events().len(), 1);
        assert_eq!(engine.events()[0].id, 2);
    }

    #[test]
    fn test_refresh_is_noop_before_first_range() {
        let mut engine = ProjectionEngine::new();
        assert!(engine.refresh_ticket().is_none());
    }

    #[test]
    fn test_refresh_reuses_range_and_is_idempotent() {
        let mut engine = ProjectionEngine::new();
        let appointments = vec![appointment(1, "2025-04-15T10:00:00")];

        let ticket = engine.dates_set(range(15, 16));
        assert!(engine.commit(ticket, &appointments, &[]));
        let first = engine.events().to_vec();

        for _ in 0..2 {
            let ticket = engine.refresh_ticket().expect("range is established");
            assert_eq!(ticket.range(), range(15, 16));
            assert!(engine.commit(ticket, &appointments, &[]));
        }

        assert_eq!(engine.events(), first.as_slice());
    }

    #[test]
    fn test_failed_fetch_leaves_previous_events_untouched() {
        let mut engine = ProjectionEngine::new();

        let ticket = engine.dates_set(range(15, 16));
        assert!(engine.commit(ticket, &[appointment(1, "2025-04-15T10:00:00")], &[jane()]));

        // A failing fetch never reaches commit; the engine keeps the last
        // good set even though a newer ticket was issued.
        let _abandoned = engine.dates_set(range(16, 17));
        assert_eq!(engine.events().len(), 1);
        assert_eq!(engine.events()[0].id, 1);
    }
}
