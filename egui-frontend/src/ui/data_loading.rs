//! # Data Loading Module
//!
//! Fetch-and-project orchestration for the scheduler, bridging the UI and
//! the backend. There are exactly two ways events get (re)computed:
//!
//! 1. Range-change path: the view controller reports a new visible window
//!    (initial mount, navigation, view switch). The projection engine is
//!    keyed to the new range and the header title is recomputed.
//! 2. Refresh path: filters changed or an edit/create completed; the
//!    established range is reused. A no-op before the first range exists.
//!
//! Both data-access calls are treated as one joint unit: if either fails
//! the projection attempt is abandoned, the previous event set stays
//! intact (stale-but-consistent beats empty-but-broken), and the failure
//! is logged.

use log::{error, info};

use crate::backend::domain::ProjectionTicket;
use crate::backend::storage::{AppointmentStorage, PersonStorage};
use crate::ui::app_state::SchedulerApp;
use crate::ui::state::RangeChange;

impl SchedulerApp {
    /// Initial mount: anchor the calendar on today and load the first
    /// window.
    pub fn mount_calendar(&mut self) {
        let today = chrono::Local::now().date_naive();
        let change = self.view.mount(today);
        info!("📅 Calendar mounted on {}", today);
        self.apply_range_change(change);
    }

    /// Range-change path.
    pub fn apply_range_change(&mut self, change: RangeChange) {
        self.view.dates_set(change.range, &change.label);
        let ticket = self.projection.dates_set(change.range);
        self.run_projection(ticket);
    }

    /// Refresh path. Silently does nothing until a range is established.
    pub fn refresh_events(&mut self) {
        if let Some(ticket) = self.projection.refresh_ticket() {
            self.run_projection(ticket);
        }
    }

    /// Commit the filter drawer's working copy and re-project the already
    /// fetched window under the new selection.
    pub fn apply_filters(&mut self) {
        self.filters = self.filter_draft.to_selection();
        info!(
            "🔍 Filters applied: {} patients, {} doctors",
            self.filters.patient_ids.len(),
            self.filters.doctor_ids.len()
        );
        self.refresh_events();
    }

    /// Fetch appointments and people as one unit and commit the projection
    /// for `ticket`. On failure the last good event set is preserved.
    fn run_projection(&mut self, ticket: ProjectionTicket) {
        let fetched = self
            .backend
            .appointment_repository
            .list_appointments()
            .and_then(|appointments| {
                let people = self.backend.person_repository.list_people()?;
                Ok((appointments, people))
            });

        match fetched {
            Ok((appointments, people)) => {
                if self.projection.commit(ticket, &appointments, &people) {
                    info!(
                        "📊 Projected {} events for {:?}",
                        self.projection.events().len(),
                        ticket.range()
                    );
                }
                self.people = people;
                self.error_message = None;
            }
            Err(e) => {
                error!("❌ Failed to fetch schedule data: {}", e);
                self.error_message = Some(format!("Failed to load appointments: {}", e));
            }
        }
    }

    /// Submit the appointment popup: create or update depending on the
    /// pending slot, then close it and refresh.
    pub fn submit_appointment(&mut self) {
        let Some(slot) = self.modals.pending_slot.clone() else {
            return;
        };
        let form = self.modals.appointment_form.clone();

        if !form.is_complete() {
            self.error_message = Some("Select a patient and a doctor first".to_string());
            return;
        }

        let room_number = match slot.room.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                error!("❌ Pending slot has non-numeric room {:?}", slot.room);
                return;
            }
        };
        let date_time = slot.start.format("%Y-%m-%dT%H:%M:%S").to_string();

        let result = match slot.appointment_id {
            Some(id) => self
                .backend
                .appointment_repository
                .update_appointment(&shared::Appointment {
                    id,
                    date_time,
                    room_number,
                    patient_id: form.patient_id,
                    doctor_id: form.doctor_id,
                    urgency: form.urgency,
                }),
            None => self
                .backend
                .appointment_repository
                .create_appointment(&shared::AppointmentDraft {
                    date_time,
                    room_number,
                    patient_id: form.patient_id,
                    doctor_id: form.doctor_id,
                    urgency: form.urgency,
                })
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.modals.clear_pending_slot();
                self.refresh_events();
            }
            Err(e) => {
                error!("❌ Failed to save appointment: {}", e);
                self.error_message = Some(format!("Failed to save appointment: {}", e));
            }
        }
    }
}
