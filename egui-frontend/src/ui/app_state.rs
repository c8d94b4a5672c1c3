//! # App State Module
//!
//! Central application state for the scheduler: the backend connection,
//! the projection engine holding the committed display events, the active
//! filter selection, and the modular view/modal state.
//!
//! The struct is the single source of truth; the coordinator and the
//! component renderers all operate on it. The projection engine and the
//! view state are the only writers of the event set and the visible range;
//! everything else reads.

use anyhow::Result;
use log::info;
use shared::{FilterSelection, Person};

use crate::backend::domain::ProjectionEngine;
use crate::backend::Backend;
use crate::ui::state::{FilterDraftState, ModalState, ViewState};

/// Main application struct for the egui scheduler.
pub struct SchedulerApp {
    pub backend: Backend,

    /// Owner of the committed display events and the active range
    pub projection: ProjectionEngine,

    /// People cache from the last successful fetch, used by the drawers
    /// and the appointment popup
    pub people: Vec<Person>,

    /// The committed participant filter selection
    pub filters: FilterSelection,

    /// Working copy of the filter drawer's checkboxes
    pub filter_draft: FilterDraftState,

    // View and modal state
    pub view: ViewState,
    pub modals: ModalState,

    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl SchedulerApp {
    /// Create a new app instance with a backend connection.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        info!("🚀 Initializing clinic scheduler");

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            projection: ProjectionEngine::new(),
            people: Vec::new(),
            filters: FilterSelection::default(),
            filter_draft: FilterDraftState::default(),
            view: ViewState::new(),
            modals: ModalState::new(),
            error_message: None,
        })
    }

    /// Whether any participant filter is currently applied (drives the
    /// highlight on the header's filter button).
    pub fn filter_applied(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Unique patients referenced by the visible events, as (id, resolved
    /// name) pairs sorted by name. The filter drawer offers exactly the
    /// participants that occur in the current window.
    pub fn known_patients(&self) -> Vec<(String, String)> {
        self.known_participants(|event| (&event.patient_id, &event.patient_name))
    }

    /// Unique doctors referenced by the visible events, sorted by name.
    pub fn known_doctors(&self) -> Vec<(String, String)> {
        self.known_participants(|event| (&event.doctor_id, &event.doctor_name))
    }

    fn known_participants<'a, F>(&'a self, pick: F) -> Vec<(String, String)>
    where
        F: Fn(&'a shared::DisplayEvent) -> (&'a String, &'a String),
    {
        let mut seen = std::collections::HashSet::new();
        let mut participants: Vec<(String, String)> = self
            .projection
            .events()
            .iter()
            .map(pick)
            .filter(|(id, _)| seen.insert(id.clone()))
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        participants.sort_by(|a, b| a.1.cmp(&b.1));
        participants
    }

    /// Resolve a person id against the people cache, falling back to the
    /// raw id.
    pub fn person_name(&self, id: &str) -> String {
        self.people
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
