//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Note: all operations are synchronous for the desktop-only egui app.

use anyhow::Result;
use shared::{Appointment, AppointmentDraft, Person};
use thiserror::Error;

/// Errors specific to the schedule store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("appointment {0} not found")]
    AppointmentNotFound(i64),

    #[error("schedule data file is malformed: {0}")]
    Malformed(String),
}

/// Data access port for appointment records.
///
/// This abstracts away the specific storage implementation, allowing the
/// domain layer to work against CSV files, a database, or an in-memory fake
/// without modification.
pub trait AppointmentStorage: Send + Sync {
    /// List all stored appointments. No pagination; the projection layer
    /// applies the date-range filter.
    fn list_appointments(&self) -> Result<Vec<Appointment>>;

    /// Store a new appointment, assigning the next free id.
    fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment>;

    /// Replace an existing appointment with the same id.
    fn update_appointment(&self, appointment: &Appointment) -> Result<()>;
}

/// Data access port for person (patient/doctor) lookup records.
pub trait PersonStorage: Send + Sync {
    /// List all known people.
    fn list_people(&self) -> Result<Vec<Person>>;

    /// Store a new person record.
    fn store_person(&self, person: &Person) -> Result<()>;
}
