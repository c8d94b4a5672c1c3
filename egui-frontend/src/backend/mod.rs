//! # Backend Module for egui Frontend
//!
//! Direct, synchronous access to the scheduler's domain logic and storage
//! for the desktop app. There is no IO/REST layer in between; the UI calls
//! straight into the repositories and domain functions.

use anyhow::Result;
use log::info;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;
use storage::csv::{AppointmentRepository, PersonRepository};

/// Backend handle bundling the data access repositories.
pub struct Backend {
    pub appointment_repository: AppointmentRepository,
    pub person_repository: PersonRepository,
}

impl Backend {
    /// Create a backend rooted at the platform data directory, seeding the
    /// people roster on first run.
    pub fn new() -> Result<Self> {
        Self::with_connection(CsvConnection::new(CsvConnection::default_directory())?)
    }

    /// Create a backend over an explicit connection (used by tests).
    pub fn with_connection(connection: CsvConnection) -> Result<Self> {
        info!(
            "🗄️ Opening schedule store at {}",
            connection.base_directory().display()
        );

        let person_repository = PersonRepository::new(connection.clone());
        person_repository.seed_if_empty()?;

        Ok(Self {
            appointment_repository: AppointmentRepository::new(connection),
            person_repository,
        })
    }
}
