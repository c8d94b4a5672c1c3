//! # Storage Module
//!
//! Storage abstraction for the scheduler backend. The traits in
//! [`traits`] define the data access port the domain layer depends on;
//! [`csv`] provides the file-backed implementation used by the desktop app.

pub mod csv;
pub mod traits;

pub use csv::CsvConnection;
pub use traits::{AppointmentStorage, PersonStorage, StorageError};
