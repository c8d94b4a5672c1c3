//! # CSV Storage Module
//!
//! File-backed storage for the scheduler. Appointments and people live in
//! two CSV files under the application data directory:
//!
//! ```csv
//! id,date_time,room_number,patient_id,doctor_id,urgency
//! 7,2025-04-15T10:00:00,3,P1,D1,2
//! ```
//!
//! ```csv
//! id,name
//! P1,Jane Doe
//! D1,Dr. Amir Hassan
//! ```
//!
//! Writes replace the whole file through a temp-file rename so a crash
//! mid-write never leaves a half-written schedule behind.

pub mod appointment_repository;
pub mod connection;
pub mod person_repository;

#[cfg(test)]
pub mod test_utils;

pub use appointment_repository::AppointmentRepository;
pub use connection::CsvConnection;
pub use person_repository::PersonRepository;
