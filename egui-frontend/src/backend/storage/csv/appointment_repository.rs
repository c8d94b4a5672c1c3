//! CSV-based appointment repository.

use anyhow::Result;
use csv::{Reader, Writer};
use log::info;
use shared::{Appointment, AppointmentDraft};
use std::fs::File;
use std::io::BufReader;

use super::connection::CsvConnection;
use crate::backend::storage::traits::{AppointmentStorage, StorageError};

/// Appointment store backed by `appointments.csv`.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    connection: CsvConnection,
}

impl AppointmentRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read every appointment row from disk. A missing file is an empty
    /// schedule, not an error.
    fn read_all(&self) -> Result<Vec<Appointment>> {
        let path = self.connection.appointments_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut appointments = Vec::new();
        for row in csv_reader.deserialize::<Appointment>() {
            let appointment =
                row.map_err(|e| StorageError::Malformed(format!("appointments.csv: {}", e)))?;
            appointments.push(appointment);
        }

        Ok(appointments)
    }

    /// Rewrite the whole appointments file atomically.
    fn write_all(&self, appointments: &[Appointment]) -> Result<()> {
        let mut contents = Vec::new();
        {
            let mut writer = Writer::from_writer(&mut contents);
            for appointment in appointments {
                writer.serialize(appointment)?;
            }
            writer.flush()?;
        }
        self.connection
            .replace_file(&self.connection.appointments_path(), &contents)
    }
}

impl AppointmentStorage for AppointmentRepository {
    fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.read_all()
    }

    fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment> {
        let mut appointments = self.read_all()?;
        let next_id = appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1;

        let appointment = Appointment {
            id: next_id,
            date_time: draft.date_time.clone(),
            room_number: draft.room_number,
            patient_id: draft.patient_id.clone(),
            doctor_id: draft.doctor_id.clone(),
            urgency: draft.urgency,
        };

        appointments.push(appointment.clone());
        self.write_all(&appointments)?;

        info!(
            "📋 Stored appointment {} in room {} at {}",
            appointment.id, appointment.room_number, appointment.date_time
        );
        Ok(appointment)
    }

    fn update_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = self.read_all()?;
        let slot = appointments
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or(StorageError::AppointmentNotFound(appointment.id))?;

        *slot = appointment.clone();
        self.write_all(&appointments)?;

        info!("📋 Updated appointment {}", appointment.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::temp_connection;

    fn sample_draft() -> AppointmentDraft {
        AppointmentDraft {
            date_time: "2025-04-15T10:00:00".to_string(),
            room_number: 3,
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            urgency: 2,
        }
    }

    #[test]
    fn test_list_is_empty_before_first_write() {
        let (_dir, connection) = temp_connection();
        let repo = AppointmentRepository::new(connection);

        assert!(repo.list_appointments().unwrap().is_empty());
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (_dir, connection) = temp_connection();
        let repo = AppointmentRepository::new(connection);

        let first = repo.create_appointment(&sample_draft()).unwrap();
        let second = repo.create_appointment(&sample_draft()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list_appointments().unwrap().len(), 2);
    }

    #[test]
    fn test_create_then_list_round_trips_fields() {
        let (_dir, connection) = temp_connection();
        let repo = AppointmentRepository::new(connection);

        repo.create_appointment(&sample_draft()).unwrap();
        let stored = repo.list_appointments().unwrap();

        assert_eq!(stored[0].date_time, "2025-04-15T10:00:00");
        assert_eq!(stored[0].room_number, 3);
        assert_eq!(stored[0].patient_id, "P1");
        assert_eq!(stored[0].doctor_id, "D1");
        assert_eq!(stored[0].urgency, 2);
    }

    #[test]
    fn test_update_replaces_matching_row() {
        let (_dir, connection) = temp_connection();
        let repo = AppointmentRepository::new(connection);

        let mut appointment = repo.create_appointment(&sample_draft()).unwrap();
        appointment.room_number = 5;
        appointment.urgency = 3;
        repo.update_appointment(&appointment).unwrap();

        let stored = repo.list_appointments().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].room_number, 5);
        assert_eq!(stored[0].urgency, 3);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let (_dir, connection) = temp_connection();
        let repo = AppointmentRepository::new(connection);

        let appointment = Appointment {
            id: 99,
            date_time: "2025-04-15T10:00:00".to_string(),
            room_number: 1,
            patient_id: "P1".to_string(),
            doctor_id: "D1".to_string(),
            urgency: 1,
        };

        assert!(repo.update_appointment(&appointment).is_err());
    }
}
