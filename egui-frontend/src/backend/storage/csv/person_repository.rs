//! CSV-based person repository with first-run seeding.

use anyhow::Result;
use csv::{Reader, Writer};
use log::info;
use shared::Person;
use std::fs::File;
use std::io::BufReader;

use super::connection::CsvConnection;
use crate::backend::storage::traits::{PersonStorage, StorageError};

/// Person store backed by `people.csv`.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    connection: CsvConnection,
}

impl PersonRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Person>> {
        let path = self.connection.people_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut people = Vec::new();
        for row in csv_reader.deserialize::<Person>() {
            let person = row.map_err(|e| StorageError::Malformed(format!("people.csv: {}", e)))?;
            people.push(person);
        }

        Ok(people)
    }

    fn write_all(&self, people: &[Person]) -> Result<()> {
        let mut contents = Vec::new();
        {
            let mut writer = Writer::from_writer(&mut contents);
            for person in people {
                writer.serialize(person)?;
            }
            writer.flush()?;
        }
        self.connection
            .replace_file(&self.connection.people_path(), &contents)
    }

    /// Write a starter roster on first run so the app is usable before any
    /// people have been registered.
    pub fn seed_if_empty(&self) -> Result<()> {
        if self.connection.people_path().exists() {
            return Ok(());
        }

        let roster = vec![
            Person { id: "P1".to_string(), name: "Jane Doe".to_string() },
            Person { id: "P2".to_string(), name: "Tom Petersen".to_string() },
            Person { id: "P3".to_string(), name: "Maria Olsen".to_string() },
            Person { id: "D1".to_string(), name: "Dr. Amir Hassan".to_string() },
            Person { id: "D2".to_string(), name: "Dr. Sofie Lund".to_string() },
        ];

        self.write_all(&roster)?;
        info!("👥 Seeded people.csv with {} starter records", roster.len());
        Ok(())
    }
}

impl PersonStorage for PersonRepository {
    fn list_people(&self) -> Result<Vec<Person>> {
        self.read_all()
    }

    fn store_person(&self, person: &Person) -> Result<()> {
        let mut people = self.read_all()?;
        people.retain(|p| p.id != person.id);
        people.push(person.clone());
        self.write_all(&people)
    }
}
