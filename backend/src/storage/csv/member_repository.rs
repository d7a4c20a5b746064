use anyhow::{anyhow, Result};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::{Member, MemberRole};

const HEADER: &str = "id,name,email,role,borrowed_books";

/// Separator for the borrowed book ids inside their single CSV field.
const BORROWED_SEPARATOR: char = ';';

/// CSV-based member repository. Reads and writes the whole register at once.
#[derive(Clone)]
pub struct MemberRepository {
    connection: CsvConnection,
}

impl MemberRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all members from `members.csv`.
    pub fn read_all(&self) -> Result<Vec<Member>> {
        let file_path = self.connection.members_file_path();
        self.connection.ensure_file_exists(&file_path, HEADER)?;

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut members = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let id = record.get(0).unwrap_or("").to_string();

            let role: MemberRole = record
                .get(3)
                .unwrap_or("")
                .parse()
                .map_err(|e| anyhow!("Member '{}': {}", id, e))?;

            members.push(Member {
                id,
                name: record.get(1).unwrap_or("").to_string(),
                email: record.get(2).unwrap_or("").to_string(),
                role,
                borrowed_books: decode_borrowed_books(record.get(4).unwrap_or("")),
            });
        }

        Ok(members)
    }

    /// Overwrite `members.csv` with the given register.
    pub fn write_all(&self, members: &[Member]) -> Result<()> {
        let file_path = self.connection.members_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(&["id", "name", "email", "role", "borrowed_books"])?;

        for member in members {
            csv_writer.write_record(&[
                &member.id,
                &member.name,
                &member.email,
                &member.role.to_string(),
                &encode_borrowed_books(&member.borrowed_books),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn encode_borrowed_books(book_ids: &[String]) -> String {
    book_ids.join(&BORROWED_SEPARATOR.to_string())
}

fn decode_borrowed_books(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field
        .split(BORROWED_SEPARATOR)
        .map(str::to_string)
        .collect()
}
