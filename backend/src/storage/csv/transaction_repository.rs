use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::{Transaction, TransactionStatus};

const HEADER: &str = "id,member_id,book_id,borrow_date,due_date,return_date,fine,status";

/// CSV-based transaction repository. Reads and writes the whole ledger at
/// once; dates are stored as RFC 3339 text, the CSV layer owns all parsing.
#[derive(Clone)]
pub struct TransactionRepository {
    connection: CsvConnection,
}

impl TransactionRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the full ledger from `transactions.csv`.
    pub fn read_all(&self) -> Result<Vec<Transaction>> {
        let file_path = self.connection.transactions_file_path();
        self.connection.ensure_file_exists(&file_path, HEADER)?;

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut transactions = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let id = record.get(0).unwrap_or("").to_string();

            let borrow_date = parse_date(record.get(3).unwrap_or(""))
                .with_context(|| format!("Invalid borrow_date for transaction '{}'", id))?;
            let due_date = parse_date(record.get(4).unwrap_or(""))
                .with_context(|| format!("Invalid due_date for transaction '{}'", id))?;

            let return_field = record.get(5).unwrap_or("");
            let return_date = if return_field.is_empty() {
                None
            } else {
                Some(
                    parse_date(return_field).with_context(|| {
                        format!("Invalid return_date for transaction '{}'", id)
                    })?,
                )
            };

            let fine: u32 = record
                .get(6)
                .unwrap_or("")
                .parse()
                .with_context(|| format!("Invalid fine for transaction '{}'", id))?;

            let status: TransactionStatus = record
                .get(7)
                .unwrap_or("")
                .parse()
                .map_err(|e| anyhow!("Transaction '{}': {}", id, e))?;

            transactions.push(Transaction {
                id,
                member_id: record.get(1).unwrap_or("").to_string(),
                book_id: record.get(2).unwrap_or("").to_string(),
                borrow_date,
                due_date,
                return_date,
                fine,
                status,
            });
        }

        Ok(transactions)
    }

    /// Overwrite `transactions.csv` with the given ledger.
    pub fn write_all(&self, transactions: &[Transaction]) -> Result<()> {
        let file_path = self.connection.transactions_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(&[
            "id",
            "member_id",
            "book_id",
            "borrow_date",
            "due_date",
            "return_date",
            "fine",
            "status",
        ])?;

        for transaction in transactions {
            csv_writer.write_record(&[
                &transaction.id,
                &transaction.member_id,
                &transaction.book_id,
                &transaction.borrow_date.to_rfc3339(),
                &transaction.due_date.to_rfc3339(),
                &transaction
                    .return_date
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_default(),
                &transaction.fine.to_string(),
                &transaction.status.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn parse_date(date_str: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(date_str)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use chrono::Duration;

    fn open_transaction(id: &str, borrow_date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: id.to_string(),
            member_id: "U1".to_string(),
            book_id: "B1".to_string(),
            borrow_date,
            due_date: borrow_date + Duration::days(14),
            return_date: None,
            fine: 0,
            status: TransactionStatus::Borrowed,
        }
    }

    #[test]
    fn test_read_empty_when_file_absent() {
        let env = TestEnvironment::new().unwrap();
        let repo = TransactionRepository::new(env.connection.clone());
        assert!(repo.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        let borrow_date = DateTime::parse_from_rfc3339("2026-03-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let mut returned = open_transaction("aaaa1111", borrow_date);
        returned.mark_returned(borrow_date + Duration::days(20), 30);

        let ledger = vec![returned, open_transaction("bbbb2222", borrow_date)];
        repo.write_all(&ledger).unwrap();

        let read_back = repo.read_all().unwrap();
        assert_eq!(read_back, ledger);
        assert_eq!(read_back[0].status, TransactionStatus::Returned);
        assert_eq!(read_back[0].fine, 30);
        assert_eq!(read_back[1].return_date, None);
    }

    #[test]
    fn test_dates_survive_to_second_precision() {
        let env = TestEnvironment::new().unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        // Utc::now() carries sub-second precision; RFC 3339 keeps it.
        let tx = open_transaction("cccc3333", Utc::now());
        repo.write_all(std::slice::from_ref(&tx)).unwrap();

        let read_back = repo.read_all().unwrap();
        assert_eq!(read_back[0].borrow_date, tx.borrow_date);
        assert_eq!(read_back[0].due_date, tx.due_date);
    }

    #[test]
    fn test_garbled_status_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        let path = env.connection.transactions_file_path();
        std::fs::write(
            &path,
            format!(
                "{}\naaaa1111,U1,B1,2026-03-01T09:30:00+00:00,2026-03-15T09:30:00+00:00,,0,Lost\n",
                super::HEADER
            ),
        )
        .unwrap();

        assert!(repo.read_all().is_err());
    }
}
