//! Core crate for the library tracker: domain models, the circulation
//! rules engine, and CSV-backed persistence.

pub mod domain;
pub mod storage;
