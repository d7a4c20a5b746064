pub mod header;
pub mod modals;
pub mod tables;
pub mod transaction_log;
