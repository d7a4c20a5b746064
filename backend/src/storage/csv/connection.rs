use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection carries the data directory and hands out file paths for
/// the three collection files. Paths are explicit configuration; nothing is
/// read from process-wide globals.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Library Tracker`.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Library Tracker");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn books_file_path(&self) -> PathBuf {
        self.base_directory.join("books.csv")
    }

    pub fn members_file_path(&self) -> PathBuf {
        self.base_directory.join("members.csv")
    }

    pub fn transactions_file_path(&self) -> PathBuf {
        self.base_directory.join("transactions.csv")
    }

    /// Ensure a collection file exists, writing a header-only file when it
    /// is absent.
    pub fn ensure_file_exists(&self, path: &Path, header: &str) -> Result<()> {
        if !path.exists() {
            fs::write(path, format!("{}\n", header))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("data");
        assert!(!dir.exists());

        let conn = CsvConnection::new(&dir).unwrap();
        assert!(dir.exists());
        assert_eq!(conn.base_directory(), dir.as_path());
    }

    #[test]
    fn test_file_paths() {
        let temp = tempdir().unwrap();
        let conn = CsvConnection::new(temp.path()).unwrap();
        assert_eq!(conn.books_file_path(), temp.path().join("books.csv"));
        assert_eq!(conn.members_file_path(), temp.path().join("members.csv"));
        assert_eq!(
            conn.transactions_file_path(),
            temp.path().join("transactions.csv")
        );
    }

    #[test]
    fn test_ensure_file_exists_writes_header_once() {
        let temp = tempdir().unwrap();
        let conn = CsvConnection::new(temp.path()).unwrap();
        let path = conn.books_file_path();

        conn.ensure_file_exists(&path, "id,title").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,title\n");

        // A second call must not clobber existing content.
        fs::write(&path, "id,title\nB1,Dune\n").unwrap();
        conn.ensure_file_exists(&path, "id,title").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,title\nB1,Dune\n");
    }
}
