//! Local persistence of the fetched repository list.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};
use crate::github::Repository;

/// Default file name for the saved repository list.
pub const DEFAULT_STORE_FILE: &str = "links.json";

/// A JSON file holding an ordered list of repositories.
#[derive(Debug, Clone)]
pub struct RepoStore {
    path: PathBuf,
}

impl RepoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Overwrite the file with `repos` as a JSON array.
    pub fn save(&self, repos: &[Repository]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, repos)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        log::info!("saved {} repositories to {}", repos.len(), self.path.display());
        Ok(())
    }

    /// Read the list back. A missing file and unparsable content are distinct errors.
    pub fn load(&self) -> Result<Vec<Repository>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SweepError::StoreNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&data).map_err(|source| SweepError::StoreParse {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for RepoStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}
