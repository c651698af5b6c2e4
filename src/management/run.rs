use std::{
    fmt,
    io::Error,
    path::{Path, PathBuf},
};

use crate::{config, types::RunRecord, warning};

#[derive(Debug)]
pub enum RunError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for RunError {
    fn from(err: Error) -> Self {
        RunError::IoError(err)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        RunError::SerdeError(err)
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::IoError(e) => write!(f, "{}", e),
            RunError::SerdeError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RunError {}

/// Stores one JSON file per launch under `<data dir>/runs`.
pub struct RunManager {
    dir: PathBuf,
}

impl Default for RunManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RunManager {
    pub fn new() -> Self {
        Self::with_dir(config::data_dir().join("runs"))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn persist(&self, record: &RunRecord) -> Result<PathBuf, RunError> {
        async_fs::create_dir_all(&self.dir).await?;

        let path = self.record_path(&record.id);
        let json = serde_json::to_string_pretty(record)?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }

    pub async fn load(&self, id: &str) -> Result<RunRecord, RunError> {
        let content = async_fs::read_to_string(self.record_path(id)).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All records, oldest first. A missing runs directory yields none.
    ///
    /// Files that cannot be read or parsed are reported and skipped, so one
    /// damaged record does not hide the others.
    pub async fn load_all(&self) -> Result<Vec<RunRecord>, RunError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RunError::IoError(e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match Self::read_record(&path).await {
                Ok(record) => records.push(record),
                Err(e) => warning!("Skipping run record {}: {}", path.display(), e),
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    /// The most recent record that created `engagement_id`.
    pub async fn find_by_engagement(
        &self,
        engagement_id: &str,
    ) -> Result<Option<RunRecord>, RunError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .rev()
            .find(|r| r.engagement_id.as_deref() == Some(engagement_id)))
    }

    async fn read_record(path: &Path) -> Result<RunRecord, RunError> {
        let content = async_fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}
