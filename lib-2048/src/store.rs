use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed best score record: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable home of the best score across sessions.
pub trait ScoreStore {
    /// `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<u32>, StoreError>;

    fn save(&mut self, best_score: u32) -> Result<(), StoreError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    best_score: Option<u32>,
}

impl MemoryStore {
    pub const fn new(best_score: Option<u32>) -> Self {
        Self { best_score }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<(), StoreError> {
        self.best_score = Some(best_score);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct Record {
    #[serde(rename = "bestScore")]
    best_score: u32,
}

/// Keeps the best score as a small JSON document, `{"bestScore": 1234}`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let record: Record = serde_json::from_slice(&bytes)?;

        Ok(Some(record.best_score))
    }

    fn save(&mut self, best_score: u32) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&Record { best_score })?;
        fs::write(&self.path, bytes)?;

        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, best_score: u32) -> Result<(), StoreError> {
        (**self).save(best_score)
    }
}
