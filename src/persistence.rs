//! High-score storage.  The simulation only ever sees a `u32`; where it is
//! kept is up to the driver.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::Result;

pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

// ── File store ────────────────────────────────────────────────────────────────

/// Plain-text file holding a single decimal number.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// `$HOME/.space_invaders_score`, or the working directory without `HOME`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".space_invaders_score")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(text.trim().parse()?)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Store backed by a shared cell; clones observe each other's saves.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    score: Rc<Cell<Option<u32>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        MemoryStore {
            score: Rc::new(Cell::new(Some(score))),
        }
    }

    /// Last saved value, if any.
    pub fn saved(&self) -> Option<u32> {
        self.score.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.score.get().unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score.set(Some(score));
        Ok(())
    }
}
