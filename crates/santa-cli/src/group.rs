//! Group and edit files.
//!
//! A group file holds the roster, the round status and the pairing history:
//!
//! ```toml
//! status = "open"
//!
//! [[participants]]
//! id = 1
//! name = "Ann"
//! has_message = true
//!
//! [[history]]
//! round_year = 2025
//! giver = 1
//! receiver = 2
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape; anything
//! else is TOML.

use std::path::Path;

use anyhow::{Context, Result};
use santa::{
    Assignment, HistoricalAssignment, History, Participant, ParticipantId, RoundStatus, Roster,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T> {
        match self {
            FileFormat::Toml => Ok(toml::from_str(contents)?),
            FileFormat::Json => Ok(serde_json::from_str(contents)?),
        }
    }
}

fn read<T>(path: &Path, parse: impl FnOnce(&str, FileFormat) -> Result<T>) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&contents, FileFormat::from_path(path))
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Everything the CLI knows about one gift-exchange group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupFile {
    #[serde(default)]
    pub status: RoundStatus,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub history: Vec<HistoricalAssignment>,
}

impl GroupFile {
    pub fn load(path: &Path) -> Result<Self> {
        read(path, Self::parse)
    }

    pub fn parse(contents: &str, format: FileFormat) -> Result<Self> {
        format.parse(contents)
    }

    pub fn roster(&self) -> Result<Roster> {
        Roster::new(self.participants.clone()).context("invalid participant list")
    }

    pub fn history(&self) -> History {
        History::from_rows(self.history.clone())
    }
}

/// One pair of a hand-edited assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PairEntry {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

/// A hand-edited assignment: `[[pairs]]` with `giver` and `receiver`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentFile {
    pub pairs: Vec<PairEntry>,
}

impl AssignmentFile {
    pub fn load(path: &Path) -> Result<Self> {
        read(path, Self::parse)
    }

    pub fn parse(contents: &str, format: FileFormat) -> Result<Self> {
        format.parse(contents)
    }

    /// Converts to an [`Assignment`]. A repeated giver is kept for the
    /// validator to report.
    pub fn to_assignment(&self) -> Assignment {
        self.pairs.iter().map(|p| (p.giver, p.receiver)).collect()
    }
}
