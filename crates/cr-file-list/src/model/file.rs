//! File metadata for the entries of a change.
//!
//! Mirrors the review backend's file entity: a status letter plus optional
//! line and size deltas, keyed by path in a caller-owned map. The types
//! are intentionally separate from any rendering concern so the model
//! stays pure and reusable.

use std::collections::{HashMap, HashSet};

use log::debug;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::should_hide_file;

/// The files of a change, keyed by path.
pub type ChangeFiles = HashMap<String, FileInfo>;

/// Change status of a single file, serialized as the wire's single letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    #[serde(rename = "A")]
    Added,
    /// The wire omits the status for plain modifications, hence the serde
    /// default.
    #[default]
    #[serde(rename = "M")]
    Modified,
    #[serde(rename = "D")]
    Deleted,
    #[serde(rename = "R")]
    Renamed,
    #[serde(rename = "C")]
    Copied,
    /// Rewritten in place (content replaced wholesale).
    #[serde(rename = "W")]
    Rewritten,
    /// No content change; used for backfilled comment placeholders.
    #[serde(rename = "U")]
    Unmodified,
}

/// A status letter from the wire that is not one of the known codes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown file status letter: {0:?}")]
pub struct UnknownStatus(pub char);

impl FileStatus {
    /// Get the single-letter representation used on the wire and in rows.
    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
            FileStatus::Renamed => 'R',
            FileStatus::Copied => 'C',
            FileStatus::Rewritten => 'W',
            FileStatus::Unmodified => 'U',
        }
    }

    /// Parse a wire status letter.
    pub fn from_char(c: char) -> Result<Self, UnknownStatus> {
        match c {
            'A' => Ok(FileStatus::Added),
            'M' => Ok(FileStatus::Modified),
            'D' => Ok(FileStatus::Deleted),
            'R' => Ok(FileStatus::Renamed),
            'C' => Ok(FileStatus::Copied),
            'W' => Ok(FileStatus::Rewritten),
            'U' => Ok(FileStatus::Unmodified),
            other => Err(UnknownStatus(other)),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Added => "Added",
            FileStatus::Modified => "Modified",
            FileStatus::Deleted => "Deleted",
            FileStatus::Renamed => "Renamed",
            FileStatus::Copied => "Copied",
            FileStatus::Rewritten => "Rewritten",
            FileStatus::Unmodified => "Unmodified",
        }
    }

    /// Get the status color for list rows.
    pub fn color(&self) -> Color {
        match self {
            FileStatus::Added => Color::Green,
            FileStatus::Modified => Color::Yellow,
            FileStatus::Deleted => Color::Red,
            FileStatus::Renamed | FileStatus::Copied => Color::Cyan,
            FileStatus::Rewritten => Color::Magenta,
            FileStatus::Unmodified => Color::DarkGray,
        }
    }
}

/// A single file entry of a change, as served by the review backend.
///
/// Optional fields are absent on the wire where they do not apply, and on
/// backfilled placeholder entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    /// Change status; the wire omits it for plain modifications.
    pub status: FileStatus,
    /// Previous path for renamed and copied files.
    pub old_path: Option<String>,
    /// Whether the file is binary.
    pub binary: bool,
    /// Lines added by the change.
    pub lines_inserted: Option<u64>,
    /// Lines removed by the change.
    pub lines_deleted: Option<u64>,
    /// File size after the change, in bytes.
    pub size: Option<i64>,
    /// Size delta against the base, in bytes.
    pub size_delta: Option<i64>,
}

impl FileInfo {
    /// Placeholder entry for a commented but unchanged file. No line or
    /// size metadata is populated.
    pub fn unmodified() -> Self {
        Self {
            status: FileStatus::Unmodified,
            ..Self::default()
        }
    }

    /// `+ins/-del` summary when the backend supplied line counts.
    pub fn delta_summary(&self) -> Option<String> {
        match (self.lines_inserted, self.lines_deleted) {
            (None, None) => None,
            (ins, del) => Some(format!("+{}/-{}", ins.unwrap_or(0), del.unwrap_or(0))),
        }
    }
}

/// Extend `files` in place with placeholder entries for commented paths
/// that carry no content change, so their comment threads still get a row.
///
/// Paths already present keep their entry untouched, and hidden
/// pseudo-files are never inserted. Passing `None` leaves the map
/// unchanged.
pub fn add_unmodified_files(files: &mut ChangeFiles, commented_paths: Option<&HashSet<String>>) {
    let Some(commented_paths) = commented_paths else {
        return;
    };

    let mut inserted = 0usize;
    for path in commented_paths {
        if files.contains_key(path) || should_hide_file(path) {
            continue;
        }
        files.insert(path.clone(), FileInfo::unmodified());
        inserted += 1;
    }
    if inserted > 0 {
        debug!("backfilled {} commented files without content changes", inserted);
    }
}
