//! File list state: row assembly and cursor navigation.

use std::collections::HashSet;

use log::debug;

use crate::model::{add_unmodified_files, display_path, should_hide_file, ChangeFiles, FileInfo};
use crate::order::special_path_compare;

/// A single renderable row of the file list.
#[derive(Debug, Clone)]
pub struct FileListRow {
    /// Raw path, the key into the change's file map.
    pub path: String,
    /// Human-readable label (pseudo-files get their friendly name).
    pub label: String,
    /// File metadata from the backend, or a backfilled placeholder.
    pub info: FileInfo,
    /// Whether the path has at least one comment thread.
    pub commented: bool,
}

/// State for the file list widget: display-ordered rows plus a cursor.
#[derive(Debug, Clone, Default)]
pub struct FileListState {
    rows: Vec<FileListRow>,
    /// Cursor position within the rows.
    pub cursor: usize,
}

impl FileListState {
    /// Build the display rows for a change.
    ///
    /// Consumes the backend's file map, backfills placeholder entries for
    /// commented-but-unchanged paths, drops hidden pseudo-files, and sorts
    /// the rest into display order.
    pub fn from_files(mut files: ChangeFiles, commented_paths: Option<&HashSet<String>>) -> Self {
        add_unmodified_files(&mut files, commented_paths);

        let mut rows: Vec<FileListRow> = files
            .into_iter()
            .filter(|(path, _)| !should_hide_file(path))
            .map(|(path, info)| {
                let label = display_path(&path).to_string();
                let commented = commented_paths.is_some_and(|c| c.contains(&path));
                FileListRow {
                    path,
                    label,
                    info,
                    commented,
                }
            })
            .collect();
        rows.sort_unstable_by(|a, b| special_path_compare(&a.path, &b.path));

        debug!("file list assembled with {} rows", rows.len());
        Self { rows, cursor: 0 }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[FileListRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row under the cursor.
    pub fn selected(&self) -> Option<&FileListRow> {
        self.rows.get(self.cursor)
    }

    /// Raw path under the cursor.
    pub fn selected_path(&self) -> Option<&str> {
        self.selected().map(|row| row.path.as_str())
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor to the first row.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the last row.
    pub fn cursor_last(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }
}
