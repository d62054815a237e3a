//! # cr-file-list
//!
//! A standalone, reusable changed-file list crate for code review TUIs:
//! display ordering, sentinel-path handling, unmodified-file backfill, and
//! compact path labels, plus a ratatui widget that renders the result.
//!
//! ## Design Principles
//!
//! This crate is **instrumented** — it receives the file map a review
//! backend served and presents it without calling any API itself. This
//! enables:
//!
//! - Testability with plain in-memory maps, no client mocking
//! - Reusability across review platforms that serve the same file-map
//!   shape
//! - Clear separation between wire model and rendering
//!
//! A change's file map contains, besides real paths, synthetic
//! pseudo-files (the commit message, the merge list, the patchset-level
//! comment thread). [`PathKind`] classifies them once; ordering,
//! filtering, and labelling all match on the result instead of comparing
//! strings in place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cr_file_list::{ChangeFiles, FileListState, FileListWidget};
//!
//! // Deserialize the backend's path → FileInfo map.
//! let files: ChangeFiles = serde_json::from_str(body)?;
//!
//! // Assemble rows: backfill commented-but-unchanged paths, hide
//! // pseudo-entries, sort into display order.
//! let mut state = FileListState::from_files(files, Some(&commented_paths));
//!
//! // Render the widget.
//! let widget = FileListWidget::new(&state, true);
//! frame.render_widget(widget, area);
//!
//! // Navigate.
//! state.cursor_down();
//! let open_me = state.selected_path();
//! ```

pub mod model;
pub mod order;
pub mod state;
pub mod widget;

// Re-export commonly used types
pub use model::{
    add_unmodified_files, display_path, is_magic_path, should_hide_file, truncate_path,
    truncated_path, ChangeFiles, FileInfo, FileStatus, PathKind, UnknownStatus,
    COMMIT_MESSAGE_PATH, MERGE_LIST_PATH, PATCHSET_LEVEL_PATH,
};
pub use order::special_path_compare;
pub use state::{FileListRow, FileListState};
pub use widget::FileListWidget;
