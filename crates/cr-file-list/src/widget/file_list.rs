//! File list widget.

use std::borrow::Cow;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use crate::model::truncate_path;
use crate::state::{FileListRow, FileListState};

/// Widget rendering the changed-file list pane.
pub struct FileListWidget<'a> {
    /// Prepared rows and cursor.
    state: &'a FileListState,
    /// Whether this pane is focused.
    focused: bool,
}

impl<'a> FileListWidget<'a> {
    /// Create a new file list widget over prepared state.
    pub fn new(state: &'a FileListState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Widget for FileListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Files ");

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_height = inner.height as usize;
        let selected = self.state.cursor;

        // Scroll to keep the cursor visible.
        let scroll_offset = if selected >= visible_height {
            selected - visible_height + 1
        } else {
            0
        };

        for (i, row) in self
            .state
            .rows()
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .enumerate()
        {
            let y = inner.y + i as u16;
            let is_selected = i + scroll_offset == selected;
            render_row(row, inner.x, y, inner.width, is_selected, buf);
        }
    }
}

fn render_row(row: &FileListRow, x: u16, y: u16, width: u16, selected: bool, buf: &mut Buffer) {
    let base_style = if selected {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default()
    };

    // Fill the line with background
    if selected {
        for i in 0..width {
            buf.set_string(x + i, y, " ", base_style);
        }
    }

    let status_str = format!("{} ", row.info.status.as_char());
    let marker = if row.commented { "✎ " } else { "  " };
    let stats = row
        .info
        .delta_summary()
        .map(|s| format!(" {}", s))
        .unwrap_or_default();

    // Compact the label when the full path does not fit.
    let prefix_width = status_str.len() + marker.chars().count();
    let available = (width as usize).saturating_sub(prefix_width + stats.chars().count());
    let label: Cow<str> = if row.label.chars().count() > available {
        truncate_path(&row.label, 1)
    } else {
        Cow::Borrowed(row.label.as_str())
    };

    let mut current_x = x;

    let status_style = if selected {
        base_style
    } else {
        base_style.fg(row.info.status.color())
    };
    buf.set_string(current_x, y, &status_str, status_style);
    current_x += status_str.len() as u16;

    let marker_style = if selected {
        base_style
    } else {
        base_style.fg(Color::Blue)
    };
    buf.set_string(current_x, y, marker, marker_style);
    current_x += marker.chars().count() as u16;

    buf.set_string(current_x, y, label.as_ref(), base_style);
    current_x += label.chars().count() as u16;

    // Render stats at the end
    if !stats.is_empty() {
        let stats_width = stats.chars().count() as u16;
        if width > stats_width {
            let stats_x = x + width - stats_width;
            if stats_x >= current_x {
                let (add_style, del_style) = if selected {
                    (base_style, base_style)
                } else {
                    (base_style.fg(Color::Green), base_style.fg(Color::Red))
                };

                // " +ins/-del": additions ahead of the slash, deletions after.
                let parts: Vec<&str> = stats.split('/').collect();
                if parts.len() == 2 {
                    let add_width = parts[0].chars().count() as u16;
                    buf.set_string(stats_x, y, parts[0], add_style);
                    buf.set_string(stats_x + add_width, y, "/", base_style);
                    buf.set_string(stats_x + add_width + 1, y, parts[1], del_style);
                } else {
                    buf.set_string(stats_x, y, &stats, base_style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeFiles, FileInfo, FileStatus, COMMIT_MESSAGE_PATH};

    fn sample_state() -> FileListState {
        let mut files = ChangeFiles::new();
        files.insert(COMMIT_MESSAGE_PATH.to_string(), FileInfo::default());
        files.insert(
            "src/main.rs".to_string(),
            FileInfo {
                status: FileStatus::Added,
                lines_inserted: Some(10),
                lines_deleted: Some(2),
                ..FileInfo::default()
            },
        );
        FileListState::from_files(files, None)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol()))
            .collect()
    }

    #[test]
    fn test_file_list_widget_renders_rows() {
        let state = sample_state();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);

        FileListWidget::new(&state, true).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Commit message"));
        let second = row_text(&buf, 2);
        assert!(second.contains("src/main.rs"));
        assert!(second.contains("+10/-2"));
    }

    #[test]
    fn test_file_list_widget_compacts_long_paths() {
        let mut files = ChangeFiles::new();
        files.insert(
            "a/very/deeply/nested/directory/structure/file.rs".to_string(),
            FileInfo::default(),
        );
        let state = FileListState::from_files(files, None);

        let area = Rect::new(0, 0, 24, 4);
        let mut buf = Buffer::empty(area);
        FileListWidget::new(&state, false).render(area, &mut buf);

        let line = row_text(&buf, 1);
        assert!(line.contains("…/file.rs"));
        assert!(!line.contains("nested"));
    }
}
