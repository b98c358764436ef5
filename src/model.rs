use arboard::Clipboard;
use tracing::{debug, trace};

use crate::column::{Cell, Columns};
use crate::domain::{Message, MeshtabError};
use crate::grid::{DisplayGrid, project};
use crate::sort::{Direction, SortState};

#[derive(Debug, PartialEq)]
pub enum Status {
    READY,
    QUITTING,
}

/// Application state: the immutable column registry and row matrix, plus
/// the sort state and cursor position. The matrix is never reordered in
/// place; every frame projects it through the current sort state.
pub struct Model {
    pub status: Status,
    columns: Columns,
    cells: Vec<Vec<Cell>>,
    sort: SortState,
    cursor_column: usize,
    cursor_row: usize,
    clipboard: Option<Clipboard>,
    status_message: String,
}

impl Model {
    pub fn new(columns: Columns, cells: Vec<Vec<Cell>>) -> Result<Self, MeshtabError> {
        columns.check_rows(&cells)?;
        let sort = SortState::initial(&columns);
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                debug!("No clipboard available: {e:?}");
                None
            }
        };
        Ok(Model {
            status: Status::READY,
            columns,
            cells,
            sort,
            cursor_column: 0,
            cursor_row: 0,
            clipboard,
            status_message: "Started meshtab!".to_string(),
        })
    }

    pub fn grid(&self) -> DisplayGrid {
        project(&self.columns, &self.cells, &self.sort)
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor_column
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn update(&mut self, message: Message) -> Result<(), MeshtabError> {
        trace!("Update: {message:?}");
        match message {
            Message::Quit => self.quit(),
            Message::MoveLeft => self.move_cursor_left(),
            Message::MoveRight => self.move_cursor_right(),
            Message::MoveUp => self.move_cursor_up(),
            Message::MoveDown => self.move_cursor_down(),
            Message::ToggleSort => self.toggle_sort(),
            Message::CopyCell => self.copy_cell(),
            Message::CopyRow => self.copy_row(),
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.status = Status::QUITTING;
    }

    fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    fn move_cursor_left(&mut self) {
        self.cursor_column = self.cursor_column.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_column + 1 < self.columns.len() {
            self.cursor_column += 1;
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        if self.cursor_row + 1 < self.cells.len() {
            self.cursor_row += 1;
        }
    }

    fn toggle_sort(&mut self) {
        let next = self.sort.toggled(self.cursor_column, &self.columns);
        if next == self.sort {
            // Non-sortable column under the cursor, nothing changes.
            return;
        }
        self.sort = next;
        if let Some(spec) = self.columns.get(self.cursor_column) {
            let direction = match next.direction() {
                Direction::Ascending => "ascending",
                Direction::Descending => "descending",
            };
            self.set_status_message(format!("Sorting by {} ({direction})", spec.title));
        }
    }

    fn copy_cell(&mut self) {
        let grid = self.grid();
        let Some(cell) = grid
            .rows
            .get(self.cursor_row)
            .and_then(|row| row.cells.get(self.cursor_column))
        else {
            return;
        };
        trace!("Cell content: {}", cell.text);
        self.copy_to_clipboard(cell.text.clone());
    }

    fn copy_row(&mut self) {
        let grid = self.grid();
        let Some(row) = grid.rows.get(self.cursor_row) else {
            return;
        };
        let content = row
            .cells
            .iter()
            .map(|cell| Model::wrap_cell_content(&cell.text))
            .collect::<Vec<String>>();
        self.copy_to_clipboard(content.join(","));
    }

    fn copy_to_clipboard(&mut self, content: String) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            self.set_status_message("No clipboard available!");
            return;
        };
        match clipboard.set_text(content) {
            Ok(_) => {
                trace!("Copied content to clipboard.");
                self.set_status_message("Copied to clipboard.");
            }
            Err(e) => trace!("Error copying to clipboard: {e:?}"),
        }
    }

    fn wrap_cell_content(c: &str) -> String {
        let needs_escaping = c.chars().any(|c| c == '"');
        let needs_wrapping = c.chars().any(|c| c == ' ' || c == '\t' || c == ',');
        let mut out = String::from(c);

        if needs_escaping {
            out = out.replace("\"", "\"\"");
        }
        if needs_wrapping {
            out = format!("\"{out}\"");
        }
        out
    }
}
