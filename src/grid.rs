use crate::column::{Cell, ColumnKind, Columns};
use crate::sort::{Direction, SortState, sort_rows};

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub title: String,
    pub sortable: bool,
    /// Direction glyph, present only for the active column.
    pub indicator: Option<Direction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub text: String,
    /// The first cell of every row is a row header, the rest are data cells.
    pub row_header: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Original matrix index, stable across re-sorts.
    pub key: usize,
    /// Alternating banding, keyed by the sorted position.
    pub banded: bool,
    pub cells: Vec<BodyCell>,
}

/// Display grid handed to the UI layer: header row plus body rows in the
/// current sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayGrid {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<BodyRow>,
}

/// Projects the row matrix through the current sort state. Pure; the
/// caller re-invokes it on every state or input change.
pub fn project(columns: &Columns, rows: &[Vec<Cell>], state: &SortState) -> DisplayGrid {
    let header = columns
        .iter()
        .enumerate()
        .map(|(idx, spec)| HeaderCell {
            title: match spec.kind {
                ColumnKind::Blank => String::new(),
                ColumnKind::Normal => spec.title.clone(),
            },
            sortable: spec.sortable,
            indicator: (state.active() == Some(idx)).then(|| state.direction()),
        })
        .collect();

    let order = sort_rows(columns, rows, state);
    let body = order
        .into_iter()
        .enumerate()
        .map(|(pos, ridx)| BodyRow {
            key: ridx,
            banded: pos % 2 == 1,
            cells: rows[ridx]
                .iter()
                .enumerate()
                .map(|(cidx, cell)| BodyCell {
                    text: cell.display(),
                    row_header: cidx == 0,
                })
                .collect(),
        })
        .collect();

    DisplayGrid {
        header,
        rows: body,
    }
}
