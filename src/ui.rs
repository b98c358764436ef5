use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Cell as UiCell, Paragraph, Row, Table, Widget},
};

use crate::grid::{DisplayGrid, HeaderCell};
use crate::model::Model;
use crate::sort::Direction;

const COLUMN_WIDTH_MARGIN: u16 = 2;

#[derive(Debug, Default)]
pub struct TableUI;

impl TableUI {
    pub fn new() -> Self {
        TableUI
    }

    pub fn draw(&self, model: &Model, frame: &mut Frame) {
        let grid = model.grid();

        let title = Line::from(" meshtab ".bold());
        let instructions = Line::from(vec![
            " Move ".into(),
            "←↑↓→".blue().bold(),
            " Sort ".into(),
            "<Enter>".blue().bold(),
            " Copy ".into(),
            "<y>".blue().bold(),
            " Quit ".into(),
            "<q> ".blue().bold(),
        ]);
        let block = Block::bordered()
            .title(title.centered())
            .title_bottom(instructions.centered())
            .border_set(border::THICK);

        let [table_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let header = Row::new(
            grid.header
                .iter()
                .enumerate()
                .map(|(idx, cell)| Self::header_cell(cell, idx == model.cursor_column())),
        )
        .style(Style::new().add_modifier(Modifier::BOLD));

        let rows = grid.rows.iter().enumerate().map(|(pos, row)| {
            let style = if pos == model.cursor_row() {
                Style::new().add_modifier(Modifier::REVERSED)
            } else if row.banded {
                Style::new().bg(Color::DarkGray)
            } else {
                Style::new()
            };
            Row::new(row.cells.iter().map(|cell| {
                let ui_cell = UiCell::from(cell.text.clone());
                if cell.row_header {
                    ui_cell.style(Style::new().add_modifier(Modifier::BOLD))
                } else {
                    ui_cell
                }
            }))
            .style(style)
        });

        let table = Table::new(rows, Self::column_widths(&grid)).header(header).block(block);
        frame.render_widget(table, table_area);

        Paragraph::new(model.status_message()).render(status_area, frame.buffer_mut());
    }

    fn header_cell(cell: &HeaderCell, under_cursor: bool) -> UiCell<'static> {
        let glyph = match cell.indicator {
            Some(Direction::Ascending) => " ▲",
            Some(Direction::Descending) => " ▼",
            None => "",
        };
        let ui_cell = UiCell::from(format!("{}{glyph}", cell.title));
        if under_cursor {
            ui_cell.style(Style::new().blue().add_modifier(Modifier::UNDERLINED))
        } else {
            ui_cell
        }
    }

    fn column_widths(grid: &DisplayGrid) -> Vec<Constraint> {
        grid.header
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let content = grid
                    .rows
                    .iter()
                    .filter_map(|row| row.cells.get(idx))
                    .map(|cell| cell.text.chars().count())
                    .max()
                    .unwrap_or(0);
                // Leave room for the direction glyph next to the title.
                let width = std::cmp::max(header.title.chars().count() + 2, content) as u16;
                Constraint::Length(width + COLUMN_WIDTH_MARGIN)
            })
            .collect()
    }
}
