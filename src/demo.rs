use crate::column::{Cell, ColumnSpec, Columns, SortKey};
use crate::domain::MeshtabError;

/// Builds a sample mesh node table. What a cell shows ("8 minutes ago")
/// is decoupled from what it sorts by (the timestamp hint).
pub fn node_table() -> Result<(Columns, Vec<Vec<Cell>>), MeshtabError> {
    let columns = Columns::new(vec![
        ColumnSpec::new("Name", true),
        ColumnSpec::new("Connection", true).with_sort_key(SortKey::Connectivity),
        ColumnSpec::new("Last Heard", true).with_sort_key(SortKey::Recency),
        ColumnSpec::new("SNR", true),
        ColumnSpec::blank("Actions"),
    ])?;

    let rows = vec![
        node_row("Base Camp", "Direct", "2 minutes ago", Some(1_724_140_680), "12.5"),
        node_row(
            "Ridge Repeater",
            "1 hop away",
            "8 minutes ago",
            Some(1_724_140_320),
            "6.0",
        ),
        node_row(
            "River Crossing",
            "3 hops away",
            "25 minutes ago",
            Some(1_724_139_300),
            "-2.25",
        ),
        node_row(
            "Summit Beacon",
            "5 hops away",
            "1 hour ago",
            Some(1_724_137_200),
            "-7.75",
        ),
        node_row("Trailhead", "2 hops away", "12 minutes ago", Some(1_724_140_080), "3.5"),
        node_row("Lost Node", "unknown", "never", None, "n/a"),
    ];

    Ok((columns, rows))
}

fn node_row(
    name: &str,
    connection: &str,
    heard: &str,
    heard_at: Option<i64>,
    snr: &str,
) -> Vec<Cell> {
    let mut heard_cell = Cell::text(heard);
    if let Some(timestamp) = heard_at {
        heard_cell = heard_cell.with_timestamp(timestamp);
    }
    vec![
        Cell::text(name),
        Cell::text(connection),
        heard_cell,
        Cell::text(snr),
        Cell::text("…"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;
    use crate::sort::Direction;

    #[test]
    fn demo_table_is_well_formed() {
        let (columns, rows) = node_table().unwrap();
        assert!(columns.check_rows(&rows).is_ok());
        assert_eq!(columns.index_of("Last Heard"), Some(2));
    }

    #[test]
    fn demo_table_starts_sorted_by_last_heard() {
        let (columns, rows) = node_table().unwrap();
        let model = Model::new(columns, rows).unwrap();
        assert_eq!(model.sort().active(), Some(2));
        assert_eq!(model.sort().direction(), Direction::Descending);

        // Most recently heard node first, never-heard node last.
        let grid = model.grid();
        assert_eq!(grid.rows[0].cells[0].text, "Base Camp");
        assert_eq!(grid.rows[5].cells[0].text, "Lost Node");
    }
}
