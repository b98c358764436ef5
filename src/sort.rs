use std::cmp::Ordering;

use tracing::trace;

use crate::column::{Cell, Columns, SortKey};
use crate::hops::numeric_hops;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Which column the table is ordered by, if any, and in which direction.
/// Mutated only through [`SortState::toggled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    active: Option<usize>,
    direction: Direction,
}

impl SortState {
    pub fn unsorted() -> Self {
        SortState {
            active: None,
            direction: Direction::Ascending,
        }
    }

    /// Default state: descending on the first sortable recency column
    /// ("Last Heard" in a node table), unsorted when there is none.
    pub fn initial(columns: &Columns) -> Self {
        let recency = columns
            .iter()
            .position(|spec| spec.sortable && spec.sort_key == SortKey::Recency);
        match recency {
            Some(idx) => SortState {
                active: Some(idx),
                direction: Direction::Descending,
            },
            None => SortState::unsorted(),
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Transition for an "activate column" event. Toggling the active
    /// column flips the direction, a new column starts ascending, and a
    /// non-sortable or unknown column leaves the state untouched.
    pub fn toggled(self, idx: usize, columns: &Columns) -> SortState {
        let sortable = columns.get(idx).map(|spec| spec.sortable).unwrap_or(false);
        if !sortable {
            trace!("Ignoring sort toggle for column {idx}");
            return self;
        }
        match self.active {
            Some(active) if active == idx => SortState {
                active: Some(idx),
                direction: self.direction.flipped(),
            },
            _ => SortState {
                active: Some(idx),
                direction: Direction::Ascending,
            },
        }
    }
}

fn compare_cells(a: &Cell, b: &Cell, key: SortKey) -> Ordering {
    match key {
        SortKey::Recency => a.timestamp().cmp(&b.timestamp()),
        SortKey::Connectivity => {
            numeric_hops(a.first_fragment()).cmp(&numeric_hops(b.first_fragment()))
        }
        SortKey::Generic => {
            let (a, b) = (a.display(), b.display());
            // Give order preference to values that convert to floats,
            // falling back to string comparison (same tiering as sorting
            // a numeric column with partially convertible values).
            match (a.parse::<f64>(), b.parse::<f64>()) {
                (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(&b),
            }
        }
    }
}

/// Produces a stable row ordering for the current sort state. The input
/// matrix is never reordered; callers index it through the returned
/// mapping, so the original order stays recoverable.
pub fn sort_rows(columns: &Columns, rows: &[Vec<Cell>], state: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some(active) = state.active else {
        return order;
    };
    let Some(spec) = columns.get(active) else {
        return order;
    };
    let key = spec.sort_key;

    order.sort_by(|&a, &b| {
        state
            .direction
            .apply(compare_cells(&rows[a][active], &rows[b][active], key))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnSpec;

    fn connection_table() -> (Columns, Vec<Vec<Cell>>) {
        let columns = Columns::new(vec![
            ColumnSpec::new("Name", true),
            ColumnSpec::new("Connection", true).with_sort_key(SortKey::Connectivity),
        ])
        .unwrap();
        let rows = vec![
            vec![Cell::text("A"), Cell::text("Direct")],
            vec![Cell::text("B"), Cell::text("5 hops away")],
            vec![Cell::text("C"), Cell::text("2 hops away")],
        ];
        (columns, rows)
    }

    #[test]
    fn toggle_new_column_starts_ascending() {
        let (columns, _) = connection_table();
        let state = SortState::unsorted().toggled(1, &columns);
        assert_eq!(state.active(), Some(1));
        assert_eq!(state.direction(), Direction::Ascending);
    }

    #[test]
    fn toggle_same_column_flips_direction() {
        let (columns, _) = connection_table();
        let state = SortState::unsorted().toggled(1, &columns);
        let flipped = state.toggled(1, &columns);
        assert_eq!(flipped.direction(), Direction::Descending);
        assert_eq!(flipped.toggled(1, &columns).direction(), Direction::Ascending);
    }

    #[test]
    fn toggle_other_column_resets_to_ascending() {
        let (columns, _) = connection_table();
        let state = SortState::unsorted().toggled(1, &columns).toggled(1, &columns);
        assert_eq!(state.direction(), Direction::Descending);
        let moved = state.toggled(0, &columns);
        assert_eq!(moved.active(), Some(0));
        assert_eq!(moved.direction(), Direction::Ascending);
    }

    #[test]
    fn toggle_non_sortable_column_is_a_noop() {
        let columns = Columns::new(vec![
            ColumnSpec::new("Name", true),
            ColumnSpec::blank("Actions"),
        ])
        .unwrap();
        let state = SortState::unsorted().toggled(0, &columns);
        assert_eq!(state.toggled(1, &columns), state);
        assert_eq!(state.toggled(7, &columns), state);
    }

    #[test]
    fn initial_state_prefers_recency_column() {
        let columns = Columns::new(vec![
            ColumnSpec::new("Name", true),
            ColumnSpec::new("Last Heard", true).with_sort_key(SortKey::Recency),
        ])
        .unwrap();
        let state = SortState::initial(&columns);
        assert_eq!(state.active(), Some(1));
        assert_eq!(state.direction(), Direction::Descending);

        let plain = Columns::new(vec![ColumnSpec::new("Name", true)]).unwrap();
        assert_eq!(SortState::initial(&plain), SortState::unsorted());
    }

    #[test]
    fn connection_scenario() {
        let (columns, rows) = connection_table();

        let asc = SortState::unsorted().toggled(1, &columns);
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![0, 2, 1]);

        let desc = asc.toggled(1, &columns);
        assert_eq!(sort_rows(&columns, &rows, &desc), vec![1, 2, 0]);
    }

    #[test]
    fn recency_ordering() {
        let columns = Columns::new(vec![
            ColumnSpec::new("Last Heard", true).with_sort_key(SortKey::Recency),
        ])
        .unwrap();
        let rows = vec![
            vec![Cell::text("5m ago").with_timestamp(5)],
            vec![Cell::text("1m ago").with_timestamp(1)],
            vec![Cell::text("3m ago").with_timestamp(3)],
        ];

        let asc = SortState::unsorted().toggled(0, &columns);
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![1, 2, 0]);
        let desc = asc.toggled(0, &columns);
        assert_eq!(sort_rows(&columns, &rows, &desc), vec![0, 2, 1]);
    }

    #[test]
    fn missing_timestamps_default_to_zero() {
        let columns = Columns::new(vec![
            ColumnSpec::new("Last Heard", true).with_sort_key(SortKey::Recency),
        ])
        .unwrap();
        let rows = vec![
            vec![Cell::text("recently").with_timestamp(10)],
            vec![Cell::text("never")],
        ];
        let asc = SortState::unsorted().toggled(0, &columns);
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![1, 0]);
    }

    #[test]
    fn unparseable_hops_sort_worst() {
        let (columns, mut rows) = connection_table();
        rows.push(vec![Cell::text("D"), Cell::text("???")]);

        let asc = SortState::unsorted().toggled(1, &columns);
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![0, 2, 1, 3]);
        let desc = asc.toggled(1, &columns);
        assert_eq!(sort_rows(&columns, &rows, &desc), vec![3, 1, 2, 0]);
    }

    #[test]
    fn equal_ranks_keep_input_order() {
        let (columns, _) = connection_table();
        let rows = vec![
            vec![Cell::text("A"), Cell::text("2 hops away")],
            vec![Cell::text("B"), Cell::text("Direct")],
            vec![Cell::text("C"), Cell::text("2 hops away")],
            vec![Cell::text("D"), Cell::text("2 hops away")],
        ];
        let asc = SortState::unsorted().toggled(1, &columns);
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![1, 0, 2, 3]);
    }

    #[test]
    fn generic_columns_prefer_numeric_comparison() {
        let columns = Columns::new(vec![ColumnSpec::new("SNR", true)]).unwrap();
        let rows = vec![
            vec![Cell::text("10.5")],
            vec![Cell::text("n/a")],
            vec![Cell::text("2")],
        ];
        let asc = SortState::unsorted().toggled(0, &columns);
        // Numbers order numerically ("2" before "10.5") and come before text.
        assert_eq!(sort_rows(&columns, &rows, &asc), vec![2, 0, 1]);
    }

    #[test]
    fn unsorted_state_preserves_input_order() {
        let (columns, rows) = connection_table();
        assert_eq!(
            sort_rows(&columns, &rows, &SortState::unsorted()),
            vec![0, 1, 2]
        );
    }
}
