use crate::domain::MeshtabError;

/// Presentation tag for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Header renders without a title (e.g. an action column).
    Blank,
    Normal,
}

/// Comparator used for a column, fixed when the registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Order by the cells timestamp hint.
    Recency,
    /// Order by hop distance parsed from the cells first text fragment.
    Connectivity,
    /// Order by the cells display text, numerically where both sides parse.
    #[default]
    Generic,
}

#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub title: String,
    pub kind: ColumnKind,
    pub sort_key: SortKey,
    pub sortable: bool,
}

impl ColumnSpec {
    pub fn new(title: impl Into<String>, sortable: bool) -> Self {
        ColumnSpec {
            title: title.into(),
            kind: ColumnKind::Normal,
            sort_key: SortKey::Generic,
            sortable,
        }
    }

    pub fn blank(title: impl Into<String>) -> Self {
        ColumnSpec {
            title: title.into(),
            kind: ColumnKind::Blank,
            sort_key: SortKey::Generic,
            sortable: false,
        }
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

/// Ordered column registry. Titles are unique within one table instance,
/// immutable for the tables lifetime.
#[derive(Debug, Clone)]
pub struct Columns {
    specs: Vec<ColumnSpec>,
}

impl Columns {
    pub fn new(specs: Vec<ColumnSpec>) -> Result<Self, MeshtabError> {
        for (idx, spec) in specs.iter().enumerate() {
            if specs[..idx].iter().any(|other| other.title == spec.title) {
                return Err(MeshtabError::DuplicateColumn(spec.title.clone()));
            }
        }
        Ok(Columns { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&ColumnSpec> {
        self.specs.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter()
    }

    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.title == title)
    }

    /// Checks that every row has exactly one cell per column. Rejecting
    /// ragged input beats silently truncating it and sorting the rest.
    pub fn check_rows(&self, rows: &[Vec<Cell>]) -> Result<(), MeshtabError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != self.specs.len() {
                return Err(MeshtabError::RaggedRow {
                    row: idx,
                    expected: self.specs.len(),
                    got: row.len(),
                });
            }
        }
        Ok(())
    }
}

/// Opaque display payload of one table cell.
///
/// Fragments are what gets shown. The optional timestamp hint feeds the
/// recency comparator only and never influences rendering; likewise the
/// connectivity comparator reads the first fragment without interpreting
/// the rest of the cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    fragments: Vec<String>,
    timestamp: Option<i64>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            fragments: vec![text.into()],
            timestamp: None,
        }
    }

    pub fn fragments(fragments: Vec<String>) -> Self {
        Cell {
            fragments,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn first_fragment(&self) -> &str {
        self.fragments.first().map(String::as_str).unwrap_or("")
    }

    pub fn display(&self) -> String {
        self.fragments.join(" ")
    }

    /// Recency hint; an absent timestamp counts as epoch zero.
    pub fn timestamp(&self) -> i64 {
        self.timestamp.unwrap_or(0)
    }
}
