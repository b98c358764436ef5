use std::io::Error;

#[derive(Debug)]
pub enum MeshtabError {
    IoError(Error),
    /// Column titles must be unique within one table.
    DuplicateColumn(String),
    /// A row whose length does not match the column registry.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    LoggingFailed(String),
}

impl From<Error> for MeshtabError {
    fn from(err: Error) -> Self {
        MeshtabError::IoError(err)
    }
}

#[derive(Debug, Clone)]
pub struct TableConfig {
    pub event_poll_time: u64,
}

/// Keyboard driven interactions, produced by the controller and handled
/// by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ToggleSort,
    CopyCell,
    CopyRow,
}
