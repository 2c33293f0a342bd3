//! Table view model.

use serde::Serialize;

use super::Button;
use crate::application::ApplicationStatus;

/// Typed column identity, so role rules can be checked without reading labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Id,
    InsuranceType,
    Client,
    Manager,
    Date,
    Status,
    Price,
    FullName,
    Username,
    Email,
    Role,
    Phone,
    Registered,
    Actions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub key: ColumnKey,
    pub label: String,
}

impl Column {
    pub fn new(key: ColumnKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Status { status: ApplicationStatus },
    Actions { buttons: Vec<Button> },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Buttons of the row's actions cell; empty when there is none.
    pub fn actions(&self) -> impl Iterator<Item = &Button> {
        self.cells.iter().flat_map(|c| match c {
            Cell::Actions { buttons } => buttons.as_slice(),
            _ => &[][..],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub caption: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn has_column(&self, key: ColumnKey) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    pub fn column_keys(&self) -> Vec<ColumnKey> {
        self.columns.iter().map(|c| c.key).collect()
    }

    /// The cell of `row` under column `key`.
    pub fn cell(&self, row: usize, key: ColumnKey) -> Option<&Cell> {
        let index = self.columns.iter().position(|c| c.key == key)?;
        self.rows.get(row)?.cells.get(index)
    }

    /// Text of a text cell, for assertions and plain renderers.
    pub fn cell_text(&self, row: usize, key: ColumnKey) -> Option<&str> {
        match self.cell(row, key)? {
            Cell::Text { text } => Some(text),
            _ => None,
        }
    }
}
