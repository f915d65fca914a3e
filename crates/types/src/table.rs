//! Columnar table of chronologically ordered rows.

use std::ops::Range;

use crate::error::CoreError;
use crate::row::DailyRow;

/// One named column of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values (prices, volume)
    Float(Vec<f64>),
    /// Text values (dates, labels)
    Text(Vec<String>),
}

impl Column {
    /// Number of values in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Column::Float(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    /// Returns true when the column holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric values, `None` for text columns.
    #[must_use]
    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            Column::Float(values) => Some(values),
            Column::Text(_) => None,
        }
    }

    /// Returns the text values, `None` for numeric columns.
    #[must_use]
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Column::Text(values) => Some(values),
            Column::Float(_) => None,
        }
    }

    fn slice(&self, range: Range<usize>) -> Column {
        match self {
            Column::Float(values) => Column::Float(values[range].to_vec()),
            Column::Text(values) => Column::Text(values[range].to_vec()),
        }
    }
}

/// Ordered table of rows stored column by column.
///
/// Row order is insertion order, oldest first. All columns have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    /// Creates an empty table without columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column.
    ///
    /// # Errors
    /// Returns [`CoreError::Table`] when the name is already taken or the
    /// column length differs from the existing columns.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(CoreError::Table(format!("duplicate column '{name}'")));
        }
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(CoreError::Table(format!(
                "column '{name}' has {} values, table has {} rows",
                column.len(),
                self.len()
            )));
        }
        self.columns.push((name, column));
        Ok(self)
    }

    /// Builds a table with `date`, `open`, `high`, `low`, `close` and `volume` columns.
    #[must_use]
    pub fn from_rows(rows: &[DailyRow]) -> Self {
        let columns = vec![
            (
                "date".to_string(),
                Column::Text(rows.iter().map(|r| r.date.clone()).collect()),
            ),
            (
                "open".to_string(),
                Column::Float(rows.iter().map(|r| r.open).collect()),
            ),
            (
                "high".to_string(),
                Column::Float(rows.iter().map(|r| r.high).collect()),
            ),
            (
                "low".to_string(),
                Column::Float(rows.iter().map(|r| r.low).collect()),
            ),
            (
                "close".to_string(),
                Column::Float(rows.iter().map(|r| r.close).collect()),
            ),
            (
                "volume".to_string(),
                Column::Float(rows.iter().map(|r| r.volume).collect()),
            ),
        ];
        Self { columns }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    /// Returns true when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
    }

    /// Looks up a numeric column by name.
    #[must_use]
    pub fn float_column(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(Column::as_float)
    }

    /// Looks up a text column by name.
    #[must_use]
    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        self.column(name).and_then(Column::as_text)
    }

    /// Returns the rows in `range` as a new table.
    ///
    /// The range is clamped to the table length.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Table {
        let len = self.len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        Table {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.slice(start..end)))
                .collect(),
        }
    }

    /// Returns the last `n` rows (all rows when `n >= len`).
    #[must_use]
    pub fn tail(&self, n: usize) -> Table {
        let len = self.len();
        self.slice(len.saturating_sub(n)..len)
    }
}
