//! Named collection of tables handed to indicators each cycle.

use std::collections::BTreeMap;

use crate::row::DailyRow;
use crate::table::Table;

/// Mapping from dataset name (e.g. `daily`, `minute`) to its table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: BTreeMap<String, Table>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a named table.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Option<Table> {
        self.tables.insert(name.into(), table)
    }

    /// Builder form of [`Dataset::insert`].
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }

    /// Convenience: inserts a table built from daily rows.
    #[must_use]
    pub fn with_rows(self, name: impl Into<String>, rows: &[DailyRow]) -> Self {
        self.with_table(name, Table::from_rows(rows))
    }

    /// Looks up a table by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Names of all tables (sorted).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}
