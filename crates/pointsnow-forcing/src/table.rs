//! Timestamp-indexed raw forcing table.
//!
//! Columns keep their raw names and units (temperatures in Celsius);
//! translation into kernel names and units happens in the
//! [`adapter`](crate::adapter).

use std::collections::HashMap;

use indexmap::IndexMap;
use pointsnow_core::{ForcingField, RunError, Timestamp};

use crate::error::TableError;

/// Raw forcing series: one row per timestamp, one named column per
/// variable.
///
/// Column order is insertion order. Every column holds exactly one value
/// per timestamp.
#[derive(Clone, Debug, Default)]
pub struct ForcingTable {
    index: Vec<Timestamp>,
    positions: HashMap<Timestamp, usize>,
    columns: IndexMap<String, Vec<f64>>,
}

impl ForcingTable {
    /// Create a table with the given index and no columns.
    ///
    /// The index is kept in the order given; ordering and spacing are
    /// checked later by [`infer_interval`](crate::infer_interval).
    pub fn new(index: impl IntoIterator<Item = Timestamp>) -> Result<Self, TableError> {
        let index: Vec<Timestamp> = index.into_iter().collect();
        let mut positions = HashMap::with_capacity(index.len());
        for (i, &ts) in index.iter().enumerate() {
            if positions.insert(ts, i).is_some() {
                return Err(TableError::DuplicateTimestamp { timestamp: ts });
            }
        }
        Ok(Self {
            index,
            positions,
            columns: IndexMap::new(),
        })
    }

    /// Add a column.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.index.len(),
                found: values.len(),
            });
        }
        if self.columns.contains_key(&name) {
            return Err(TableError::DuplicateColumn { name });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Builder form of [`insert_column`](Self::insert_column).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, TableError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row timestamps, in table order.
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    /// Row position of `timestamp`.
    pub fn position(&self, timestamp: &Timestamp) -> Option<usize> {
        self.positions.get(timestamp).copied()
    }

    /// Column names, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// One column's values.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Column by position, with its name.
    pub(crate) fn column_at(&self, col: usize) -> Option<(&str, &[f64])> {
        self.columns
            .get_index(col)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row at position `index`.
    pub fn row(&self, index: usize) -> Option<ForcingRow<'_>> {
        (index < self.index.len()).then_some(ForcingRow { table: self, index })
    }

    /// Check that every field in `required` has a column.
    ///
    /// Reports the first missing field in `required` order.
    pub fn require(&self, required: &[ForcingField]) -> Result<(), RunError> {
        match required.iter().find(|f| !self.has_column(f.source_name())) {
            Some(&field) => Err(RunError::MissingField { field }),
            None => Ok(()),
        }
    }
}

/// Borrowed view of one table row.
#[derive(Clone, Copy, Debug)]
pub struct ForcingRow<'a> {
    table: &'a ForcingTable,
    index: usize,
}

impl<'a> ForcingRow<'a> {
    /// Row position in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Row timestamp.
    pub fn timestamp(&self) -> Timestamp {
        self.table.index[self.index]
    }

    /// Value of one column in this row.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.table.columns.get(name).map(|col| col[self.index])
    }

    /// `(column name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let index = self.index;
        self.table
            .columns
            .iter()
            .map(move |(name, col)| (name.as_str(), col[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn hours(n: i64) -> Vec<Timestamp> {
        let t0 = NaiveDate::from_ymd_opt(2023, 10, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n).map(|h| t0 + TimeDelta::hours(h)).collect()
    }

    #[test]
    fn rows_follow_column_order() {
        let table = ForcingTable::new(hours(2))
            .unwrap()
            .with_column("air_temp", vec![-3.0, -2.0])
            .unwrap()
            .with_column("rh", vec![0.5, 0.6])
            .unwrap();

        let row = table.row(1).unwrap();
        assert_eq!(row.timestamp(), hours(2)[1]);
        let pairs: Vec<_> = row.iter().collect();
        assert_eq!(pairs, vec![("air_temp", -2.0), ("rh", 0.6)]);
        assert_eq!(row.get("rh"), Some(0.6));
        assert_eq!(row.get("missing"), None);
        assert!(table.row(2).is_none());
    }

    #[test]
    fn position_uses_timestamp_lookup() {
        let idx = hours(3);
        let table = ForcingTable::new(idx.clone())
            .unwrap()
            .with_column("precip", vec![0.0, 1.0, 2.0])
            .unwrap();
        let row = table.row(table.position(&idx[2]).unwrap()).unwrap();
        assert_eq!(row.get("precip"), Some(2.0));
        assert_eq!(table.position(&idx[1]), Some(1));
        assert!(table.position(&(idx[2] + TimeDelta::hours(1))).is_none());
    }

    #[test]
    fn duplicate_timestamp_rejected() {
        let mut idx = hours(2);
        idx.push(idx[0]);
        match ForcingTable::new(idx) {
            Err(TableError::DuplicateTimestamp { .. }) => {}
            other => panic!("expected DuplicateTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn short_column_rejected() {
        let err = ForcingTable::new(hours(3))
            .unwrap()
            .with_column("precip", vec![0.0])
            .unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch {
                name: "precip".to_string(),
                expected: 3,
                found: 1,
            }
        );
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut table = ForcingTable::new(hours(1)).unwrap();
        table.insert_column("precip", vec![0.0]).unwrap();
        match table.insert_column("precip", vec![1.0]) {
            Err(TableError::DuplicateColumn { name }) => assert_eq!(name, "precip"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
        assert_eq!(table.column("precip"), Some(&[0.0][..]));
    }

    #[test]
    fn require_reports_first_missing_field() {
        let table = ForcingTable::new(hours(1))
            .unwrap()
            .with_column("air_temp", vec![0.0])
            .unwrap();
        assert!(table.require(&[ForcingField::AirTemp]).is_ok());
        assert_eq!(
            table.require(&[ForcingField::AirTemp, ForcingField::SoilTemp, ForcingField::Precip]),
            Err(RunError::MissingField {
                field: ForcingField::SoilTemp
            })
        );
    }
}
