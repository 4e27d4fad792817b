//! Unit/field adapter: raw forcing rows into kernel [`ForcingRecord`]s.
//!
//! Two steps, always in this order:
//!
//! 1. **Rename.** Each recognized raw column is copied under its kernel
//!    field. Unrecognized columns are skipped and logged at `debug`.
//! 2. **Convert.** Each kernel field's unit transform is applied. Only
//!    `T_a`, `T_g`, and `T_pp` change (Celsius → absolute).
//!
//! Converting after renaming keys the offset on the kernel field, never
//! on a raw name.

use pointsnow_core::{ForcingField, ForcingRecord};
use tracing::debug;

use crate::table::ForcingTable;

/// Adapt one raw row given as `(column name, value)` pairs.
///
/// Fields absent from the row stay at zero before conversion. Required
/// fields are validated against the whole table by the driver, not here.
pub fn adapt_row<'a>(row: impl IntoIterator<Item = (&'a str, f64)>) -> ForcingRecord {
    let mut record = ForcingRecord::default();
    for (name, value) in row {
        match ForcingField::from_source_name(name) {
            Some(field) => *record.get_mut(field) = value,
            None => debug!(column = name, "not a known forcing input; ignored"),
        }
    }
    convert_units(&mut record);
    record
}

fn convert_units(record: &mut ForcingRecord) {
    for field in ForcingField::ALL {
        let value = record.get_mut(field);
        *value = field.transform().apply(*value);
    }
}

/// Column-to-field bindings resolved once per table.
///
/// Resolving the mapping up front means unknown columns are logged once
/// per run instead of once per row, and each row adapts by position.
#[derive(Clone, Debug)]
pub struct ForcingAdapter {
    bindings: Vec<(usize, ForcingField)>,
    ignored: Vec<String>,
}

impl ForcingAdapter {
    /// Resolve the bindings for `table`'s columns.
    pub fn new(table: &ForcingTable) -> Self {
        let mut bindings = Vec::new();
        let mut ignored = Vec::new();
        for (col, name) in table.column_names().enumerate() {
            match ForcingField::from_source_name(name) {
                Some(field) => bindings.push((col, field)),
                None => {
                    debug!(column = name, "not a known forcing input; ignored");
                    ignored.push(name.to_string());
                }
            }
        }
        Self { bindings, ignored }
    }

    /// Raw columns with no kernel counterpart.
    pub fn ignored_columns(&self) -> &[String] {
        &self.ignored
    }

    /// Kernel fields the table supplies.
    pub fn bound_fields(&self) -> impl Iterator<Item = ForcingField> + '_ {
        self.bindings.iter().map(|&(_, f)| f)
    }

    /// Adapt the row at position `index` of `table`.
    ///
    /// `table` must be the table this adapter was built from.
    pub fn adapt(&self, table: &ForcingTable, index: usize) -> ForcingRecord {
        let mut record = ForcingRecord::default();
        for &(col, field) in &self.bindings {
            if let Some((_, values)) = table.column_at(col) {
                *record.get_mut(field) = values[index];
            }
        }
        convert_units(&mut record);
        record
    }
}
