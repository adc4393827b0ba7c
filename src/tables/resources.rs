// src/tables/resources.rs
use bevy::prelude::*;
use std::sync::Arc;

use super::definitions::{CreateTableForm, TableCollection, TableId, UpdateCellPayload};
use super::error::{TableError, TableResult};
use super::utils::create_table;

/// Result of a successful cell update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellUpdateOutcome {
    Changed {
        old_value: Option<String>,
        /// The field is not one of the table's header columns; the row now
        /// carries a key the header does not describe.
        outside_header: bool,
    },
    Unchanged,
}

/// Owns every table in the editor.
///
/// Readers get an `Arc` snapshot. Mutations copy-on-write only the path they
/// touch (collection, table, row), so a snapshot taken before a mutation is
/// never altered and untouched tables stay shared between snapshots.
#[derive(Resource, Default, Debug)]
pub struct TableStore {
    snapshot: Arc<TableCollection>,
    revision: u64,
}

impl TableStore {
    pub fn tables(&self) -> &TableCollection {
        &self.snapshot
    }

    pub fn snapshot(&self) -> Arc<TableCollection> {
        Arc::clone(&self.snapshot)
    }

    /// Bumped on every mutation that changed the collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a freshly created table and returns its id.
    pub fn add(&mut self, form: &CreateTableForm) -> TableId {
        let table = create_table(form);
        let table_id = table.id.clone();
        Arc::make_mut(&mut self.snapshot)
            .tables
            .push(Arc::new(table));
        self.revision += 1;
        trace!("Added table {} (revision {}).", table_id, self.revision);
        table_id
    }

    pub fn update_cell(&mut self, payload: &UpdateCellPayload) -> TableResult<CellUpdateOutcome> {
        let table_idx =
            self.snapshot
                .position(&payload.table_id)
                .ok_or_else(|| TableError::TableNotFound {
                    table_id: payload.table_id.clone(),
                })?;
        let table = &self.snapshot.tables[table_idx];
        let row_idx = table
            .row_position(&payload.row_id)
            .ok_or_else(|| TableError::RowNotFound {
                table_id: payload.table_id.clone(),
                row_id: payload.row_id.clone(),
            })?;

        if table.data[row_idx].get(&payload.field) == Some(payload.value.as_str()) {
            trace!(
                "Cell value unchanged for table {} row {} field '{}'. Skipping update.",
                payload.table_id,
                payload.row_id,
                payload.field
            );
            return Ok(CellUpdateOutcome::Unchanged);
        }

        let outside_header = !table.has_column(&payload.field);
        if outside_header {
            // Written anyway: the row gains a key the header does not list.
            warn!(
                "Field '{}' is not a header column of table {}; row {} no longer matches the header.",
                payload.field, payload.table_id, payload.row_id
            );
        }

        let collection = Arc::make_mut(&mut self.snapshot);
        let table = Arc::make_mut(&mut collection.tables[table_idx]);
        let row = Arc::make_mut(&mut table.data[row_idx]);
        let old_value = row
            .cells
            .insert(payload.field.clone(), payload.value.clone());
        self.revision += 1;

        trace!(
            "Updated table {} row {} field '{}' from {:?} to '{}'.",
            payload.table_id,
            payload.row_id,
            payload.field,
            old_value,
            payload.value
        );

        Ok(CellUpdateOutcome::Changed {
            old_value,
            outside_header,
        })
    }

    /// Inserts a copy of the table right after the original and returns the
    /// copy's id.
    pub fn duplicate(&mut self, table_id: &TableId) -> TableResult<TableId> {
        let original_idx =
            self.snapshot
                .position(table_id)
                .ok_or_else(|| TableError::TableNotFound {
                    table_id: table_id.clone(),
                })?;
        let copy = self.snapshot.tables[original_idx].duplicate();
        let copy_id = copy.id.clone();

        Arc::make_mut(&mut self.snapshot)
            .tables
            .insert(original_idx + 1, Arc::new(copy));
        self.revision += 1;
        trace!(
            "Duplicated table {} as {} at position {}.",
            table_id,
            copy_id,
            original_idx + 1
        );
        Ok(copy_id)
    }
}
