// src/tables/events.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::{Event, EventWriter};

use super::definitions::{CreateTableForm, TableId, UpdateCellPayload};

/// The three request writers the UI dispatches through.
#[derive(SystemParam)]
pub struct TableRequestWriters<'w> {
    pub add_table: EventWriter<'w, RequestAddTable>,
    pub update_cell: EventWriter<'w, UpdateCellEvent>,
    pub duplicate: EventWriter<'w, RequestDuplicateTable>,
}

/// Sent when the create-table form is submitted.
/// Handled by `tables::systems::create_table`.
#[derive(Event, Debug, Clone)]
pub struct RequestAddTable {
    pub form: CreateTableForm,
}

/// Sent on every edit of a cell in the table grid.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub payload: UpdateCellPayload,
}

/// Sent when the user clicks "Copy" on a table.
#[derive(Event, Debug, Clone)]
pub struct RequestDuplicateTable {
    pub table_id: TableId,
}

/// Outcome message for the UI status line.
#[derive(Event, Debug, Clone)]
pub struct TableOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Published after the store produced a new snapshot.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablesModifiedEvent {
    pub revision: u64,
}
