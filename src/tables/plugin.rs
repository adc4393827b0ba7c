// src/tables/plugin.rs
use bevy::prelude::*;

use super::events::{
    RequestAddTable, RequestDuplicateTable, TableOperationFeedback, TablesModifiedEvent,
    UpdateCellEvent,
};
use super::resources::TableStore;
use super::systems;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableSystemSet {
    /// Request handlers mutating the `TableStore`.
    ApplyChanges,
}

/// Plugin owning the table store and its request handlers.
pub struct TablesPlugin;

impl Plugin for TablesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TableStore>();

        app.add_event::<RequestAddTable>()
            .add_event::<UpdateCellEvent>()
            .add_event::<RequestDuplicateTable>()
            .add_event::<TableOperationFeedback>()
            .add_event::<TablesModifiedEvent>();

        app.add_systems(
            Update,
            (
                systems::handle_add_table_request,
                systems::handle_cell_update,
                systems::handle_duplicate_table_request,
            )
                .chain()
                .in_set(TableSystemSet::ApplyChanges),
        );

        info!("TablesPlugin initialized.");
    }
}
