// src/tables/systems/duplicate_table.rs
use bevy::prelude::*;

use crate::tables::{
    events::{RequestDuplicateTable, TableOperationFeedback, TablesModifiedEvent},
    resources::TableStore,
};

pub fn handle_duplicate_table_request(
    mut events: EventReader<RequestDuplicateTable>,
    mut store: ResMut<TableStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TablesModifiedEvent>,
) {
    for event in events.read() {
        match store.duplicate(&event.table_id) {
            Ok(copy_id) => {
                info!("Duplicated table {} as {}.", event.table_id, copy_id);
                feedback_writer.write(TableOperationFeedback {
                    message: "Table duplicated.".to_string(),
                    is_error: false,
                });
                modified_writer.write(TablesModifiedEvent {
                    revision: store.revision(),
                });
            }
            Err(err) => {
                let msg = format!("Failed to duplicate table: {}", err);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
