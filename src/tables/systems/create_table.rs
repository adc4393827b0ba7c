// src/tables/systems/create_table.rs
use bevy::prelude::*;

use crate::tables::{
    events::{RequestAddTable, TableOperationFeedback, TablesModifiedEvent},
    resources::TableStore,
};

pub fn handle_add_table_request(
    mut events: EventReader<RequestAddTable>,
    mut store: ResMut<TableStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TablesModifiedEvent>,
) {
    for event in events.read() {
        let table_id = store.add(&event.form);
        info!(
            "Created table {} ({} total) with columns [{}, {}, {}, {}].",
            table_id,
            store.tables().len(),
            event.form.column1,
            event.form.column2,
            event.form.column3,
            event.form.column4
        );

        feedback_writer.write(TableOperationFeedback {
            message: format!("Table {} created.", table_id),
            is_error: false,
        });
        modified_writer.write(TablesModifiedEvent {
            revision: store.revision(),
        });
    }
}
