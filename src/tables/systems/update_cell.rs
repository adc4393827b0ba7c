// src/tables/systems/update_cell.rs
//! Cell update system - handles user-initiated cell value changes

use bevy::prelude::*;

use crate::tables::{
    events::{TableOperationFeedback, TablesModifiedEvent, UpdateCellEvent},
    resources::{CellUpdateOutcome, TableStore},
};

pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    mut store: ResMut<TableStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TablesModifiedEvent>,
) {
    let mut any_changed = false;

    for event in events.read() {
        let payload = &event.payload;
        match store.update_cell(payload) {
            Ok(CellUpdateOutcome::Changed { outside_header, .. }) => {
                any_changed = true;
                if outside_header {
                    debug!(
                        "Cell '{}' of row {} written outside the header of table {}.",
                        payload.field, payload.row_id, payload.table_id
                    );
                }
            }
            Ok(CellUpdateOutcome::Unchanged) => {}
            Err(err) => {
                let full_msg = format!(
                    "Cell update rejected for table {} field '{}': {}",
                    payload.table_id, payload.field, err
                );
                warn!("{}", full_msg);
                feedback_writer.write(TableOperationFeedback {
                    message: full_msg,
                    is_error: true,
                });
            }
        }
    }

    // Keystrokes arrive as one event each; notify once per frame.
    if any_changed {
        modified_writer.write(TablesModifiedEvent {
            revision: store.revision(),
        });
    }
}
