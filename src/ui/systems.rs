// src/ui/systems.rs
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::{
    tables::events::{TableOperationFeedback, TablesModifiedEvent},
    ui::UiFeedbackState,
};

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<TableOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// In reactive (low power) mode nothing redraws until input arrives, so a
/// new snapshot asks for a frame explicitly.
pub fn redraw_on_tables_modified(
    mut modified_events: EventReader<TablesModifiedEvent>,
    mut redraw_writer: EventWriter<RequestRedraw>,
) {
    if let Some(last) = modified_events.read().last() {
        debug!("Tables modified (revision {}), requesting redraw.", last.revision);
        redraw_writer.write(RequestRedraw);
    }
}
