// src/ui/elements/tables_list.rs
use bevy_egui::egui;
use std::num::NonZeroUsize;

use super::table_editable::show_table_editable;
use crate::tables::definitions::TableCollection;
use crate::tables::events::TableRequestWriters;
use crate::tables::utils::make_table_chunks;

const CHUNK_SPACING: f32 = 24.0;

/// Lays tables out `tables_per_row` to a line, each taking an equal share.
pub fn show_tables_list(
    ui: &mut egui::Ui,
    tables: &TableCollection,
    tables_per_row: NonZeroUsize,
    writers: &mut TableRequestWriters,
) {
    if tables.is_empty() {
        ui.weak("No tables yet. Use \"Create table\" to add one.");
        return;
    }

    for chunk in make_table_chunks(tables.as_slice(), tables_per_row) {
        ui.columns(chunk.len(), |columns| {
            for (column_ui, table) in columns.iter_mut().zip(chunk) {
                show_table_editable(column_ui, table, writers);
            }
        });
        ui.add_space(CHUNK_SPACING);
    }
}
