// src/ui/elements/table_editable.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::tables::definitions::{Table, UpdateCellPayload};
use crate::tables::events::{RequestDuplicateTable, TableRequestWriters, UpdateCellEvent};

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 26.0;
const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(30, 64, 175);

/// Renders one table as an editable grid. Edits and the "Copy" button are
/// turned into request events; the table itself is never touched here.
pub fn show_table_editable(ui: &mut egui::Ui, table: &Table, writers: &mut TableRequestWriters) {
    let column_count = table.header.len();
    if column_count == 0 {
        ui.label("(No columns defined)");
        return;
    }

    ui.push_id(table.id.as_str(), |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for _ in 0..column_count {
            builder = builder.column(Column::remainder().at_least(60.0).clip(true));
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                for (idx, column) in table.header.iter().enumerate() {
                    header.col(|ui| {
                        ui.painter()
                            .rect_filled(ui.max_rect(), 0.0, HEADER_FILL);
                        ui.label(
                            egui::RichText::new(&column.label)
                                .small()
                                .color(egui::Color32::from_gray(225)),
                        );
                        if is_copy_column(idx, column_count) {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("Copy").clicked() {
                                    writers.duplicate.write(RequestDuplicateTable {
                                        table_id: table.id.clone(),
                                    });
                                }
                            });
                        }
                    });
                }
            })
            .body(|mut body| {
                for row in &table.data {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        for column in table.header.iter() {
                            table_row.col(|ui| {
                                let current = row.get(&column.id).unwrap_or_default();
                                if let Some(value) = editable_cell(ui, current) {
                                    writers.update_cell.write(UpdateCellEvent {
                                        payload: UpdateCellPayload {
                                            table_id: table.id.clone(),
                                            row_id: row.id.clone(),
                                            field: column.id.clone(),
                                            value,
                                        },
                                    });
                                }
                            });
                        }
                    });
                }
            });
    });
}

/// The "Copy" button sits in the last header cell only.
fn is_copy_column(idx: usize, column_count: usize) -> bool {
    idx + 1 == column_count
}

/// Single-line input over a copy of the cell; returns the new text if edited.
fn editable_cell(ui: &mut egui::Ui, current: &str) -> Option<String> {
    let mut buffer = current.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .frame(false)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(buffer)
}
