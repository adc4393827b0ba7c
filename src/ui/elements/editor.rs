// src/ui/elements/editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::create_table_dropdown::{show_create_table_dropdown, CreateTableDropdownState};
use super::tables_list::show_tables_list;
use crate::settings::AppSettings;
use crate::tables::{events::TableRequestWriters, TableStore};
use crate::ui::UiFeedbackState;

/// Root egui pass: dropdown on top, feedback line at the bottom, tables in
/// between. Reads the store snapshot only.
pub fn tables_editor_ui(
    mut contexts: EguiContexts,
    mut dropdown: ResMut<CreateTableDropdownState>,
    store: Res<TableStore>,
    settings: Res<AppSettings>,
    feedback: Res<UiFeedbackState>,
    mut writers: TableRequestWriters,
) {
    let ctx = contexts.ctx_mut();
    let snapshot = store.snapshot();

    egui::TopBottomPanel::top("tables_top_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        show_create_table_dropdown(ui, &mut dropdown, &mut writers);
        ui.add_space(6.0);
    });

    egui::TopBottomPanel::bottom("tables_feedback_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Tables: {}", snapshot.len()));
            if !feedback.last_message.is_empty() {
                ui.separator();
                let color = if feedback.is_error {
                    egui::Color32::RED
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &feedback.last_message);
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                show_tables_list(ui, &snapshot, settings.tables_per_row, &mut writers);
            });
    });
}
