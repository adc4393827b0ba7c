// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;
pub mod validation;

use crate::tables::plugin::TableSystemSet;
use elements::create_table_dropdown::CreateTableDropdownState;
use elements::editor::tables_editor_ui;
use systems::{handle_ui_feedback, redraw_on_tables_modified};

/// Last operation message shown in the status line.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the table editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<CreateTableDropdownState>()
            .add_systems(
                Update,
                (handle_ui_feedback, redraw_on_tables_modified)
                    .after(TableSystemSet::ApplyChanges),
            )
            .add_systems(EguiContextPass, tables_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
