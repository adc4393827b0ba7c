// src/ui/elements/create_table_dropdown.rs
use bevy::prelude::*;
use bevy_egui::egui;

use super::create_table_form::{show_create_table_form, CreateTableFormState};
use crate::tables::definitions::CreateTableForm;
use crate::tables::events::{RequestAddTable, TableRequestWriters};

const DROPDOWN_WIDTH: f32 = 256.0;

#[derive(Resource, Debug, Default, Clone)]
pub struct CreateTableDropdownState {
    pub is_open: bool,
    pub form: CreateTableFormState,
}

impl CreateTableDropdownState {
    /// Button press: flips visibility, keeps whatever was typed.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Closes the dropdown and clears the form.
    pub fn close(&mut self) {
        self.is_open = false;
        self.form.reset();
    }

    /// Submits the form; a valid submission also closes the dropdown.
    pub fn submit(&mut self) -> Option<CreateTableForm> {
        let form = self.form.submit()?;
        self.close();
        Some(form)
    }
}

/// "Create table" button with the creation form in a popup below it.
/// A pointer press outside the popup and the button closes and resets it.
pub fn show_create_table_dropdown(
    ui: &mut egui::Ui,
    state: &mut CreateTableDropdownState,
    writers: &mut TableRequestWriters,
) {
    let button = ui.add(egui::Button::new("Create table  +").min_size(egui::vec2(120.0, 32.0)));
    if button.clicked() {
        state.toggle();
    }

    if !state.is_open {
        return;
    }

    let mut submit_triggered = false;
    let area = egui::Area::new(egui::Id::new("create_table_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(button.rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(DROPDOWN_WIDTH);
                submit_triggered = show_create_table_form(ui, &mut state.form);
            });
        });

    if submit_triggered {
        // Invalid input keeps the dropdown open with the errors shown.
        if let Some(form) = state.submit() {
            writers.add_table.write(RequestAddTable { form });
        }
        return;
    }

    let combo_open = ui.memory(|m| m.any_popup_open());
    let press = ui.input(|i| {
        if i.pointer.any_pressed() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if should_dismiss(press, area.response.rect, button.rect, combo_open) {
        debug!("Create table dropdown dismissed by outside click.");
        state.close();
    }
}

/// A press outside both the popup and its button dismisses the dropdown.
/// The combo box list lives in its own layer, so while it is open a press
/// inside it would otherwise count as outside.
fn should_dismiss(
    press: Option<egui::Pos2>,
    popup: egui::Rect,
    button: egui::Rect,
    combo_open: bool,
) -> bool {
    if combo_open {
        return false;
    }
    press.is_some_and(|pos| !popup.contains(pos) && !button.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_labels(labels: [&str; 3]) -> CreateTableDropdownState {
        let mut state = CreateTableDropdownState::default();
        state.toggle();
        state.form.text_columns = labels.map(str::to_string);
        state
    }

    #[test]
    fn test_toggle_keeps_typed_text() {
        let mut state = with_labels(["Name", "", ""]);
        state.toggle();
        assert!(!state.is_open);
        assert_eq!(state.form.text_columns[0], "Name");
        state.toggle();
        assert!(state.is_open);
    }

    #[test]
    fn test_close_resets_form() {
        let mut state = with_labels(["Name", "Age", ""]);
        assert!(state.submit().is_none());
        assert!(state.is_open);

        state.close();
        assert!(!state.is_open);
        assert_eq!(state.form, CreateTableFormState::default());
    }

    fn rects() -> (egui::Rect, egui::Rect) {
        let button = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(120.0, 32.0));
        let popup = egui::Rect::from_min_size(egui::pos2(10.0, 46.0), egui::vec2(256.0, 220.0));
        (popup, button)
    }

    #[test]
    fn test_press_outside_dismisses() {
        let (popup, button) = rects();
        assert!(should_dismiss(Some(egui::pos2(600.0, 400.0)), popup, button, false));
    }

    #[test]
    fn test_press_inside_popup_or_button_keeps_open() {
        let (popup, button) = rects();
        assert!(!should_dismiss(Some(egui::pos2(50.0, 100.0)), popup, button, false));
        assert!(!should_dismiss(Some(egui::pos2(20.0, 20.0)), popup, button, false));
    }

    #[test]
    fn test_no_press_keeps_open() {
        let (popup, button) = rects();
        assert!(!should_dismiss(None, popup, button, false));
    }

    #[test]
    fn test_press_while_combo_list_open_keeps_open() {
        let (popup, button) = rects();
        assert!(!should_dismiss(Some(egui::pos2(600.0, 400.0)), popup, button, true));
    }

    #[test]
    fn test_valid_submit_closes() {
        let mut state = with_labels(["Name", "Age", "City"]);
        let form = state.submit().unwrap();
        assert_eq!(form.column1, "Name");
        assert!(!state.is_open);
        assert_eq!(state.form, CreateTableFormState::default());
    }
}
