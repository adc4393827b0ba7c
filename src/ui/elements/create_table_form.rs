// src/ui/elements/create_table_form.rs
use bevy_egui::egui;

use crate::tables::definitions::CreateTableForm;
use crate::ui::validation::{clamp_label, validate_required, MAX_COLUMN_LABEL_LEN};

const TEXT_COLUMN_PLACEHOLDERS: [&str; 3] = ["First Column", "Second Column", "Third Column"];

/// Choices offered for the fourth column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationColumn {
    #[default]
    Country,
    City,
    Street,
    Home,
}

impl LocationColumn {
    pub const ALL: [LocationColumn; 4] = [
        LocationColumn::Country,
        LocationColumn::City,
        LocationColumn::Street,
        LocationColumn::Home,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LocationColumn::Country => "Country",
            LocationColumn::City => "City",
            LocationColumn::Street => "Street",
            LocationColumn::Home => "Home",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTableFormState {
    /// Labels for column1..column3.
    pub text_columns: [String; 3],
    pub column4: LocationColumn,
    /// Validation message per text column from the last submit attempt.
    pub errors: [Option<&'static str>; 3],
}

impl CreateTableFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the inputs. On success the form is reset and the collected
    /// labels are returned; otherwise `errors` is filled in.
    pub fn submit(&mut self) -> Option<CreateTableForm> {
        for (error, value) in self.errors.iter_mut().zip(self.text_columns.iter()) {
            *error = validate_required(value);
        }
        if self.errors.iter().any(Option::is_some) {
            return None;
        }

        let [mut column1, mut column2, mut column3] = std::mem::take(&mut self.text_columns);
        for label in [&mut column1, &mut column2, &mut column3] {
            clamp_label(label);
        }
        let form = CreateTableForm {
            column1,
            column2,
            column3,
            column4: self.column4.label().to_string(),
        };
        self.reset();
        Some(form)
    }
}

/// Draws the form. Returns true when the user pressed "Add" or Enter in a
/// text input; validation is left to the caller via `submit`.
pub fn show_create_table_form(ui: &mut egui::Ui, form: &mut CreateTableFormState) -> bool {
    let mut trigger_submit = false;

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 8.0;

        for (idx, placeholder) in TEXT_COLUMN_PLACEHOLDERS.iter().enumerate() {
            let response = ui.add(
                egui::TextEdit::singleline(&mut form.text_columns[idx])
                    .hint_text(*placeholder)
                    .char_limit(MAX_COLUMN_LABEL_LEN)
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                trigger_submit = true;
            }
            if let Some(message) = form.errors[idx] {
                ui.colored_label(egui::Color32::RED, egui::RichText::new(message).small());
            }
        }

        egui::ComboBox::from_id_salt("create_table_column4")
            .selected_text(form.column4.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for choice in LocationColumn::ALL {
                    ui.selectable_value(&mut form.column4, choice, choice.label());
                }
            });

        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::new("ADD"))
            .clicked()
        {
            trigger_submit = true;
        }
    });

    trigger_submit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::validation::REQUIRED_MESSAGE;

    fn filled(labels: [&str; 3], column4: LocationColumn) -> CreateTableFormState {
        CreateTableFormState {
            text_columns: labels.map(str::to_string),
            column4,
            errors: [None; 3],
        }
    }

    #[test]
    fn test_submit_valid_form_returns_labels_and_resets() {
        let mut state = filled(["Name", "Age", "City"], LocationColumn::Street);

        let form = state.submit().unwrap();

        assert_eq!(
            form,
            CreateTableForm {
                column1: "Name".to_string(),
                column2: "Age".to_string(),
                column3: "City".to_string(),
                column4: "Street".to_string(),
            }
        );
        assert_eq!(state, CreateTableFormState::default());
    }

    #[test]
    fn test_submit_with_missing_columns_reports_each() {
        let mut state = filled(["Name", "", ""], LocationColumn::Home);

        assert!(state.submit().is_none());

        assert_eq!(state.errors, [None, Some(REQUIRED_MESSAGE), Some(REQUIRED_MESSAGE)]);
        assert_eq!(state.text_columns[0], "Name");
        assert_eq!(state.column4, LocationColumn::Home);
    }

    #[test]
    fn test_errors_clear_after_fix() {
        let mut state = filled(["", "Age", "City"], LocationColumn::Country);
        assert!(state.submit().is_none());

        state.text_columns[0] = "Name".to_string();
        assert!(state.submit().is_some());
        assert_eq!(state.errors, [None; 3]);
    }

    #[test]
    fn test_submit_clamps_long_labels() {
        let mut state = filled(["Sixteen chars!!!", "Age", "City"], LocationColumn::Country);
        let form = state.submit().unwrap();
        assert_eq!(form.column1, "Sixteen chars!!");
    }

    #[test]
    fn test_idle_frame_does_not_submit() {
        let ctx = egui::Context::default();
        let mut state = filled(["Name", "", ""], LocationColumn::City);
        let before = state.clone();
        let mut triggered = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                triggered = show_create_table_form(ui, &mut state);
            });
        });

        assert!(!triggered);
        assert_eq!(state, before);
    }

    #[test]
    fn test_default_fourth_column_is_country() {
        let mut state = filled(["A", "B", "C"], LocationColumn::default());
        assert_eq!(state.submit().unwrap().column4, "Country");
    }
}
