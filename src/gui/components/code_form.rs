use eframe::egui;

use crate::gui::UiAction;
use crate::gui::constants::*;
use crate::gui::shell::EntryForm;
use crate::types::CodeType;

/// Entry form for a new code.
///
/// The type selector is only shown when `types` offers a choice (overlay).
pub fn ui(ui: &mut egui::Ui, form: &mut EntryForm, types: &[CodeType]) -> Option<UiAction> {
    let mut action = None;

    ui.add_space(PADDING);
    egui::Grid::new("code_form")
        .num_columns(2)
        .spacing([ITEM_SPACING * 2.0, SECTION_SPACING])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Data:").color(TEXT_DARK));
            let response = ui.add(egui::TextEdit::singleline(&mut form.text).desired_width(180.0));
            if ui.memory(|m| m.focused().is_none()) {
                response.request_focus();
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(UiAction::SubmitForm);
            }
            ui.end_row();

            if types.len() > 1 {
                ui.label(egui::RichText::new("Type:").color(TEXT_DARK));
                egui::ComboBox::from_id_salt("code_type")
                    .selected_text(form.code_type.label())
                    .show_ui(ui, |ui| {
                        for code_type in types {
                            ui.selectable_value(&mut form.code_type, *code_type, code_type.label());
                        }
                    });
                ui.end_row();
            }
        });

    ui.add_space(SECTION_SPACING);
    ui.horizontal(|ui| {
        let save = egui::Button::new(egui::RichText::new("Save").color(egui::Color32::WHITE)).fill(ADD_GREEN);
        if ui.add(save).clicked() {
            action = Some(UiAction::SubmitForm);
        }
        let cancel = egui::Button::new(egui::RichText::new("Cancel").color(egui::Color32::WHITE)).fill(DELETE_RED);
        if ui.add(cancel).clicked() {
            action = Some(UiAction::CancelForm);
        }
    });

    action
}
