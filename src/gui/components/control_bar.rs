use eframe::egui;

use crate::gui::UiAction;
use crate::gui::constants::*;

fn colored_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .color(egui::Color32::WHITE)
            .size(SMALL_TEXT_SIZE),
    )
    .fill(fill)
}

/// Add / Delete / Prev / Next and the always-on-top checkbox
pub fn ui(ui: &mut egui::Ui, always_on_top: &mut bool) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.add(colored_button("Add", ADD_GREEN)).clicked() {
            action = Some(UiAction::OpenForm);
        }
        if ui.add(colored_button("Delete", DELETE_RED)).clicked() {
            action = Some(UiAction::Delete);
        }
        if ui.add(colored_button("←", NAV_PURPLE)).clicked() {
            action = Some(UiAction::Prev);
        }
        if ui.add(colored_button("→", NAV_PURPLE)).clicked() {
            action = Some(UiAction::Next);
        }
        if ui.checkbox(always_on_top, "On top").changed() {
            action = Some(UiAction::SetAlwaysOnTop(*always_on_top));
        }
    });

    action
}
