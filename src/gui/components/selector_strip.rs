use eframe::egui;

use crate::collection::CodeCollection;
use crate::gui::UiAction;
use crate::gui::constants::*;
use crate::gui::layout::{selector_columns, selector_index};

/// One button per record, rebuilt every frame, current one highlighted
pub fn ui(ui: &mut egui::Ui, collection: &CodeCollection) -> Option<UiAction> {
    let count = collection.len();
    if count == 0 {
        return None;
    }

    let mut action = None;
    let current = collection.current_index();
    let columns = selector_columns(count);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        egui::Grid::new("code_selector")
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                for row in 0..SELECTOR_ROWS.min(count) {
                    for column in 0..columns {
                        let Some(index) = selector_index(row, column, count) else {
                            ui.label("");
                            continue;
                        };
                        let record = &collection.codes()[index];
                        let fill = if index == current { ACCENT } else { INACTIVE };
                        let button = egui::Button::new(
                            egui::RichText::new(record.short_label())
                                .color(egui::Color32::WHITE)
                                .size(SMALL_TEXT_SIZE),
                        )
                        .fill(fill)
                        .min_size(egui::vec2(SELECTOR_BUTTON_WIDTH, 0.0));

                        let hover = match &record.name {
                            Some(name) => format!("{name}: {}", record.data),
                            None => record.data.clone(),
                        };
                        if ui.add(button).on_hover_text(hover).clicked() {
                            action = Some(UiAction::Select(index));
                        }
                    }
                    ui.end_row();
                }
            });
    });

    action
}
