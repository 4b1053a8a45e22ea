use eframe::egui;

use crate::gui::UiAction;
use crate::gui::constants::*;

/// Drag progress on the title bar background, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    Started(egui::Pos2),
    Dragging,
    Stopped,
}

#[derive(Debug, Default)]
pub struct TitleBarOutput {
    pub action: Option<UiAction>,
    pub drag: Option<DragSignal>,
}

fn bar_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .color(egui::Color32::WHITE)
            .size(SMALL_TEXT_SIZE),
    )
    .fill(fill)
}

/// Title, chrome toggle and, for a borderless window, a close button and
/// drag handling on everything that is not a button.
pub fn ui(ui: &mut egui::Ui, title: &str, borderless: bool) -> TitleBarOutput {
    let mut output = TitleBarOutput::default();

    // Registered before the widgets so buttons on top still get their clicks
    let background = borderless.then(|| {
        ui.interact(
            ui.max_rect(),
            ui.id().with("title_bar_drag"),
            egui::Sense::drag(),
        )
    });

    ui.horizontal_centered(|ui| {
        ui.add_space(ITEM_SPACING);
        ui.add(
            egui::Label::new(egui::RichText::new(title).color(egui::Color32::WHITE))
                .selectable(false),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if borderless && ui.add(bar_button("✕", DELETE_RED)).on_hover_text("Close").clicked() {
                output.action = Some(UiAction::Close);
            }
            if ui
                .add(bar_button("UI", ACCENT))
                .on_hover_text("Show/hide controls")
                .clicked()
            {
                output.action = Some(UiAction::ToggleChrome);
            }
        });
    });

    if let Some(background) = background {
        output.drag = if background.drag_started() {
            ui.input(|i| i.pointer.press_origin())
                .map(DragSignal::Started)
        } else if background.drag_stopped() {
            Some(DragSignal::Stopped)
        } else if background.dragged() {
            Some(DragSignal::Dragging)
        } else {
            None
        };
    }

    output
}
