use eframe::egui;

use crate::gui::UiAction;
use crate::gui::constants::*;
use crate::gui::shell::{Notice, NoticeKind};

pub fn notice(ctx: &egui::Context, notice: &Notice) -> Option<UiAction> {
    let mut action = None;

    egui::Window::new(notice.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color = match notice.kind {
                NoticeKind::Info => TEXT_DARK,
                NoticeKind::Error => DELETE_RED,
            };
            ui.colored_label(color, &notice.message);
            ui.add_space(ITEM_SPACING);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = Some(UiAction::DismissNotice);
                }
            });
        });

    action
}

pub fn confirm_delete(ctx: &egui::Context) -> Option<UiAction> {
    let mut action = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Delete the current code?");
            ui.add_space(ITEM_SPACING);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    action = Some(UiAction::ConfirmDelete);
                }
                if ui.button("No").clicked() {
                    action = Some(UiAction::CancelDelete);
                }
            });
        });

    action
}
