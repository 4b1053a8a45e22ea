//! Code browser window built on eframe, shared by both variants

use std::time::Duration;

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{debug, info, warn};

use super::UiAction;
use super::components::display::CodeDisplay;
use super::components::title_bar::{self, DragSignal};
use super::components::{code_form, control_bar, dialogs, selector_strip};
use super::constants::*;
use super::shell::{Chrome, ShellState};
use super::viewport::{DragState, ViewportCtx, apply_always_on_top, apply_chrome};
use crate::collection::CodeCollection;
use crate::encoder::EncoderRegistry;
use crate::persistence::CodeStore;
use crate::types::Variant;

pub struct CodeToolApp {
    store: CodeStore,
    encoders: EncoderRegistry,
    collection: CodeCollection,
    shell: ShellState,
    drag: DragState,
    display: CodeDisplay,
    initial_refresh_scheduled: bool,
}

impl CodeToolApp {
    fn new(
        _cc: &CreationContext<'_>,
        store: CodeStore,
        encoders: EncoderRegistry,
        collection: CodeCollection,
    ) -> Self {
        info!(
            variant = ?collection.variant(),
            count = collection.len(),
            "Initializing code browser"
        );
        Self::with_parts(store, encoders, collection)
    }

    fn with_parts(store: CodeStore, encoders: EncoderRegistry, collection: CodeCollection) -> Self {
        Self {
            store,
            encoders,
            collection,
            shell: ShellState::new(),
            drag: DragState::default(),
            display: CodeDisplay::new(),
            initial_refresh_scheduled: false,
        }
    }

    fn variant(&self) -> Variant {
        self.collection.variant()
    }

    fn full_size(&self) -> egui::Vec2 {
        window_size(self.variant())
    }

    /// Apply one user intent. Window effects go through `viewport`.
    pub fn handle(&mut self, action: UiAction, viewport: &impl ViewportCtx) {
        debug!(?action, "UI action");
        match action {
            UiAction::ToggleChrome => {
                let chrome = self.shell.toggle_chrome();
                apply_chrome(viewport, chrome, self.full_size());
            }
            // Saving happens in `on_exit`
            UiAction::Close => viewport.send_viewport_cmd(egui::ViewportCommand::Close),
            UiAction::SetAlwaysOnTop(on_top) => {
                self.shell.always_on_top = on_top;
                apply_always_on_top(viewport, on_top);
            }
            UiAction::OpenForm => self.shell.open_form(self.variant()),
            UiAction::SubmitForm => self.submit_form(),
            UiAction::CancelForm => self.shell.close_form(),
            UiAction::Delete => self.request_delete(),
            UiAction::ConfirmDelete => {
                self.shell.confirm_delete = false;
                self.delete_current();
            }
            UiAction::CancelDelete => self.shell.confirm_delete = false,
            UiAction::DismissNotice => self.shell.notice = None,
            UiAction::Prev => self.collection.prev(),
            UiAction::Next => self.collection.next(),
            UiAction::Select(index) => {
                if !self.collection.select(index) {
                    warn!(index, count = self.collection.len(), "Ignoring out-of-range selection");
                }
            }
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.shell.form.as_ref() else {
            return;
        };
        let text = form.text.clone();
        let code_type = form.code_type;

        match self.collection.add(&self.encoders, &text, code_type) {
            Ok(_) => {
                self.shell.close_form();
                self.store.save_logged(&self.collection);
            }
            Err(e) => {
                warn!(error = %e, "Rejected new code");
                self.shell.show_error(&e);
            }
        }
    }

    fn request_delete(&mut self) {
        if self.collection.is_empty() {
            self.shell.show_info("No code to delete");
            return;
        }
        match self.variant() {
            Variant::PerUser => self.shell.confirm_delete = true,
            Variant::Overlay => self.delete_current(),
        }
    }

    fn delete_current(&mut self) {
        match self.collection.remove_current() {
            Ok(_) => {
                self.store.save_logged(&self.collection);
            }
            Err(e) => self.shell.show_info(e.to_string()),
        }
    }

    fn handle_drag(&mut self, ctx: &egui::Context, signal: DragSignal) {
        let inner_origin = ctx.input(|i| i.viewport().inner_rect.map(|r| r.min));
        match signal {
            DragSignal::Started(pointer_in_window) => match inner_origin {
                Some(_) => self.drag.begin(pointer_in_window),
                // Position unknown on this platform, let the window manager move us
                None => ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag),
            },
            DragSignal::Dragging if self.drag.is_dragging() => {
                let pointer = ctx.input(|i| i.pointer.latest_pos());
                if let (Some(origin), Some(pointer)) = (inner_origin, pointer) {
                    self.drag.motion(ctx, origin + pointer.to_vec2());
                }
            }
            DragSignal::Dragging => {}
            DragSignal::Stopped => self.drag.end(),
        }
    }

    /// Left/Right cycle the per-user collection whatever widget has focus.
    /// Blocked only while a dialog is open.
    fn handle_keys(&self, ctx: &egui::Context) -> Option<UiAction> {
        if self.variant() != Variant::PerUser || self.shell.has_modal() {
            return None;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                Some(UiAction::Prev)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(UiAction::Next)
            } else {
                None
            }
        })
    }

    fn fill(&self, color: egui::Color32) -> egui::Color32 {
        match self.variant() {
            Variant::Overlay => {
                egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), OVERLAY_ALPHA)
            }
            Variant::PerUser => color,
        }
    }
}

impl eframe::App for CodeToolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initial_refresh_scheduled {
            self.initial_refresh_scheduled = true;
            ctx.request_repaint_after(Duration::from_millis(INITIAL_REFRESH_DELAY_MS));
        }

        let mut actions: Vec<UiAction> = self.handle_keys(ctx).into_iter().collect();
        let modal = self.shell.has_modal();
        let variant = self.variant();
        let title_fill = self.fill(TITLE_BAR_BG);
        let content_fill = self.fill(CONTENT_BG);
        let control_fill = self.fill(CONTROL_BG);
        let display_fill = self.fill(DISPLAY_BG);

        let title_output = egui::TopBottomPanel::top("title_bar")
            .exact_height(TITLE_BAR_HEIGHT)
            .frame(egui::Frame::new().fill(title_fill))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal, |ui| {
                    title_bar::ui(ui, variant.title(), variant == Variant::Overlay)
                })
                .inner
            })
            .inner;
        actions.extend(title_output.action);
        if let Some(signal) = title_output.drag {
            self.handle_drag(ctx, signal);
        }

        if self.shell.chrome == Chrome::Visible {
            if let Some(form) = self.shell.form.as_mut() {
                let types = match variant {
                    Variant::Overlay => self.encoders.available_types(),
                    Variant::PerUser => Vec::new(),
                };
                let action = egui::CentralPanel::default()
                    .frame(egui::Frame::new().fill(content_fill).inner_margin(egui::Margin::same(10)))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!modal, |ui| code_form::ui(ui, form, &types)).inner
                    })
                    .inner;
                actions.extend(action);
            } else {
                let always_on_top = &mut self.shell.always_on_top;
                let action = egui::TopBottomPanel::bottom("control_bar")
                    .frame(egui::Frame::new().fill(control_fill).inner_margin(egui::Margin::same(4)))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!modal, |ui| control_bar::ui(ui, always_on_top)).inner
                    })
                    .inner;
                actions.extend(action);

                if variant == Variant::PerUser {
                    let collection = &self.collection;
                    let action = egui::SidePanel::left("selector_strip")
                        .exact_width(SELECTOR_WIDTH)
                        .resizable(false)
                        .frame(egui::Frame::new().fill(content_fill).inner_margin(egui::Margin::same(2)))
                        .show(ctx, |ui| {
                            ui.add_enabled_ui(!modal, |ui| selector_strip::ui(ui, collection)).inner
                        })
                        .inner;
                    actions.extend(action);
                }

                let display = &mut self.display;
                let collection = &self.collection;
                egui::CentralPanel::default()
                    .frame(
                        egui::Frame::new()
                            .fill(display_fill)
                            .stroke(egui::Stroke::new(1.0, INACTIVE))
                            .inner_margin(egui::Margin::same(5)),
                    )
                    .show(ctx, |ui| display.ui(ui, collection));
            }
        }

        if let Some(notice) = &self.shell.notice {
            actions.extend(dialogs::notice(ctx, notice));
        } else if self.shell.confirm_delete {
            actions.extend(dialogs::confirm_delete(ctx));
        }

        for action in actions {
            self.handle(action, ctx);
        }
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        match self.variant() {
            Variant::Overlay => egui::Rgba::TRANSPARENT.to_array(),
            Variant::PerUser => egui::Rgba::from(visuals.panel_fill).to_array(),
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.store.save_logged(&self.collection);
        info!("Code browser exiting");
    }
}

fn window_size(variant: Variant) -> egui::Vec2 {
    match variant {
        Variant::PerUser => egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT),
        Variant::Overlay => egui::vec2(OVERLAY_WIDTH, OVERLAY_HEIGHT),
    }
}

fn native_options(variant: Variant) -> NativeOptions {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(window_size(variant))
        .with_title(variant.title())
        .with_window_level(egui::WindowLevel::AlwaysOnTop);

    let viewport = match variant {
        Variant::PerUser => viewport.with_resizable(false),
        Variant::Overlay => viewport.with_decorations(false).with_transparent(true),
    };

    NativeOptions {
        viewport,
        ..Default::default()
    }
}

pub fn run_gui(
    store: CodeStore,
    encoders: EncoderRegistry,
    collection: CodeCollection,
) -> Result<()> {
    let variant = collection.variant();
    info!(?variant, path = %store.path().display(), "Starting code browser");

    eframe::run_native(
        variant.title(),
        native_options(variant),
        Box::new(move |cc| Ok(Box::new(CodeToolApp::new(cc, store, encoders, collection)))),
    )
    .map_err(|err| anyhow!("Failed to launch code browser window: {err}"))
}
