//! Current code view with a texture cache keyed by the stored image

use eframe::egui;
use tracing::warn;

use crate::collection::CodeCollection;
use crate::encoder::decode_base64_png;
use crate::gui::constants::*;
use crate::gui::layout::fit_size;
use crate::types::{CodeRecord, Variant};

struct CachedTexture {
    index: usize,
    image: String,
    texture: Result<egui::TextureHandle, String>,
}

/// Renders the current record, decoding its image only when it changes
#[derive(Default)]
pub struct CodeDisplay {
    cached: Option<CachedTexture>,
}

impl CodeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, collection: &CodeCollection) {
        let Some(record) = collection.current() else {
            self.cached = None;
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(EMPTY_PLACEHOLDER).color(TEXT_DARK));
            });
            return;
        };

        let index = collection.current_index();
        let caption = caption(collection.variant(), index, collection.len(), record);
        let fit = collection.variant() == Variant::Overlay;

        let texture = self.texture_for(ui.ctx(), index, record);
        ui.vertical_centered(|ui| match texture {
            Ok(texture) => {
                let native = texture.size_vec2();
                let size = if fit {
                    let room = ui.available_size() - egui::vec2(0.0, CAPTION_HEIGHT + ITEM_SPACING);
                    fit_size(native, room.max(egui::Vec2::ZERO))
                } else {
                    native
                };
                ui.image((texture.id(), size));
                ui.label(egui::RichText::new(caption).color(TEXT_DARK).size(SMALL_TEXT_SIZE));
            }
            Err(message) => {
                ui.colored_label(DELETE_RED, format!("Image unreadable: {message}"));
                ui.label(egui::RichText::new(caption).color(TEXT_DARK).size(SMALL_TEXT_SIZE));
            }
        });
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        index: usize,
        record: &CodeRecord,
    ) -> &Result<egui::TextureHandle, String> {
        let cached = match self.cached.take() {
            Some(cached) if cached.index == index && cached.image == record.image => cached,
            _ => CachedTexture {
                index,
                image: record.image.clone(),
                texture: load_texture(ctx, index, record),
            },
        };
        &self.cached.insert(cached).texture
    }
}

fn load_texture(
    ctx: &egui::Context,
    index: usize,
    record: &CodeRecord,
) -> Result<egui::TextureHandle, String> {
    let image = decode_base64_png(&record.image).map_err(|e| {
        warn!(index, data = %record.data, error = %e, "Failed to decode stored image");
        e.to_string()
    })?;
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.pixels,
    );
    Ok(ctx.load_texture(
        format!("code-{index}"),
        color_image,
        egui::TextureOptions::NEAREST,
    ))
}

fn caption(variant: Variant, index: usize, count: usize, record: &CodeRecord) -> String {
    let label = match &record.name {
        Some(name) => format!("{name} ({})", record.data),
        None => record.data.clone(),
    };
    match variant {
        Variant::PerUser => format!("Code {}/{}: {label}", index + 1, count),
        Variant::Overlay => format!("{} {}/{}: {label}", record.effective_type(), index + 1, count),
    }
}
