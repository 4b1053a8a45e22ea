//! RGB bitmaps produced by the encoders and the PNG/base64 image codec

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::Cursor;

use crate::error::CodeError;

const WHITE: u8 = 0xFF;
const BLACK: u8 = 0x00;

/// 8-bit RGB image, row-major, no padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Bitmap {
    /// Paint a module grid black on white.
    ///
    /// `is_dark(column, row)` is queried once per module; each module becomes
    /// a `module_px` square, surrounded by `margin_px` of white.
    pub fn from_modules(
        columns: usize,
        rows: usize,
        module_px: u32,
        margin_px: u32,
        is_dark: impl Fn(usize, usize) -> bool,
    ) -> Self {
        let width = columns as u32 * module_px + 2 * margin_px;
        let height = rows as u32 * module_px + 2 * margin_px;
        let stride = width as usize * 3;
        let mut rgb = vec![WHITE; stride * height as usize];

        for row in 0..rows {
            for column in 0..columns {
                if !is_dark(column, row) {
                    continue;
                }
                let x0 = (margin_px + column as u32 * module_px) as usize;
                let y0 = margin_px + row as u32 * module_px;
                for y in y0..y0 + module_px {
                    let start = y as usize * stride + x0 * 3;
                    rgb[start..start + module_px as usize * 3].fill(BLACK);
                }
            }
        }

        Self { width, height, rgb }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    pub fn to_png(&self) -> Result<Vec<u8>, CodeError> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| CodeError::Image(format!("PNG header: {e}")))?;
            writer
                .write_image_data(&self.rgb)
                .map_err(|e| CodeError::Image(format!("PNG data: {e}")))?;
            writer
                .finish()
                .map_err(|e| CodeError::Image(format!("PNG finish: {e}")))?;
        }
        Ok(out)
    }

    /// Serialized form stored in code records
    pub fn to_base64_png(&self) -> Result<String, CodeError> {
        Ok(STANDARD.encode(self.to_png()?))
    }
}

/// Decoded image ready for upload as a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub fn decode_base64_png(encoded: &str) -> Result<RgbaImage, CodeError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CodeError::Image(format!("invalid base64: {e}")))?;
    decode_png(&bytes)
}

/// Decode any 8/16-bit PNG into RGBA8
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, CodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| CodeError::Image(format!("PNG header: {e}")))?;

    let (color_type, _) = reader.output_color_type();
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let mut buf = vec![0; color_type.samples() * width as usize * height as usize];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| CodeError::Image(format!("PNG data: {e}")))?;
    let data = &buf[..frame.buffer_size()];

    let pixels = match color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(data.len() / 3 * 4);
            for chunk in data.chunks_exact(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(0xFF);
            }
            rgba
        }
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 0xFF]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        other => {
            return Err(CodeError::Image(format!(
                "unsupported PNG color type {other:?} after expansion"
            )));
        }
    };

    Ok(RgbaImage {
        width,
        height,
        pixels,
    })
}
