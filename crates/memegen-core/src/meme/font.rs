use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

/// Font file candidates, checked in order; first match wins.
/// Covers macOS system fonts and common Linux locations.
const FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Cell size of the built-in fallback font.
const BITMAP_GLYPH_SIZE: u32 = 8;

/// The caption font: a platform TrueType face when one can be loaded,
/// otherwise a built-in fixed-size 8x8 bitmap font.
pub enum CaptionFont {
    TrueType { font: FontVec, scale: PxScale },
    Bitmap,
}

impl CaptionFont {
    /// Probe the platform font paths, falling back to the bitmap font.
    pub fn load(size: f32) -> CaptionFont {
        for candidate in FONT_PATHS {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match FontVec::try_from_vec(bytes) {
                Ok(font) => {
                    tracing::debug!(path = candidate, "loaded caption font");
                    return CaptionFont::TrueType {
                        font,
                        scale: PxScale::from(size),
                    };
                }
                Err(_) => continue,
            }
        }

        tracing::warn!("no TrueType font found; using built-in bitmap font");
        CaptionFont::Bitmap
    }

    /// Bounding box of `text` rendered in this font.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            CaptionFont::TrueType { font, scale } => text_size(*scale, font, text),
            CaptionFont::Bitmap => (
                text.chars().count() as u32 * BITMAP_GLYPH_SIZE,
                BITMAP_GLYPH_SIZE,
            ),
        }
    }

    /// Draw `text` onto the canvas with its top-left corner at (x, y).
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            CaptionFont::TrueType { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            CaptionFont::Bitmap => draw_bitmap_text(canvas, x, y, text, color),
        }
    }
}

/// Blit 8x8 glyphs pixel by pixel, clipping at the canvas edges.
fn draw_bitmap_text(canvas: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let glyph_x = x + (i as u32 * BITMAP_GLYPH_SIZE) as i32;
        for (row_idx, row) in glyph.iter().enumerate() {
            for bit in 0..BITMAP_GLYPH_SIZE {
                if row & (1 << bit) == 0 {
                    continue;
                }
                let px = glyph_x + bit as i32;
                let py = y + row_idx as i32;
                if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
                {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
