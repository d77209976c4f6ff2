pub mod font;

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MemeError;
use font::CaptionFont;

/// Hard ceiling for the output image width; requested widths are
/// clamped to it. Adjustable per engine via [`MemeEngine::with_max_width`].
pub const MAX_WIDTH: u32 = 500;

/// Caption point size, fixed regardless of image dimensions.
const FONT_SIZE: f32 = 24.0;

/// Minimum distance between the caption box and every image edge.
const CAPTION_MARGIN: i64 = 10;

/// Length of the random output filename stem.
const FILENAME_LEN: usize = 12;

const FILENAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shadow pass offsets: one dark copy in each diagonal direction.
const SHADOW_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Generates meme images by overlaying quote captions on photographs.
///
/// The pipeline is strictly linear: load, resize, caption, persist.
/// A failing step aborts the call; nothing is written on load failure.
pub struct MemeEngine {
    output_dir: PathBuf,
    max_width: u32,
    font: CaptionFont,
}

impl MemeEngine {
    /// An engine that writes generated memes into `output_dir`,
    /// creating the directory if it does not exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<MemeEngine, MemeError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|e| MemeError::OutputDir {
            path: output_dir.clone(),
            source: e,
        })?;

        tracing::info!(dir = %output_dir.display(), "meme output directory ready");
        Ok(MemeEngine {
            output_dir,
            max_width: MAX_WIDTH,
            font: CaptionFont::load(FONT_SIZE),
        })
    }

    /// Override the width ceiling. Callers wanting a canvas wider than
    /// the default must opt in here; `make_meme` still clamps to it.
    pub fn with_max_width(mut self, max_width: u32) -> MemeEngine {
        self.max_width = max_width.max(1);
        self
    }

    /// Generate a meme and return the path of the written file.
    pub fn make_meme(
        &self,
        img_path: &Path,
        body: &str,
        author: &str,
        width: u32,
    ) -> Result<PathBuf, MemeError> {
        self.make_meme_with_rng(img_path, body, author, width, &mut StdRng::from_entropy())
    }

    /// Same as [`make_meme`](Self::make_meme) with a caller-supplied RNG,
    /// so caption placement and the output filename can be seeded.
    pub fn make_meme_with_rng<R: Rng>(
        &self,
        img_path: &Path,
        body: &str,
        author: &str,
        width: u32,
        rng: &mut R,
    ) -> Result<PathBuf, MemeError> {
        tracing::info!(image = %img_path.display(), "generating meme");

        let width = width.clamp(1, self.max_width);
        let img = load_image(img_path)?;
        let img = resize_image(img, width);

        let mut canvas = img.to_rgba8();
        self.add_caption(&mut canvas, body, author, rng);

        let out_path = self.save_image(&canvas, rng)?;
        tracing::info!(path = %out_path.display(), "meme saved");
        Ok(out_path)
    }

    /// Draw the caption at a random position, shadow pass first.
    fn add_caption<R: Rng>(&self, canvas: &mut RgbaImage, body: &str, author: &str, rng: &mut R) {
        let caption = format!("\"{body}\" - {author}");
        let (text_w, text_h) = self.font.measure(&caption);
        let (x, y) = caption_origin(rng, canvas.width(), canvas.height(), text_w, text_h);
        tracing::debug!(x, y, "caption position");

        for (dx, dy) in SHADOW_OFFSETS {
            self.font
                .draw(canvas, x + dx, y + dy, &caption, Rgba([0, 0, 0, 255]));
        }
        self.font
            .draw(canvas, x, y, &caption, Rgba([255, 255, 255, 255]));
    }

    /// Write the canvas under a fresh random name, PNG encoded.
    fn save_image<R: Rng>(&self, canvas: &RgbaImage, rng: &mut R) -> Result<PathBuf, MemeError> {
        let stem: String = (0..FILENAME_LEN)
            .map(|_| FILENAME_CHARSET[rng.gen_range(0..FILENAME_CHARSET.len())] as char)
            .collect();
        let out_path = self.output_dir.join(format!("{stem}.png"));

        canvas.save(&out_path).map_err(|e| MemeError::SaveFailed {
            path: out_path.clone(),
            source: e,
        })?;
        Ok(out_path)
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, MemeError> {
    image::open(path).map_err(|e| match &e {
        image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            MemeError::ImageNotFound(path.to_path_buf())
        }
        _ => MemeError::ImageUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Scale down to `max_width` keeping the aspect ratio; images already
/// narrow enough pass through untouched.
fn resize_image(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }

    let new_height = (img.height() as f64 * max_width as f64 / img.width() as f64)
        .round()
        .max(1.0) as u32;
    tracing::debug!(width = max_width, height = new_height, "resizing image");
    img.resize_exact(max_width, new_height, FilterType::Lanczos3)
}

/// Pick a caption origin such that the whole text box stays inside the
/// image with [`CAPTION_MARGIN`] on every side. When the text is wider
/// or taller than the available span, the origin pins to the margin.
fn caption_origin<R: Rng>(
    rng: &mut R,
    canvas_w: u32,
    canvas_h: u32,
    text_w: u32,
    text_h: u32,
) -> (i32, i32) {
    let max_x = (canvas_w as i64 - text_w as i64 - CAPTION_MARGIN).max(CAPTION_MARGIN);
    let max_y = (canvas_h as i64 - text_h as i64 - CAPTION_MARGIN).max(CAPTION_MARGIN);
    let x = rng.gen_range(CAPTION_MARGIN..=max_x);
    let y = rng.gen_range(CAPTION_MARGIN..=max_y);
    (x as i32, y as i32)
}
