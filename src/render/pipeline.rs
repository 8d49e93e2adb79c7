use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    assets::{
        decode::{ImageDecoder, PreparedImage},
        source::LabeledImage,
        text::FontSet,
    },
    composition::request::CollageRequest,
    encode::png::{download_file_name, encode_png, unix_millis_now},
    foundation::{
        core::{Rect, Rgba8},
        error::{SatError, SatResult},
    },
    layout::grid::GridLayout,
    render::{
        canvas::{CpuCanvas, TextPainter},
        settings::CollageSettings,
    },
};

/// How a cell ended up on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellStatus {
    /// The image decoded and was drawn.
    Drawn,
    /// Decoding failed; a placeholder was drawn instead.
    Placeholder {
        /// Human-readable decode error.
        reason: String,
    },
}

/// Where one input image was placed.
#[derive(Clone, Debug, PartialEq)]
pub struct CellReport {
    /// Input position.
    pub index: usize,
    /// Filename of the source image.
    pub file_name: String,
    /// Text drawn in the label band.
    pub label: String,
    /// Rectangle the image was stretched into.
    pub image_rect: Rect,
    /// Label band rectangle at the bottom of the cell.
    pub label_band: Rect,
    /// Whether the image or a placeholder was drawn.
    pub status: CellStatus,
}

/// Encoded collage plus everything needed to preview or save it.
#[derive(Clone, Debug)]
pub struct CollageResult {
    /// PNG bytes.
    pub png: Arc<[u8]>,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Title line drawn in the title band.
    pub title: String,
    /// Title band rectangle.
    pub title_band: Rect,
    /// Suggested download name, `satellite-collage-<unix-millis>.png`.
    pub file_name: String,
    /// One entry per input image, in input order.
    pub cells: Vec<CellReport>,
}

impl CollageResult {
    /// Cells that fell back to a placeholder.
    pub fn failed_cells(&self) -> impl Iterator<Item = &CellReport> {
        self.cells
            .iter()
            .filter(|c| matches!(c.status, CellStatus::Placeholder { .. }))
    }

    /// Write the PNG into `dir` under [`CollageResult::file_name`].
    pub fn save_to_dir(&self, dir: &Path) -> SatResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(path)
    }
}

/// Build a collage, resolving fonts from the system and `settings.font_dirs`.
pub fn build_collage(
    request: &CollageRequest,
    settings: &CollageSettings,
    decoder: &dyn ImageDecoder,
) -> SatResult<CollageResult> {
    request.validate()?;
    settings.validate()?;
    let fonts = FontSet::discover(&settings.font_dirs);
    build_collage_with_fonts(request, settings, decoder, &fonts)
}

/// Build a collage with an explicit font set.
///
/// Pipeline:
/// 1. validate the request and settings (no decode happens on failure)
/// 2. decode every image concurrently and wait for all of them
/// 3. draw each cell in input order: image (or placeholder), label band, label
/// 4. draw the title band last
/// 5. encode to PNG
#[tracing::instrument(skip_all, fields(images = request.images.len()))]
pub fn build_collage_with_fonts(
    request: &CollageRequest,
    settings: &CollageSettings,
    decoder: &dyn ImageDecoder,
    fonts: &FontSet,
) -> SatResult<CollageResult> {
    request.validate()?;
    settings.validate()?;

    let grid = GridLayout::new(request.images.len(), settings)?;
    let labeled = request.labeled_images();
    let decoded = decode_all(&labeled, &grid, settings, decoder)?;

    let mut canvas = CpuCanvas::new(grid.canvas(), settings.background())?;
    let mut label_painter = text_painter(fonts.regular.as_ref(), settings.label_font_px, "label");
    let mut cells = Vec::with_capacity(labeled.len());

    for (index, (item, outcome)) in labeled.iter().zip(decoded).enumerate() {
        let image_rect = grid.cell_rect(index);
        let label_band = grid.label_band_rect(index);

        let (label, status) = match outcome {
            Ok(bitmap) => {
                canvas.draw_image(&bitmap, image_rect)?;
                (item.display_timestamp.clone(), CellStatus::Drawn)
            }
            Err(err) => {
                canvas.fill_rect(image_rect, settings.background());
                (
                    format!("{} (decode failed)", item.display_timestamp),
                    CellStatus::Placeholder {
                        reason: err.to_string(),
                    },
                )
            }
        };

        canvas.fill_rect(
            label_band,
            Rgba8::black_with_opacity(settings.label_band_alpha),
        );
        if let Some(painter) = label_painter.as_mut() {
            painter.draw_centered(
                &mut canvas,
                &label,
                image_rect,
                image_rect.y1 - settings.label_baseline_inset,
            )?;
        }

        cells.push(CellReport {
            index,
            file_name: item.image.file_name().to_string(),
            label,
            image_rect,
            label_band,
            status,
        });
    }

    // Title band is the final draw.
    let title = request.title();
    let title_band = grid.title_band_rect();
    canvas.fill_rect(
        title_band,
        Rgba8::black_with_opacity(settings.title_band_alpha),
    );
    if let Some(mut painter) = text_painter(fonts.bold.as_ref(), settings.title_font_px, "title") {
        painter.draw_centered(&mut canvas, &title, title_band, settings.title_baseline)?;
    }

    let frame = canvas.finish();
    let png = encode_png(&frame)?;

    let result = CollageResult {
        png: Arc::from(png),
        width: frame.width,
        height: frame.height,
        title,
        title_band,
        file_name: download_file_name(unix_millis_now()),
        cells,
    };
    tracing::info!(
        file_name = %result.file_name,
        bytes = result.png.len(),
        placeholders = result.failed_cells().count(),
        "collage built"
    );
    Ok(result)
}

/// Fan out one decode task per image and join them all; results keep input order.
fn decode_all(
    labeled: &[LabeledImage],
    grid: &GridLayout,
    settings: &CollageSettings,
    decoder: &dyn ImageDecoder,
) -> SatResult<Vec<SatResult<PreparedImage>>> {
    let pool = build_thread_pool(settings.threads)?;
    let side = grid.cell_pixel_size();

    let decoded = pool.install(|| {
        labeled
            .par_iter()
            .enumerate()
            .map(|(index, item)| {
                let out = decoder.decode_to_size(item.image.bytes(), side, side);
                match &out {
                    Ok(_) => tracing::debug!(index, file = item.image.file_name(), "decoded"),
                    Err(e) => tracing::warn!(
                        index,
                        file = item.image.file_name(),
                        error = %e,
                        "decode failed, drawing placeholder"
                    ),
                }
                out
            })
            .collect::<Vec<_>>()
    });
    Ok(decoded)
}

fn text_painter(
    face: Option<&crate::assets::text::FontFace>,
    size_px: f32,
    role: &str,
) -> Option<TextPainter> {
    let Some(face) = face else {
        tracing::warn!(role, "no font face available, skipping text");
        return None;
    };
    match TextPainter::new(face, size_px, Rgba8::WHITE) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!(role, family = %face.family, error = %e, "font unusable, skipping text");
            None
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> SatResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SatError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SatError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
