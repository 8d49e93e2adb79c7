use std::sync::Arc;

use crate::{
    assets::{
        decode::PreparedImage,
        text::{FontFace, TextBrushRgba8, TextLayoutEngine},
    },
    foundation::{
        core::{Affine, Canvas, Rect, Rgba8},
        error::{SatError, SatResult},
    },
};

/// Finished canvas pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` holds premultiplied alpha.
    pub premultiplied: bool,
}

/// CPU drawing surface for one collage build.
///
/// Draw calls are recorded in painter's order and rasterized once by [`CpuCanvas::finish`].
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuCanvas {
    /// New canvas filled with `background`.
    pub fn new(canvas: Canvas, background: Rgba8) -> SatResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SatError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SatError::render("canvas height exceeds u16"))?;

        let mut out = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        };
        out.fill_rect(canvas.rect(), background);
        Ok(out)
    }

    /// Fill `rect` with a straight-alpha color.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Draw `image` stretched to cover `rect` exactly.
    pub fn draw_image(&mut self, image: &PreparedImage, rect: Rect) -> SatResult<()> {
        let pixmap =
            image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        let (w, h) = (f64::from(image.width), f64::from(image.height));
        let transform = Affine::translate((rect.x0, rect.y0))
            * Affine::scale_non_uniform(rect.width() / w, rect.height() / h);

        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    /// Draw a shaped single-line layout with its left edge at `x` and its first baseline at
    /// `baseline_y`.
    pub fn draw_layout(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        x: f64,
        baseline_y: f64,
    ) {
        let Some(first) = layout.lines().next() else {
            return;
        };
        let dy = baseline_y - f64::from(first.metrics().baseline);

        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, dy)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                // Glyph ids index the face the shaper picked for this run.
                self.ctx
                    .glyph_run(run.run().font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Rasterize every recorded draw and read the pixels back.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

/// Shapes and draws centered text lines with one font face.
pub struct TextPainter {
    engine: TextLayoutEngine,
    size_px: f32,
    brush: TextBrushRgba8,
}

impl TextPainter {
    /// Painter drawing `color` text at `size_px` with `face`.
    pub fn new(face: &FontFace, size_px: f32, color: Rgba8) -> SatResult<Self> {
        let engine = TextLayoutEngine::new(face)?;
        Ok(Self {
            engine,
            size_px,
            brush: TextBrushRgba8 {
                r: color.r,
                g: color.g,
                b: color.b,
                a: color.a,
            },
        })
    }

    /// Draw `text` horizontally centered in `[span.x0, span.x1]` with its baseline at
    /// `baseline_y`.
    pub fn draw_centered(
        &mut self,
        canvas: &mut CpuCanvas,
        text: &str,
        span: Rect,
        baseline_y: f64,
    ) -> SatResult<()> {
        let layout =
            self.engine
                .layout_centered(text, self.size_px, self.brush, span.width() as f32)?;
        canvas.draw_layout(&layout, span.x0, baseline_y);
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> SatResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SatError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SatError::render("image height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(SatError::render("image must be non-empty"));
    }
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(SatError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
