use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{FishError, FishResult};
use crate::render::output::FrameRGBA;
use crate::render::surface::{StrokeStyle, Surface, TextSpec};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};

struct CpuText {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

/// Raster surface backed by a `vello_cpu` render context.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    text: Option<CpuText>,
    skipped_text: usize,
}

impl CpuSurface {
    /// Transparent surface of the canvas size, without text support.
    pub fn new(canvas: Canvas) -> FishResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FishError::validation("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FishError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            text: None,
            skipped_text: 0,
        })
    }

    /// Load a font file used for every text draw.
    pub fn with_font_file(mut self, path: &Path) -> FishResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let engine = TextLayoutEngine::new(&bytes)?;
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.text = Some(CpuText { engine, font });
        Ok(self)
    }

    /// Rasterize everything submitted so far.
    pub fn finish(mut self) -> FrameRGBA {
        if self.skipped_text > 0 {
            tracing::warn!(
                skipped = self.skipped_text,
                "no font file configured; text labels were not drawn"
            );
        }
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

    fn set_color(&mut self, c: Rgba8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_to_paint(image: &image::RgbaImage) -> FishResult<vello_cpu::Image> {
    let w: u16 = image
        .width()
        .try_into()
        .map_err(|_| FishError::render("image width exceeds u16"))?;
    let h: u16 = image
        .height()
        .try_into()
        .map_err(|_| FishError::render("image height exceeds u16"))?;
    let pixels = image
        .pixels()
        .map(|p| {
            let c = Rgba8::rgba(p[0], p[1], p[2], p[3]).to_premul_array();
            vello_cpu::peniko::color::PremulRgba8::from_u8_array(c)
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

impl Surface for CpuSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> FishResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        Ok(())
    }

    fn draw_image(&mut self, rect: Rect, image: &image::RgbaImage) -> FishResult<()> {
        if image.width() == 0 || image.height() == 0 || rect.area() <= 0.0 {
            return Ok(());
        }
        let (iw, ih) = (f64::from(image.width()), f64::from(image.height()));
        let tr = Affine::translate((rect.x0, rect.y0))
            * Affine::scale_non_uniform(rect.width() / iw, rect.height() / ih);

        let paint = image_to_paint(image)?;
        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
        Ok(())
    }

    fn fill_path(
        &mut self,
        path: &BezPath,
        fill: Rgba8,
        stroke: Option<StrokeStyle>,
    ) -> FishResult<()> {
        let cpu_path = bezpath_to_cpu(path);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(fill);
        self.ctx.fill_path(&cpu_path);
        if let Some(s) = stroke
            && s.width > 0.0
        {
            self.set_color(s.color);
            self.ctx
                .set_stroke(vello_cpu::kurbo::Stroke::new(s.width));
            self.ctx.stroke_path(&cpu_path);
        }
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle) -> FishResult<()> {
        if stroke.width <= 0.0 {
            return Ok(());
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(vello_cpu::kurbo::Point::new(from.x, from.y));
        path.line_to(vello_cpu::kurbo::Point::new(to.x, to.y));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(stroke.color);
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
        self.ctx.stroke_path(&path);
        Ok(())
    }

    fn text(&mut self, spec: &TextSpec<'_>) -> FishResult<()> {
        if spec.text.is_empty() {
            return Ok(());
        }
        let Some(text) = self.text.as_mut() else {
            self.skipped_text += 1;
            return Ok(());
        };

        let layout =
            text.engine
                .layout_line(spec.text, spec.size_px as f32, TextBrushRgba8::from(spec.color))?;
        let w = f64::from(layout.width());
        let h = f64::from(layout.height());
        let tr = Affine::translate(spec.anchor.to_vec2())
            * Affine::rotate(-spec.angle_deg.to_radians())
            * Affine::translate((
                -w * spec.align.offset_fraction(),
                -h * spec.baseline.offset_fraction(),
            ));

        self.ctx.set_transform(affine_to_cpu(tr));
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
                self.ctx
                    .glyph_run(&text.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
