use std::io::Cursor;

use base64::Engine as _;

use crate::config::plot::FontSpec;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{FishError, FishResult};
use crate::render::surface::{StrokeStyle, Surface, TextAnchor, TextBaseline, TextSpec};

/// Vector surface that accumulates SVG elements.
pub struct SvgSurface {
    width: u32,
    height: u32,
    family: String,
    bold: bool,
    body: String,
}

impl SvgSurface {
    /// Empty document of the canvas size. Text uses the family and weight of `font`.
    pub fn new(canvas: Canvas, font: &FontSpec) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            family: font.family.clone(),
            bold: font.bold,
            body: String::new(),
        }
    }

    /// Close the document and return the SVG text.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        ));
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    // Zeros first, then the dot: "-0.000" becomes "-0", never "-".
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn paint_attrs(kind: &str, c: Rgba8) -> String {
    if c.a == 255 {
        format!("{kind}=\"{}\"", c.to_hex_rgb())
    } else {
        format!(
            "{kind}=\"{}\" {kind}-opacity=\"{}\"",
            c.to_hex_rgb(),
            num(c.opacity())
        )
    }
}

fn stroke_attrs(stroke: Option<StrokeStyle>) -> String {
    match stroke {
        Some(s) if s.width > 0.0 => format!(
            "{} stroke-width=\"{}\" stroke-linejoin=\"round\"",
            paint_attrs("stroke", s.color),
            num(s.width)
        ),
        _ => "stroke=\"none\"".to_owned(),
    }
}

/// Escape text for XML content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) -> FishResult<()> {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            paint_attrs("fill", color)
        ));
        Ok(())
    }

    fn draw_image(&mut self, rect: Rect, image: &image::RgbaImage) -> FishResult<()> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| FishError::render(format!("encode embedded png: {e}")))?;
        let data = base64::engine::general_purpose::STANDARD.encode(&png);
        self.body.push_str(&format!(
            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" preserveAspectRatio=\"none\" \
             xlink:href=\"data:image/png;base64,{data}\"/>\n",
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
        ));
        Ok(())
    }

    fn fill_path(
        &mut self,
        path: &BezPath,
        fill: Rgba8,
        stroke: Option<StrokeStyle>,
    ) -> FishResult<()> {
        self.body.push_str(&format!(
            "<path d=\"{}\" {} {}/>\n",
            path.to_svg(),
            paint_attrs("fill", fill),
            stroke_attrs(stroke)
        ));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: StrokeStyle) -> FishResult<()> {
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>\n",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            stroke_attrs(Some(stroke))
        ));
        Ok(())
    }

    fn text(&mut self, text: &TextSpec<'_>) -> FishResult<()> {
        if text.text.is_empty() {
            return Ok(());
        }
        let anchor = match text.align {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let baseline = match text.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "central",
            TextBaseline::Bottom => "auto",
        };
        let (x, y) = (num(text.anchor.x), num(text.anchor.y));
        let rotate = if text.angle_deg != 0.0 {
            format!(" transform=\"rotate({} {x} {y})\"", num(-text.angle_deg))
        } else {
            String::new()
        };
        self.body.push_str(&format!(
            "<text x=\"{x}\" y=\"{y}\" font-family=\"{}\" font-weight=\"{}\" font-size=\"{}\" \
             {} text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"{rotate}>{}</text>\n",
            escape_xml(&self.family),
            if self.bold { "bold" } else { "normal" },
            num(text.size_px),
            paint_attrs("fill", text.color),
            escape_xml(text.text)
        ));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
