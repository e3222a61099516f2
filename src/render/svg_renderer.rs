use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LineStrokeStyle, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

/// Serializes frames into standalone SVG documents.
///
/// Each `render` call replaces the previous document; the renderer never
/// accumulates content across passes.
#[derive(Debug)]
pub struct SvgRenderer {
    background: Option<Color>,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: None,
            document: String::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// The document produced by the last successful render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_document(&self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::with_capacity(4096);
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        if let Some(background) = self.background {
            write!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
                fill_attrs(background)
            )?;
        }

        for layer in &frame.layers {
            if layer.is_empty() {
                continue;
            }
            write!(out, r#"<g class="{}">"#, layer_class(layer.kind))?;
            for rect in &layer.rects {
                write_rect(&mut out, rect)?;
            }
            for line in &layer.lines {
                write_line(&mut out, line)?;
            }
            for circle in &layer.circles {
                write_circle(&mut out, circle)?;
            }
            for text in &layer.texts {
                write_text(&mut out, text)?;
            }
            out.push_str("</g>");
        }

        out.push_str("</svg>");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = self
            .write_document(frame)
            .map_err(|err| ChartError::Backend(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn layer_class(kind: crate::render::CanvasLayerKind) -> &'static str {
    use crate::render::CanvasLayerKind;
    match kind {
        CanvasLayerKind::Grid => "grid",
        CanvasLayerKind::Axis => "axis",
        CanvasLayerKind::Marks => "marks",
        CanvasLayerKind::Labels => "labels",
        CanvasLayerKind::Overlay => "overlay",
    }
}

fn fill_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            r#" fill="{}" fill-opacity="{}""#,
            color.to_hex_rgb(),
            color.alpha
        )
    } else {
        format!(r#" fill="{}""#, color.to_hex_rgb())
    }
}

fn stroke_attrs(color: Color, width: f64) -> String {
    let mut attrs = format!(r#" stroke="{}" stroke-width="{width}""#, color.to_hex_rgb());
    if color.alpha < 1.0 {
        attrs.push_str(&format!(r#" stroke-opacity="{}""#, color.alpha));
    }
    attrs
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        fill_attrs(rect.fill_color)
    )?;
    if rect.corner_radius > 0.0 {
        write!(out, r#" rx="{}""#, rect.corner_radius)?;
    }
    if rect.border_width > 0.0 {
        out.push_str(&stroke_attrs(rect.border_color, rect.border_width));
    }
    out.push_str("/>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        stroke_attrs(line.color, line.stroke_width)
    )?;
    if let LineStrokeStyle::Dashed { on_px, off_px } = line.stroke_style {
        write!(out, r#" stroke-dasharray="{on_px} {off_px}""#)?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
        circle.cx,
        circle.cy,
        circle.radius,
        fill_attrs(circle.fill_color)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{anchor}"{}"#,
        text.x,
        text.y,
        text.font_size_px,
        escape_xml(text.font_family.css_name()),
        fill_attrs(text.color)
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            text.rotation_deg, text.x, text.y
        )?;
    }
    write!(out, ">{}</text>", escape_xml(&text.text))
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup_characters_and_keeps_greek() {
        assert_eq!(escape_xml("οἶνοψ <sea> & \"wine\""), "οἶνοψ &lt;sea&gt; &amp; &quot;wine&quot;");
    }
}
