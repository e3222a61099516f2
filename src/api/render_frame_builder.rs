use crate::interaction::{TooltipBehavior, TooltipState, lerp};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, FontFamily, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::layout_helpers::{estimate_label_text_width_px, wrap_text_to_width};
use super::{LabelSnapshot, MarkLayout, MarkSnapshot, ScatterView};

const TOOLTIP_PADDING_PX: f64 = 10.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;
const TOOLTIP_HEADER_FONT_PX: f64 = 13.0;
const TOOLTIP_TERM_FONT_PX: f64 = 15.0;
const TOOLTIP_GLOSS_FONT_PX: f64 = 12.0;
const TOOLTIP_CONTEXT_FONT_PX: f64 = 11.0;
const TOOLTIP_LINE_GAP_PX: f64 = 5.0;

impl<R: Renderer> ScatterView<R> {
    /// Materializes the current state into a fresh frame.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.config.viewport);
        let axes = &self.layout.axes;
        for line in &axes.grid {
            frame.push_line(CanvasLayerKind::Grid, *line);
        }
        for line in &axes.lines {
            frame.push_line(CanvasLayerKind::Axis, *line);
        }
        for text in &axes.texts {
            frame.push_text(CanvasLayerKind::Axis, text.clone());
        }

        for (mark, resolved) in self.layout.marks.iter().zip(self.resolve_marks()) {
            frame.push_circle(
                CanvasLayerKind::Marks,
                CirclePrimitive::new(
                    resolved.cx,
                    resolved.cy,
                    resolved.radius,
                    mark.fill.with_alpha(mark.fill.alpha * resolved.opacity),
                ),
            );
        }
        for (label, resolved) in self.layout.labels.iter().zip(self.resolve_labels()) {
            frame.push_text(
                CanvasLayerKind::Labels,
                TextPrimitive::new(
                    label.term.clone(),
                    resolved.x,
                    resolved.y,
                    label.font_size_px,
                    label.color.with_alpha(label.color.alpha * resolved.opacity),
                    TextHAlign::Left,
                )
                .with_font_family(FontFamily::Serif),
            );
        }

        push_tooltip_overlay(&mut frame, &self.tooltip, &self.config.tooltip);
        frame
    }

    /// Marks at their current animated position and radius. Empty while
    /// dormant.
    pub(super) fn resolve_marks(&self) -> Vec<MarkSnapshot> {
        if !self.phase.shows_marks() {
            return Vec::new();
        }
        self.layout
            .marks
            .iter()
            .map(|mark| {
                let (cx, cy, radius) = self.resolve_mark_geometry(mark);
                MarkSnapshot {
                    term: mark.term.clone(),
                    cx,
                    cy,
                    radius,
                    opacity: mark.opacity,
                }
            })
            .collect()
    }

    pub(super) fn resolve_mark_geometry(&self, mark: &MarkLayout) -> (f64, f64, f64) {
        let (mut cx, mut cy, mut radius) = (mark.cx, mark.cy, mark.radius);
        if let Some(timeline) = &self.entrance {
            let progress = timeline.mark_progress();
            let (origin_x, origin_y) = self.layout.entrance_origin;
            cx = lerp(origin_x, mark.cx, progress);
            cy = lerp(origin_y, mark.cy, progress);
            radius = lerp(0.0, mark.radius, progress);
        }
        if let Some(hover_radius) = self.hover.radius_for(&mark.term) {
            radius = hover_radius;
        }
        (cx, cy, radius)
    }

    pub(super) fn resolve_labels(&self) -> Vec<LabelSnapshot> {
        if !self.phase.shows_marks() {
            return Vec::new();
        }
        let opacity = self
            .entrance
            .as_ref()
            .map_or(1.0, |timeline| timeline.label_opacity());
        self.layout
            .labels
            .iter()
            .map(|label| LabelSnapshot {
                term: label.term.clone(),
                x: label.x,
                y: label.y,
                opacity,
            })
            .collect()
    }
}

fn push_tooltip_overlay(frame: &mut RenderFrame, tooltip: &TooltipState, behavior: &TooltipBehavior) {
    if !tooltip.visible {
        return;
    }
    let Some(content) = &tooltip.content else {
        return;
    };

    let left = tooltip.left + TOOLTIP_PADDING_PX;
    let inner_width = (behavior.width_px - 2.0 * TOOLTIP_PADDING_PX).max(TOOLTIP_CONTEXT_FONT_PX);
    let mut texts = Vec::new();

    let mut baseline = tooltip.top + TOOLTIP_PADDING_PX + TOOLTIP_TERM_FONT_PX;
    let mut term_x = left;
    if !content.transliteration.is_empty() {
        texts.push(TextPrimitive::new(
            content.transliteration.clone(),
            left,
            baseline,
            TOOLTIP_HEADER_FONT_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
        term_x += estimate_label_text_width_px(&content.transliteration, TOOLTIP_HEADER_FONT_PX)
            + 0.33 * TOOLTIP_HEADER_FONT_PX;
    }
    texts.push(
        TextPrimitive::new(
            content.term.clone(),
            term_x,
            baseline,
            TOOLTIP_TERM_FONT_PX,
            content.accent_color,
            TextHAlign::Left,
        )
        .with_font_family(FontFamily::Serif),
    );

    if !content.english_gloss.is_empty() {
        baseline += TOOLTIP_GLOSS_FONT_PX + TOOLTIP_LINE_GAP_PX;
        texts.push(TextPrimitive::new(
            content.english_gloss.clone(),
            left,
            baseline,
            TOOLTIP_GLOSS_FONT_PX,
            Color::rgb8(0x66, 0x66, 0x66),
            TextHAlign::Left,
        ));
    }

    let context_lines = wrap_text_to_width(&content.context, TOOLTIP_CONTEXT_FONT_PX, inner_width);
    if !context_lines.is_empty() {
        baseline += 2.0 * TOOLTIP_LINE_GAP_PX;
    }
    for line in context_lines {
        baseline += TOOLTIP_CONTEXT_FONT_PX + 3.0;
        texts.push(TextPrimitive::new(
            line,
            left,
            baseline,
            TOOLTIP_CONTEXT_FONT_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }

    let height = baseline + TOOLTIP_PADDING_PX - tooltip.top;
    frame.push_rect(
        CanvasLayerKind::Overlay,
        RectPrimitive::new(
            tooltip.left,
            tooltip.top,
            behavior.width_px,
            height,
            behavior.background,
        )
        .with_border(1.0, behavior.border_color)
        .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );
    for text in texts {
        frame.push_text(CanvasLayerKind::Overlay, text);
    }
}
