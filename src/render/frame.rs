use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{
    CanvasLayerKind, CirclePrimitive, LayerPrimitives, LinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Backend-agnostic scene for one draw pass.
///
/// Every redraw builds a fresh frame; backends clear the surface before
/// painting it, so nothing from a previous pass survives.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        if let Some(index) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[index];
        }
        self.layers.push(LayerPrimitives::empty(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn with_line(mut self, kind: CanvasLayerKind, line: LinePrimitive) -> Self {
        self.push_line(kind, line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, kind: CanvasLayerKind, circle: CirclePrimitive) -> Self {
        self.push_circle(kind, circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: CanvasLayerKind, text: TextPrimitive) -> Self {
        self.push_text(kind, text);
        self
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
