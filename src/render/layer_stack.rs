use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Paint layers of one scatter view, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Marks,
    Labels,
    Overlay,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Grid,
        Self::Axis,
        Self::Marks,
        Self::Labels,
        Self::Overlay,
    ];
}

/// Primitives of a single layer.
///
/// Backends paint rects, then lines, then circles, then texts within a
/// layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
