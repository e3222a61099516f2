mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, LayerPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontFamily, LinePrimitive, LineStrokeStyle, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_renderer::SvgRenderer;
pub(crate) use svg_renderer::escape_xml;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, clear their surface
/// and paint it. Layout, animation and interaction never reach the backend.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
