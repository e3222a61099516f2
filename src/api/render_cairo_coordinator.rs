use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

use super::ScatterView;

impl<R: Renderer + CairoContextRenderer> ScatterView<R> {
    /// Paints the current state on an external Cairo context, e.g. inside a
    /// GTK draw callback.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
