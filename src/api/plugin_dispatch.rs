use tracing::trace;

use crate::extensions::{ViewContext, ViewEvent};
use crate::render::Renderer;

use super::ScatterView;

impl<R: Renderer> ScatterView<R> {
    pub(super) fn plugin_context(&self) -> ViewContext {
        ViewContext {
            active_step: self.active_step,
            phase: self.phase,
            mark_count: if self.phase.shows_marks() {
                self.layout.marks.len()
            } else {
                0
            },
            tooltip_visible: self.tooltip.visible,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ViewEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        trace!(?event, plugins = self.plugins.len(), "dispatching view event");
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
