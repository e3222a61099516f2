use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ScatterPlugin;
use crate::render::Renderer;

use super::ScatterView;

impl<R: Renderer> ScatterView<R> {
    /// Attaches a plugin. Ids must be non-empty and unique per view; plugins
    /// observe events in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn ScatterPlugin>) -> ChartResult<()> {
        let id = plugin.id();
        if id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(ChartError::InvalidData(format!(
                "plugin `{id}` is already registered on this view"
            )));
        }
        debug!(plugin = id, "plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the plugin with `plugin_id`. Returns `false` when none matched.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "plugin unregistered");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_ids().any(|id| id == plugin_id)
    }

    /// Registered plugin ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.id())
    }
}
