use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::BarChart;

impl<R: Renderer> BarChart<R> {
    /// Adds an observer. Ids must be non-empty and unique per chart.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(ChartError::InvalidData(format!(
                "plugin `{id}` is already registered"
            )));
        }
        debug!(plugin = id, "register chart plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Removes the plugin registered under `plugin_id`; `false` if none was.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "unregister chart plugin");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }
}
