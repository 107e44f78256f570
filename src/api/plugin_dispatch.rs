use tracing::trace;

use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            range: self.scale.range(),
            datasets_len: self.datasets.len(),
            categories_len: self.scale.values_count(),
            active_len: self.active.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        trace!(plugins = self.plugins.len(), event = ?event, "dispatch plugin event");
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
