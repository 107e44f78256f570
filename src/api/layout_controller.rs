use tracing::debug;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_viewport;
use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Applies a new surface size without rebuilding bar data.
    ///
    /// The scale is refit and every bar is re-based on the new baseline; the
    /// next [`BarChart::draw`] moves bars toward their resized targets.
    pub fn reflow(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = validate_viewport(Viewport::new(width, height))?;
        self.viewport = viewport;
        self.config.viewport = viewport;

        let values = self.all_values();
        self.scale.resize(viewport, &values);
        let base = self.scale.end_point();
        for bar in self.bars_mut() {
            bar.base = base;
        }

        debug!(width, height, end_point = base, "reflow bar chart");
        self.emit_plugin_event(PluginEvent::Resized { width, height });
        Ok(())
    }
}
