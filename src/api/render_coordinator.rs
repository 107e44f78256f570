use tracing::trace;

use crate::core::BarLayout;
use crate::error::ChartResult;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::animation::AnimationFrames;
use super::validation::validate_progress;
use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Draws one frame.
    ///
    /// Every bar is moved `progress` of the way from its saved frame to its
    /// target for the current scale and dataset count, then the axes and
    /// bars are handed to the renderer. Repeating a progress value
    /// reproduces the same frame; `1.0` is the settled, static layout.
    pub fn draw(&mut self, progress: f64) -> ChartResult<()> {
        let progress = validate_progress(progress)?;
        self.transition_bars(progress);
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        trace!(progress, bars = frame.bars.len(), "draw bar chart");
        self.emit_plugin_event(PluginEvent::Rendered { progress });
        Ok(())
    }

    /// Draws one frame straight onto a host cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        progress: f64,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let progress = validate_progress(progress)?;
        self.transition_bars(progress);
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered { progress });
        Ok(())
    }

    /// Progress sequence for animating the pending transition.
    #[must_use]
    pub fn animation_frames(&self) -> AnimationFrames {
        AnimationFrames::new(self.config.animation)
    }

    /// Draws every frame of the pending transition back to back.
    pub fn draw_animated(&mut self) -> ChartResult<()> {
        for progress in self.animation_frames() {
            self.draw(progress)?;
        }
        Ok(())
    }

    pub(super) fn first_frame_progress(&self) -> f64 {
        self.animation_frames().next().unwrap_or(1.0)
    }

    fn transition_bars(&mut self, progress: f64) {
        let dataset_count = self.datasets.len();
        let base = self.scale.end_point();
        let layout = BarLayout::new(&self.scale, self.config.bar_spacing());
        for (dataset_index, dataset) in self.datasets.iter_mut().enumerate() {
            for (bar_index, bar) in dataset.bars.iter_mut().enumerate() {
                bar.base = base;
                let target = layout.target(dataset_count, dataset_index, bar_index, bar.value);
                bar.transition(target, progress);
            }
        }
    }
}
