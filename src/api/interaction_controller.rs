use tracing::{debug, trace};

use crate::extensions::TooltipEntry;
use crate::interaction::{
    BarRef, BarSlice, PointerEvent, PointerEventKind, apply_highlight, locate_bars_at_position,
};
use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Category slice under `(x, y)`, empty when no bar is hit.
    #[must_use]
    pub fn bars_at_position(&self, x: f64, y: f64) -> BarSlice {
        locate_bars_at_position(&self.datasets, x, y)
    }

    /// Makes the slice under the pointer the active set and highlights it.
    pub fn activate_bars(&mut self, event: PointerEvent) -> BarSlice {
        let bars = self.bars_at_position(event.x, event.y);
        self.active.replace(bars.iter().map(|bar| bar.key));
        self.highlight_active_bars();
        debug!(hit = bars.len(), active = self.active.len(), "activate bars");
        self.emit_plugin_event(PluginEvent::ActiveBarsChanged {
            active: self.active.len(),
        });
        bars
    }

    /// Toggles each bar of the slice under the pointer: active bars are
    /// deselected, any other bar replaces the active set.
    pub fn toggle_bars(&mut self, event: PointerEvent) -> BarSlice {
        let bars = self.bars_at_position(event.x, event.y);
        self.active.toggle(bars.iter().map(|bar| bar.key));
        self.highlight_active_bars();
        debug!(hit = bars.len(), active = self.active.len(), "toggle bars");
        self.emit_plugin_event(PluginEvent::ActiveBarsChanged {
            active: self.active.len(),
        });
        bars
    }

    pub fn clear_active_bars(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.active.clear();
        self.highlight_active_bars();
        self.emit_plugin_event(PluginEvent::ActiveBarsChanged { active: 0 });
    }

    /// Tooltip event path: hover highlight plus tooltip content.
    ///
    /// Ignored unless tooltips are enabled and `event.kind` is a configured
    /// trigger. Returns the hovered slice (empty on leave).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> BarSlice {
        let tooltips = &self.config.tooltips;
        if !tooltips.enabled || !tooltips.events.contains(&event.kind) {
            return BarSlice::new();
        }

        let hovered = if event.kind == PointerEventKind::Leave {
            self.interaction.on_pointer_leave();
            BarSlice::new()
        } else {
            let hovered = self.bars_at_position(event.x, event.y);
            self.interaction
                .on_pointer_move(event.x, event.y, hovered.clone());
            hovered
        };
        self.highlight_active_bars();

        trace!(kind = ?event.kind, hovered = hovered.len(), "pointer event");
        let entries = self.tooltip_entries(&hovered);
        self.emit_plugin_event(PluginEvent::TooltipShown { entries });
        hovered
    }

    /// Full highlight pass over active and hovered bars.
    pub(super) fn highlight_active_bars(&mut self) {
        apply_highlight(
            &mut self.datasets,
            &self.active,
            self.interaction.hovered(),
        );
    }

    fn tooltip_entries(&self, bars: &[BarRef]) -> Vec<TooltipEntry> {
        bars.iter()
            .filter_map(|bar_ref| {
                let bar = self.resolve(*bar_ref)?;
                let (top, _) = bar.vertical_extent();
                Some(TooltipEntry {
                    dataset_index: bar_ref.dataset_index,
                    bar_index: bar_ref.bar_index,
                    label: bar.label.clone(),
                    dataset_label: bar.dataset_label.clone(),
                    value: bar.value,
                    fill_color: bar.saved_style().fill_color,
                    x: bar.x,
                    y: top,
                })
            })
            .collect()
    }
}
