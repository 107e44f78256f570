mod active_bars;
mod highlight;

pub use active_bars::ActiveBars;
pub use highlight::apply_highlight;
pub use hit_test::{BarRef, BarSlice, locate_bars_at_position};

use serde::{Deserialize, Serialize};

/// Pointer trigger kinds delivered by the host event binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Move,
    Click,
    Leave,
    TouchStart,
    TouchMove,
}

/// Pointer event already normalized to drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    #[must_use]
    pub fn click(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Click, x, y)
    }

    #[must_use]
    pub fn leave() -> Self {
        Self::new(PointerEventKind::Leave, 0.0, 0.0)
    }
}

/// Pointer tracking plus the bars currently under the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    cursor: Option<(f64, f64)>,
    hovered: BarSlice,
}

impl InteractionState {
    /// Last pointer position inside the surface, `None` after leave.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hovered(&self) -> &BarSlice {
        &self.hovered
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered: BarSlice) {
        self.cursor = Some((x, y));
        self.hovered = hovered;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered.clear();
    }

    pub fn clear_hovered(&mut self) {
        self.hovered.clear();
    }
}
