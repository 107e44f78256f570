use crate::core::bar::Bar;
use crate::render::Color;

/// One series of bars sharing a label and colors; bar position is the
/// category index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<String>,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub highlight_fill: Color,
    pub highlight_stroke: Color,
    pub bars: Vec<Bar>,
}

impl Dataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
