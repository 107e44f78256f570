pub mod bar;
pub mod bar_geometry;
pub mod dataset;
pub mod scale;
pub mod scale_range;
pub mod types;

pub use bar::{Bar, BarKey, BarSeed, StyleSnapshot};
pub use bar_geometry::{BarFrame, BarLayout, BarSpacing};
pub use dataset::Dataset;
pub use scale::{CategoryScale, ScaleOptions, ScaleOverride};
pub use scale_range::{ScaleRange, calculate_scale_range, order_of_magnitude, step_decimal_places};
pub use types::Viewport;
