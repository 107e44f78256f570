use crate::core::Dataset;

use super::{ActiveBars, BarRef};

/// Full highlight pass: every bar goes back to its saved style, then bars
/// that are active or hovered take their highlight colors.
///
/// Only colors change; geometry is left alone.
pub fn apply_highlight(datasets: &mut [Dataset], active: &ActiveBars, hovered: &[BarRef]) {
    for bar in datasets.iter_mut().flat_map(|dataset| dataset.bars.iter_mut()) {
        let lit = active.contains(bar.key) || hovered.iter().any(|entry| entry.key == bar.key);
        if lit {
            bar.highlight();
        } else {
            bar.restore_style();
        }
    }
}
