use super::{AnimationConfig, Easing, linear_easing};

/// Progress values for one animated transition, one per frame.
///
/// With animation disabled the sequence is the single static frame `1.0`.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrames {
    easing: Easing,
    total: u32,
    emitted: u32,
}

impl AnimationFrames {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        if config.enabled && config.steps > 0 {
            Self {
                easing: config.easing,
                total: config.steps,
                emitted: 0,
            }
        } else {
            Self {
                easing: linear_easing,
                total: 1,
                emitted: 0,
            }
        }
    }
}

impl Iterator for AnimationFrames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.emitted >= self.total {
            return None;
        }
        self.emitted += 1;
        Some((self.easing)(f64::from(self.emitted) / f64::from(self.total)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.emitted) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AnimationFrames {}
