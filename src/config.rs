/// Sample count per curve used when nothing else is configured.
pub const CURVE_SAMPLES: usize = 20;

/// Engine tuning. Curve resolution is the only accuracy knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Points sampled per cubic or quadratic curve; arcs get one more so
    /// both ends are included.
    pub curve_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            curve_samples: CURVE_SAMPLES,
        }
    }
}

impl EngineConfig {
    /// Config with `curve_samples` clamped to at least 1.
    pub fn with_curve_samples(curve_samples: usize) -> Self {
        if curve_samples == 0 {
            log::warn!("curve sample count must be at least 1, using 1");
        }
        Self {
            curve_samples: curve_samples.max(1),
        }
    }
}
