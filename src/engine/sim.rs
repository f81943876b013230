//! Simulated live system metrics.
//!
//! A periodic tick nudges the headline numbers with bounded jitter so the
//! page reads as a live console. Random draws are passed in by the caller,
//! which keeps this module deterministic under test.

/// Base value the oxygen jitter oscillates above.
pub const OXYGEN_JITTER_BASE_PCT: f64 = 95.0;

/// Base value the efficiency jitter oscillates above.
pub const EFFICIENCY_JITTER_BASE_PCT: f64 = 80.0;

/// Width of both jitter bands, in percentage points.
pub const JITTER_SPAN_PCT: f64 = 10.0;

/// Headline metrics shown in the hero and system panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub power_consumption_kwh: f64,
    pub power_generation_kwh: f64,
    pub oxygen_rate_pct: f64,
    pub efficiency_pct: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            power_consumption_kwh: 3.0,
            power_generation_kwh: 5.0,
            oxygen_rate_pct: 100.0,
            efficiency_pct: 85.0,
        }
    }
}

impl Metrics {
    /// One jitter tick. Both draws are uniform in `[0, 1)`; the results are
    /// clamped so rates stay within `[0, 100]` whatever the draw.
    pub fn apply_jitter(&mut self, oxygen_draw: f64, efficiency_draw: f64) {
        self.oxygen_rate_pct =
            (OXYGEN_JITTER_BASE_PCT + oxygen_draw * JITTER_SPAN_PCT).min(100.0);
        self.efficiency_pct =
            (EFFICIENCY_JITTER_BASE_PCT + efficiency_draw * JITTER_SPAN_PCT).min(100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_inside_band() {
        let mut m = Metrics::default();
        for i in 0..=10 {
            let draw = f64::from(i) / 10.0;
            m.apply_jitter(draw, draw);
            assert!(m.oxygen_rate_pct >= OXYGEN_JITTER_BASE_PCT);
            assert!(m.oxygen_rate_pct <= 100.0);
            assert!(m.efficiency_pct >= EFFICIENCY_JITTER_BASE_PCT);
            assert!(m.efficiency_pct <= 100.0);
        }
    }

    #[test]
    fn oxygen_caps_at_one_hundred() {
        let mut m = Metrics::default();
        m.apply_jitter(0.99, 0.99);
        assert_eq!(m.oxygen_rate_pct, 100.0);
        assert!(m.efficiency_pct < 90.0);
    }

    #[test]
    fn power_figures_are_untouched_by_jitter() {
        let mut m = Metrics::default();
        m.apply_jitter(0.5, 0.5);
        assert_eq!(m.power_consumption_kwh, 3.0);
        assert_eq!(m.power_generation_kwh, 5.0);
    }
}
