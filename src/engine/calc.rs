//! Demo calculator arithmetic.
//!
//! Pure functions only. The modal component re-derives outputs from the
//! current inputs on every change event, so everything here must be cheap
//! and deterministic.

use std::str::FromStr;

use super::EngineError;

/// Water temperature at which electrolysis efficiency peaks.
pub const OPTIMAL_WATER_TEMP_C: f64 = 15.0;

/// Efficiency lost per degree away from the optimum, in percentage points.
pub const TEMP_PENALTY_PTS_PER_DEG: f64 = 2.0;

/// Floor of the temperature factor, in percentage points.
pub const TEMP_FACTOR_FLOOR_PTS: f64 = 70.0;

/// System efficiency at the optimal temperature.
pub const BASE_EFFICIENCY_PCT: f64 = 85.0;

/// Energy harvested per unit of input power, before activity scaling.
pub const KWH_PER_POWER_UNIT: f64 = 1.67;

/// Lower bound on reported energy generation.
pub const MIN_ENERGY_KWH: f64 = 3.0;

pub const MIN_POWER_KWH: f64 = 1.0;
pub const MAX_POWER_KWH: f64 = 5.0;
pub const MIN_WATER_TEMP_C: f64 = 0.0;
pub const MAX_WATER_TEMP_C: f64 = 30.0;

/// Diver activity level selected in the demo modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    /// Scaling applied to motion-derived quantities.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 0.8,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::High => 1.3,
        }
    }

    /// Value used in the `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low (resting)",
            ActivityLevel::Moderate => "Moderate (swimming)",
            ActivityLevel::High => "High (working)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ActivityLevel::Low),
            "moderate" => Ok(ActivityLevel::Moderate),
            "high" => Ok(ActivityLevel::High),
            other => Err(EngineError::UnknownActivityLevel(other.to_string())),
        }
    }
}

/// The three sliders and selects of the demo modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoInput {
    pub power_kwh: f64,
    pub activity: ActivityLevel,
    pub water_temp_c: f64,
}

impl Default for DemoInput {
    fn default() -> Self {
        Self {
            power_kwh: 3.0,
            activity: ActivityLevel::Moderate,
            water_temp_c: OPTIMAL_WATER_TEMP_C,
        }
    }
}

impl DemoInput {
    /// Returns a copy with power and temperature forced into their slider
    /// ranges. Out-of-range values can only come from a tampered DOM.
    pub fn clamped(self) -> Self {
        Self {
            power_kwh: self.power_kwh.clamp(MIN_POWER_KWH, MAX_POWER_KWH),
            activity: self.activity,
            water_temp_c: self.water_temp_c.clamp(MIN_WATER_TEMP_C, MAX_WATER_TEMP_C),
        }
    }
}

/// Derived quantities shown in the modal output panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoOutputs {
    pub oxygen_production_pct: f64,
    pub energy_generated_kwh: f64,
    pub efficiency_pct: f64,
}

impl DemoOutputs {
    pub fn oxygen_display(&self) -> String {
        format!("{}%", self.oxygen_production_pct.round() as i64)
    }

    pub fn energy_display(&self) -> String {
        format!("{:.1} kWh", self.energy_generated_kwh)
    }

    pub fn efficiency_display(&self) -> String {
        format!("{}%", self.efficiency_pct.round() as i64)
    }
}

/// Temperature factor in percentage points. Kept in points so that the
/// efficiency product stays exact for whole-degree inputs.
fn temp_factor_pts(water_temp_c: f64) -> f64 {
    let penalty = (water_temp_c - OPTIMAL_WATER_TEMP_C).abs() * TEMP_PENALTY_PTS_PER_DEG;
    (100.0 - penalty).max(TEMP_FACTOR_FLOOR_PTS)
}

/// Fraction of peak electrolysis efficiency available at `water_temp_c`.
///
/// Equals 1.0 exactly at [`OPTIMAL_WATER_TEMP_C`] and falls off linearly
/// to a floor of 0.7.
pub fn temp_factor(water_temp_c: f64) -> f64 {
    temp_factor_pts(water_temp_c) / 100.0
}

/// Derives the output panel values from the current inputs.
pub fn compute_demo_outputs(input: &DemoInput) -> DemoOutputs {
    let multiplier = input.activity.multiplier();
    let efficiency_pct = ((BASE_EFFICIENCY_PCT * temp_factor_pts(input.water_temp_c)) / 100.0)
        .min(100.0);
    let energy_generated_kwh =
        (input.power_kwh * KWH_PER_POWER_UNIT * multiplier).max(MIN_ENERGY_KWH);
    let oxygen_production_pct = (efficiency_pct * multiplier).min(100.0);
    DemoOutputs {
        oxygen_production_pct,
        energy_generated_kwh,
        efficiency_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_factor_peaks_at_optimum() {
        assert_eq!(temp_factor(15.0), 1.0);
        assert!(temp_factor(14.0) < 1.0);
        assert!(temp_factor(16.0) < 1.0);
    }

    #[test]
    fn temp_factor_is_floored_in_cold_water() {
        assert_eq!(temp_factor(0.0), 0.7);
        assert_eq!(temp_factor(30.0), 0.7);
        // Past the slider range the floor still holds.
        assert_eq!(temp_factor(-40.0), 0.7);
    }

    #[test]
    fn temp_factor_falls_off_symmetrically() {
        assert_eq!(temp_factor(10.0), temp_factor(20.0));
        assert_eq!(temp_factor(10.0), 0.9);
    }

    #[test]
    fn default_inputs_give_nominal_outputs() {
        let out = compute_demo_outputs(&DemoInput::default());
        assert_eq!(out.efficiency_pct, 85.0);
        assert_eq!(out.oxygen_production_pct, 85.0);
        assert_eq!(out.oxygen_display(), "85%");
        assert_eq!(out.energy_display(), "5.0 kWh");
        assert_eq!(out.efficiency_display(), "85%");
    }

    #[test]
    fn minimum_inputs_in_warm_water_hit_every_floor() {
        let input = DemoInput {
            power_kwh: 1.0,
            activity: ActivityLevel::Low,
            water_temp_c: 30.0,
        };
        let out = compute_demo_outputs(&input);
        // 59.5 * 0.8 = 47.6, rounded up on display.
        assert_eq!(out.oxygen_display(), "48%");
        // 1 * 1.67 * 0.8 = 1.336, lifted to the floor.
        assert_eq!(out.energy_display(), "3.0 kWh");
        assert_eq!(out.efficiency_display(), "60%");
    }

    #[test]
    fn warm_water_degrades_efficiency_to_sixty_percent_display() {
        let input = DemoInput {
            water_temp_c: 30.0,
            ..DemoInput::default()
        };
        let out = compute_demo_outputs(&input);
        assert_eq!(out.efficiency_pct, 59.5);
        assert_eq!(out.efficiency_display(), "60%");
    }

    #[test]
    fn high_activity_scales_energy_and_oxygen() {
        let input = DemoInput {
            activity: ActivityLevel::High,
            ..DemoInput::default()
        };
        let out = compute_demo_outputs(&input);
        // 3 * 1.67 * 1.3
        assert!((out.energy_generated_kwh - 6.513).abs() < 1e-9);
        assert_eq!(out.energy_display(), "6.5 kWh");
        // 85 * 1.3 exceeds the cap.
        assert_eq!(out.oxygen_production_pct, 100.0);
    }

    #[test]
    fn low_activity_at_minimum_power_hits_the_energy_floor() {
        let input = DemoInput {
            power_kwh: 1.0,
            activity: ActivityLevel::Low,
            water_temp_c: 15.0,
        };
        let out = compute_demo_outputs(&input);
        // 1 * 1.67 * 0.8 = 1.336, below the floor.
        assert_eq!(out.energy_generated_kwh, MIN_ENERGY_KWH);
        assert_eq!(out.oxygen_production_pct, 68.0);
    }

    #[test]
    fn oxygen_never_exceeds_one_hundred_percent() {
        for &activity in &ActivityLevel::ALL {
            for temp in 0..=30 {
                for power in 1..=5 {
                    let input = DemoInput {
                        power_kwh: power as f64,
                        activity,
                        water_temp_c: temp as f64,
                    };
                    let out = compute_demo_outputs(&input);
                    assert!(out.oxygen_production_pct <= 100.0);
                    assert!(out.oxygen_production_pct > 0.0);
                    assert!(out.energy_generated_kwh >= MIN_ENERGY_KWH);
                }
            }
        }
    }

    #[test]
    fn clamping_restores_slider_ranges() {
        let input = DemoInput {
            power_kwh: 9.0,
            activity: ActivityLevel::Moderate,
            water_temp_c: -5.0,
        };
        let clamped = input.clamped();
        assert_eq!(clamped.power_kwh, MAX_POWER_KWH);
        assert_eq!(clamped.water_temp_c, MIN_WATER_TEMP_C);
    }

    #[test]
    fn activity_levels_round_trip_through_select_values() {
        for &level in &ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().ok(), Some(level));
        }
        assert!("sprinting".parse::<ActivityLevel>().is_err());
    }
}
