//! Maps engine state to concrete visual styles and applies them.
//!
//! The mapping half is pure (state in, style values out) and covered by
//! unit tests. The `apply_*` half queries the rendered page and writes
//! inline styles; each apply function is idempotent, so re-running one
//! with unchanged state leaves the DOM as it was.

use crate::config;
use crate::utils::dom;

use super::sim::Metrics;

const NAV_SELECTOR: &str = ".nav";
const HERO_VISUAL_SELECTOR: &str = ".hero-visual";
const SYSTEM_PREVIEW_SELECTOR: &str = ".system-preview";
const INDICATOR_SELECTOR: &str = ".indicator";
const VENT_SELECTOR: &str = ".vent";
const SCREEN_LINE_SELECTOR: &str = ".screen-line";

const NAVBAR_BG_OPAQUE: &str = "rgba(28, 28, 30, 0.95)";
const NAVBAR_BG_TRANSLUCENT: &str = "rgba(28, 28, 30, 0.72)";
const NAVBAR_BORDER_OPAQUE: &str = "1px solid rgba(255, 255, 255, 0.15)";
const NAVBAR_BORDER_TRANSLUCENT: &str = "1px solid rgba(255, 255, 255, 0.08)";

const VENT_NOMINAL_COLOR: &str = "#34C759";
const VENT_DEGRADED_COLOR: &str = "#FF9500";

/// Oxygen rate above which every status indicator lights up.
pub const ALL_INDICATORS_OXYGEN_PCT: f64 = 98.0;

/// Indicators that stay lit even when the rate dips.
pub const BASELINE_INDICATOR_COUNT: usize = 2;

/// Vent efficiency threshold separating nominal from degraded colour.
pub const VENT_NOMINAL_EFFICIENCY_PCT: f64 = 85.0;

/// Screen line draws above this render at full opacity.
pub const SCREEN_LINE_LIT_THRESHOLD: f64 = 0.3;

/// Visual style of the fixed navbar, derived from scroll depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Translucent,
    Opaque,
}

impl NavbarState {
    pub fn background(self) -> &'static str {
        match self {
            NavbarState::Translucent => NAVBAR_BG_TRANSLUCENT,
            NavbarState::Opaque => NAVBAR_BG_OPAQUE,
        }
    }

    pub fn border_bottom(self) -> &'static str {
        match self {
            NavbarState::Translucent => NAVBAR_BORDER_TRANSLUCENT,
            NavbarState::Opaque => NAVBAR_BORDER_OPAQUE,
        }
    }
}

/// Navbar style for a given scroll depth. The threshold is exclusive, so
/// sitting exactly on it keeps the translucent style.
pub fn navbar_state(scroll_y: f64) -> NavbarState {
    if scroll_y > config::NAVBAR_SCROLL_THRESHOLD_PX {
        NavbarState::Opaque
    } else {
        NavbarState::Translucent
    }
}

/// Transform offsets for the hero parallax at a given scroll fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffsets {
    pub hero_translate_px: f64,
    pub preview_rotate_deg: f64,
}

impl ParallaxOffsets {
    pub fn hero_transform(&self) -> String {
        format!("translateY({}px)", self.hero_translate_px)
    }

    pub fn preview_transform(&self) -> String {
        format!("rotate({}deg)", self.preview_rotate_deg)
    }
}

/// Offsets for a scroll fraction, clamped to the page range so overscroll
/// bounce cannot push the visuals past their travel.
pub fn parallax_offsets(scroll_fraction: f64) -> ParallaxOffsets {
    let f = scroll_fraction.clamp(0.0, 1.0);
    ParallaxOffsets {
        hero_translate_px: f * config::PARALLAX_TRANSLATE_MAX_PX,
        preview_rotate_deg: f * config::PARALLAX_ROTATE_MAX_DEG,
    }
}

/// Whether the status indicator at `index` should be lit.
pub fn indicator_active(index: usize, oxygen_rate_pct: f64) -> bool {
    oxygen_rate_pct > ALL_INDICATORS_OXYGEN_PCT || index < BASELINE_INDICATOR_COUNT
}

/// Vent colour for the current efficiency reading.
pub fn vent_color(efficiency_pct: f64) -> &'static str {
    if efficiency_pct > VENT_NOMINAL_EFFICIENCY_PCT {
        VENT_NOMINAL_COLOR
    } else {
        VENT_DEGRADED_COLOR
    }
}

/// Opacity of one device screen line for a uniform draw in `[0, 1)`.
pub fn screen_line_opacity(draw: f64) -> &'static str {
    if draw > SCREEN_LINE_LIT_THRESHOLD {
        "1"
    } else {
        "0.3"
    }
}

pub fn apply_navbar(scroll_y: f64) {
    let Some(nav) = dom::query_html(NAV_SELECTOR) else {
        return;
    };
    let state = navbar_state(scroll_y);
    dom::set_style(&nav, "background", state.background());
    dom::set_style(&nav, "border-bottom", state.border_bottom());
}

pub fn apply_parallax(scroll_fraction: f64) {
    let offsets = parallax_offsets(scroll_fraction);
    if let Some(hero) = dom::query_html(HERO_VISUAL_SELECTOR) {
        dom::set_style(&hero, "transform", &offsets.hero_transform());
    }
    if let Some(preview) = dom::query_html(SYSTEM_PREVIEW_SELECTOR) {
        dom::set_style(&preview, "transform", &offsets.preview_transform());
    }
}

/// Lights the indicator row and refreshes the live readouts.
pub fn apply_metrics(metrics: &Metrics) {
    for (index, indicator) in dom::query_all(INDICATOR_SELECTOR).into_iter().enumerate() {
        let list = indicator.class_list();
        if indicator_active(index, metrics.oxygen_rate_pct) {
            let _ = list.add_1("active");
        } else {
            let _ = list.remove_1("active");
        }
    }
    if let Some(readout) = dom::query("[data-metric=\"oxygen\"]") {
        readout.set_text_content(Some(&format!(
            "{}%",
            metrics.oxygen_rate_pct.round() as i64
        )));
    }
    if let Some(readout) = dom::query("[data-metric=\"efficiency\"]") {
        readout.set_text_content(Some(&format!(
            "{}%",
            metrics.efficiency_pct.round() as i64
        )));
    }
}

/// Slow health tick: flicker the device screen lines and recolour vents.
pub fn apply_health(metrics: &Metrics) {
    for line in dom::query_all(SCREEN_LINE_SELECTOR) {
        dom::set_style(&line, "opacity", screen_line_opacity(dom::random_unit()));
    }
    for vent in dom::query_all(VENT_SELECTOR) {
        dom::set_style(&vent, "background", vent_color(metrics.efficiency_pct));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert_eq!(navbar_state(99.0), NavbarState::Translucent);
        assert_eq!(navbar_state(100.0), NavbarState::Translucent);
        assert_eq!(navbar_state(101.0), NavbarState::Opaque);
    }

    #[test]
    fn navbar_styles_differ_between_states() {
        assert_ne!(
            NavbarState::Translucent.background(),
            NavbarState::Opaque.background()
        );
        assert_ne!(
            NavbarState::Translucent.border_bottom(),
            NavbarState::Opaque.border_bottom()
        );
    }

    #[test]
    fn navbar_mapping_is_stable() {
        // Same depth twice yields byte-identical styles, so re-applying
        // on a repeated scroll position rewrites nothing.
        let a = navbar_state(250.0);
        let b = navbar_state(250.0);
        assert_eq!(a.background(), b.background());
        assert_eq!(a.border_bottom(), b.border_bottom());
    }

    #[test]
    fn parallax_travel_is_bounded() {
        let top = parallax_offsets(0.0);
        assert_eq!(top.hero_translate_px, 0.0);
        assert_eq!(top.preview_rotate_deg, 0.0);

        let bottom = parallax_offsets(1.0);
        assert_eq!(bottom.hero_translate_px, 50.0);
        assert_eq!(bottom.preview_rotate_deg, 5.0);

        let overscrolled = parallax_offsets(1.4);
        assert_eq!(overscrolled.hero_translate_px, 50.0);
        let bounced = parallax_offsets(-0.2);
        assert_eq!(bounced.hero_translate_px, 0.0);
    }

    #[test]
    fn parallax_midpoint_transforms_format_cleanly() {
        let mid = parallax_offsets(0.5);
        assert_eq!(mid.hero_transform(), "translateY(25px)");
        assert_eq!(mid.preview_transform(), "rotate(2.5deg)");
    }

    #[test]
    fn indicator_levels_are_discrete() {
        // Above the threshold the whole row lights up.
        for index in 0..4 {
            assert!(indicator_active(index, 99.0));
        }
        // At or below it only the baseline pair stays lit, regardless of
        // how far the rate has fallen.
        for oxygen in [98.0, 96.5, 95.0] {
            assert!(indicator_active(0, oxygen));
            assert!(indicator_active(1, oxygen));
            assert!(!indicator_active(2, oxygen));
            assert!(!indicator_active(3, oxygen));
        }
    }

    #[test]
    fn vent_colour_tracks_efficiency() {
        assert_eq!(vent_color(90.0), VENT_NOMINAL_COLOR);
        assert_eq!(vent_color(85.0), VENT_DEGRADED_COLOR);
        assert_eq!(vent_color(80.0), VENT_DEGRADED_COLOR);
    }

    #[test]
    fn screen_lines_dim_on_low_draws() {
        assert_eq!(screen_line_opacity(0.0), "0.3");
        assert_eq!(screen_line_opacity(0.3), "0.3");
        assert_eq!(screen_line_opacity(0.31), "1");
        assert_eq!(screen_line_opacity(0.999), "1");
    }
}
