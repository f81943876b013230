//! Element-local interaction effects.
//!
//! These are stateless one-shot effects fired from component callbacks:
//! card lift and ripple, CTA press feedback, suit component pulses and
//! tooltips, and the feature-to-diagram highlight link. Transient nodes
//! (ripples, tooltips) clean themselves up with fire-and-forget timers.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;
use crate::utils::dom;

/// Maps a feature card id to the part of the system diagram it explains.
pub const FEATURE_HIGHLIGHTS: &[(&str, &str)] = &[
    ("intake", ".flow-input"),
    ("electrolysis", ".unit-main"),
    ("transfer", ".processing-flows"),
    ("harvesting", ".suit-component.piezo"),
    ("cogeneration", ".unit-vents"),
    ("monitoring", ".device-screen"),
];

const CARD_LIFT_TRANSFORM: &str = "translateY(-12px) scale(1.02)";
const CARD_LIFT_SHADOW: &str = "0 20px 40px rgba(0, 122, 255, 0.3)";
const HIGHLIGHT_SHADOW: &str = "0 0 20px rgba(0, 122, 255, 0.8)";
const HIGHLIGHT_TRANSFORM: &str = "scale(1.1)";
const TOOLTIP_GAP_PX: f64 = 10.0;

/// Diagram selector for a feature id, if the id is known.
pub fn highlight_selector(feature_id: &str) -> Option<&'static str> {
    FEATURE_HIGHLIGHTS
        .iter()
        .find(|(id, _)| *id == feature_id)
        .map(|(_, selector)| *selector)
}

/// Size and placement of a click ripple inside a card of the given
/// dimensions: a square covering the card, centred on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size_px: f64,
    pub left_px: f64,
    pub top_px: f64,
}

pub fn ripple_geometry(card_width: f64, card_height: f64) -> RippleGeometry {
    let size_px = card_width.max(card_height);
    RippleGeometry {
        size_px,
        left_px: card_width / 2.0 - size_px / 2.0,
        top_px: card_height / 2.0 - size_px / 2.0,
    }
}

/// Lifts a feature card on pointer entry.
pub fn card_hover(card: &HtmlElement) {
    dom::set_style(card, "transform", CARD_LIFT_TRANSFORM);
    dom::set_style(card, "box-shadow", CARD_LIFT_SHADOW);
}

/// Returns a card to rest on pointer exit.
pub fn card_leave(card: &HtmlElement) {
    dom::set_style(card, "transform", "translateY(0) scale(1)");
    dom::clear_style(card, "box-shadow");
}

/// Glows the diagram element a hovered feature card refers to. Unknown
/// ids and missing diagram elements are silent no-ops.
pub fn highlight_feature(feature_id: &str) {
    let Some(selector) = highlight_selector(feature_id) else {
        return;
    };
    let Some(el) = dom::query_html(selector) else {
        return;
    };
    dom::set_style(&el, "transition", "all 0.3s ease");
    dom::set_style(&el, "box-shadow", HIGHLIGHT_SHADOW);
    dom::set_style(&el, "transform", HIGHLIGHT_TRANSFORM);
}

/// Clears every diagram highlight.
pub fn clear_highlights() {
    for (_, selector) in FEATURE_HIGHLIGHTS {
        if let Some(el) = dom::query_html(selector) {
            dom::clear_style(&el, "box-shadow");
            dom::clear_style(&el, "transform");
        }
    }
}

/// Spawns a one-shot ripple inside a clicked card. The ripple removes
/// itself once its animation has finished.
pub fn spawn_ripple(card: &HtmlElement) {
    let Some(doc) = dom::document() else {
        return;
    };
    let rect = card.get_bounding_client_rect();
    let geometry = ripple_geometry(rect.width(), rect.height());
    let Ok(ripple) = doc.create_element("div") else {
        return;
    };
    ripple.set_class_name("ripple");
    if let Ok(ripple) = ripple.dyn_into::<HtmlElement>() {
        dom::set_style(&ripple, "width", &format!("{}px", geometry.size_px));
        dom::set_style(&ripple, "height", &format!("{}px", geometry.size_px));
        dom::set_style(&ripple, "left", &format!("{}px", geometry.left_px));
        dom::set_style(&ripple, "top", &format!("{}px", geometry.top_px));
        let _ = card.append_child(&ripple);
        Timeout::new(config::RIPPLE_LIFETIME_MS, move || {
            ripple.remove();
        })
        .forget();
    }
}

/// Presses a CTA button down briefly.
pub fn press_button(button: &HtmlElement) {
    dom::set_style(button, "transform", "scale(0.95)");
    let button = button.clone();
    Timeout::new(config::BUTTON_PRESS_RESET_MS, move || {
        dom::set_style(&button, "transform", "scale(1)");
    })
    .forget();
}

/// Briefly accelerates a clicked suit component's pulse ring, then
/// settles it back to the idle rate.
pub fn pulse_component(component: &HtmlElement) {
    let Some(pulse) = component
        .query_selector(".component-pulse")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    dom::set_style(&pulse, "animation", "componentPulse 0.5s ease-in-out");
    Timeout::new(config::COMPONENT_PULSE_MS, move || {
        dom::set_style(&pulse, "animation", "componentPulse 2s ease-in-out infinite");
    })
    .forget();
}

/// Shows the floating tooltip for a suit component, positioned above it.
/// Components without a `data-tooltip` attribute show nothing.
pub fn show_tooltip(component: &HtmlElement) {
    let Some(text) = component.get_attribute("data-tooltip") else {
        return;
    };
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(tooltip) = doc.create_element("div") else {
        return;
    };
    tooltip.set_class_name("system-tooltip");
    tooltip.set_text_content(Some(&text));
    let Ok(tooltip) = tooltip.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = body.append_child(&tooltip);

    // Placement needs the tooltip's own size, so measure after insertion.
    let rect = component.get_bounding_client_rect();
    let width = f64::from(tooltip.offset_width());
    let height = f64::from(tooltip.offset_height());
    let left = rect.left() + rect.width() / 2.0 - width / 2.0;
    let top = rect.top() - height - TOOLTIP_GAP_PX;
    dom::set_style(&tooltip, "left", &format!("{left}px"));
    dom::set_style(&tooltip, "top", &format!("{top}px"));
}

/// Removes any visible component tooltips.
pub fn hide_tooltips() {
    for tooltip in dom::query_all(".system-tooltip") {
        tooltip.remove();
    }
}

/// Offsets the diagram's flow and pulse animations so parallel elements
/// animate out of phase instead of in lockstep.
pub fn stagger_flow_animations() {
    for (index, connection) in dom::query_all(".connection").into_iter().enumerate() {
        dom::set_style(
            &connection,
            "animation-delay",
            &format!("{}s", index as f64 * 0.5),
        );
    }
    for (index, pulse) in dom::query_all(".component-pulse").into_iter().enumerate() {
        dom::set_style(
            &pulse,
            "animation-delay",
            &format!("{}s", index as f64 * 0.3),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_id_maps_to_a_diagram_selector() {
        let ids = [
            "intake",
            "electrolysis",
            "transfer",
            "harvesting",
            "cogeneration",
            "monitoring",
        ];
        for id in ids {
            assert!(highlight_selector(id).is_some(), "missing selector for {id}");
        }
    }

    #[test]
    fn unknown_feature_ids_have_no_selector() {
        assert_eq!(highlight_selector("warp-drive"), None);
        assert_eq!(highlight_selector(""), None);
    }

    #[test]
    fn ripple_covers_the_longer_card_edge() {
        let g = ripple_geometry(300.0, 180.0);
        assert_eq!(g.size_px, 300.0);
        assert_eq!(g.left_px, 0.0);
        assert_eq!(g.top_px, -60.0);

        let tall = ripple_geometry(180.0, 300.0);
        assert_eq!(tall.size_px, 300.0);
        assert_eq!(tall.left_px, -60.0);
        assert_eq!(tall.top_px, 0.0);
    }

    #[test]
    fn square_cards_centre_the_ripple_exactly() {
        let g = ripple_geometry(200.0, 200.0);
        assert_eq!(g.size_px, 200.0);
        assert_eq!(g.left_px, 0.0);
        assert_eq!(g.top_px, 0.0);
    }
}
