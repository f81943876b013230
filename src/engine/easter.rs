//! Bubble-storm easter egg.
//!
//! Fired when a hidden trigger word is typed. Purely decorative: a
//! caption spins in, the page sways and hue-shifts, and a bubble emitter
//! runs for ten seconds. Every handle is fire-and-forget; each spawned
//! node removes itself when its animation is over.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;
use crate::utils::dom;

const PAGE_EFFECTS: &str = "hueShift 10s linear, sway 0.5s ease-in-out infinite";

pub fn activate(trigger: &str) {
    log!(format!("dive mode engaged ({trigger})"));
    spawn_caption();
    set_page_effects(PAGE_EFFECTS);

    let spawner: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    *spawner.borrow_mut() = Some(Interval::new(
        config::EASTER_SPAWN_INTERVAL_MS,
        spawn_bubble_wave,
    ));

    let stop = spawner.clone();
    Timeout::new(config::EASTER_DURATION_MS, move || {
        stop.borrow_mut().take();
        set_page_effects("");
    })
    .forget();
}

fn spawn_caption() {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(caption) = doc.create_element("div") else {
        return;
    };
    caption.set_class_name("dive-caption");
    caption.set_text_content(Some("🫧 DIVE MODE 🫧"));
    if let Ok(caption) = caption.dyn_into::<HtmlElement>() {
        let hue = (dom::random_unit() * 360.0).floor();
        dom::set_style(&caption, "color", &format!("hsl({hue}, 80%, 60%)"));
        let _ = body.append_child(&caption);
        Timeout::new(config::EASTER_ITEM_LIFETIME_MS, move || {
            caption.remove();
        })
        .forget();
    }
}

fn set_page_effects(animation: &str) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        dom::set_style(&body, "animation", animation);
    }
    if let Some(root) = dom::document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        dom::set_style(&root, "animation", animation);
    }
}

fn spawn_bubble_wave() {
    for _ in 0..config::EASTER_BUBBLES_PER_WAVE {
        spawn_bubble();
    }
}

fn spawn_bubble() {
    let Some(win) = dom::window() else {
        return;
    };
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let viewport_width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let Ok(bubble) = doc.create_element("div") else {
        return;
    };
    bubble.set_class_name("bubble");
    bubble.set_text_content(Some("🫧"));
    if let Ok(bubble) = bubble.dyn_into::<HtmlElement>() {
        let left = dom::random_unit() * viewport_width;
        let size = 20.0 + dom::random_unit() * 40.0;
        let rise_secs = 4.0 + dom::random_unit() * 3.0;
        dom::set_style(&bubble, "left", &format!("{left}px"));
        dom::set_style(&bubble, "font-size", &format!("{size}px"));
        dom::set_style(&bubble, "animation-duration", &format!("{rise_secs}s"));
        let _ = body.append_child(&bubble);
        Timeout::new(config::EASTER_ITEM_LIFETIME_MS, move || {
            bubble.remove();
        })
        .forget();
    }
}
