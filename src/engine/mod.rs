//! The page interaction engine.
//!
//! Mounted once when the landing page renders, the engine owns every
//! long-lived browser-side process: the throttled scroll listener, the
//! keystroke listener, the reveal observer and both metric tick timers.
//! Everything it addresses in the rendered tree is found by structural
//! query, and every query miss is a silent no-op, so markup edits and
//! engine updates can ship independently.
//!
//! [`Engine::teardown`] (or dropping the value) detaches the listeners
//! and cancels the timers, leaving nothing running.

pub mod calc;
pub mod dispatch;
pub mod easter;
pub mod keys;
pub mod reveal;
pub mod scroll;
pub mod sim;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::{log, warn};
use gloo_timers::callback::{Interval, Timeout};
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::config;
use crate::utils::dom::{self, ListenerHandle};

use self::keys::KeyBuffer;
use self::reveal::RevealBinding;
use self::scroll::{ScrollThrottle, ThrottleDecision};
use self::sim::Metrics;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown activity level: {0:?}")]
    UnknownActivityLevel(String),
}

/// Styles for the nodes the engine creates at runtime (ripples, tooltips
/// and easter egg decorations), injected into the document head on mount.
const ENGINE_CSS: &str = r#"
.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(0, 122, 255, 0.35);
    transform: scale(0);
    animation: rippleExpand 0.6s ease-out;
    pointer-events: none;
}

@keyframes rippleExpand {
    to {
        transform: scale(2.5);
        opacity: 0;
    }
}

.system-tooltip {
    position: fixed;
    background: rgba(28, 28, 30, 0.95);
    border: 1px solid rgba(255, 255, 255, 0.15);
    color: #f5f5f7;
    padding: 8px 14px;
    border-radius: 8px;
    font-size: 0.85rem;
    white-space: nowrap;
    z-index: 10000;
    pointer-events: none;
    animation: fadeInUp 0.2s ease-out;
}

@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(6px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

.dive-caption {
    position: fixed;
    top: 40%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: 3rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    z-index: 10001;
    pointer-events: none;
    animation: captionSpin 3s ease-in-out 3;
}

@keyframes captionSpin {
    0% {
        transform: translate(-50%, -50%) rotate(0deg) scale(0.6);
    }
    50% {
        transform: translate(-50%, -50%) rotate(180deg) scale(1.2);
    }
    100% {
        transform: translate(-50%, -50%) rotate(360deg) scale(1);
    }
}

.bubble {
    position: fixed;
    bottom: -80px;
    z-index: 10000;
    pointer-events: none;
    animation-name: bubbleRise;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}

@keyframes bubbleRise {
    to {
        transform: translateY(-120vh);
    }
}

@keyframes hueShift {
    from {
        filter: hue-rotate(0deg);
    }
    to {
        filter: hue-rotate(360deg);
    }
}

@keyframes sway {
    0%, 100% {
        transform: translateX(0);
    }
    25% {
        transform: translateX(-4px);
    }
    75% {
        transform: translateX(4px);
    }
}
"#;

/// Handles for everything the engine keeps running. Dropping the value
/// stops all of it; fields exist to pin lifetimes.
pub struct Engine {
    reveal: Option<RevealBinding>,
    _scroll_listener: ListenerHandle,
    _key_listener: ListenerHandle,
    _metric_tick: Interval,
    _health_tick: Interval,
    _trailing: Rc<RefCell<Option<Timeout>>>,
}

impl Engine {
    /// Attaches the engine to the rendered page. Returns `None` outside a
    /// browser context.
    pub fn mount() -> Option<Self> {
        let win = dom::window()?;
        let doc = dom::document()?;

        dom::inject_style_once("engine", ENGINE_CSS);
        dispatch::stagger_flow_animations();

        let metrics = Rc::new(RefCell::new(Metrics::default()));
        view::apply_metrics(&metrics.borrow());
        scroll::apply_scroll_effects();

        let throttle = Rc::new(RefCell::new(ScrollThrottle::new(config::SCROLL_THROTTLE_MS)));
        let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let scroll_listener = {
            let throttle = throttle.clone();
            let trailing = trailing.clone();
            ListenerHandle::attach(win.as_ref(), "scroll", move |_event| {
                let now_ms = js_sys::Date::now();
                match throttle.borrow_mut().on_event(now_ms) {
                    ThrottleDecision::Run => scroll::apply_scroll_effects(),
                    ThrottleDecision::Defer(delay_ms) => {
                        let throttle = throttle.clone();
                        let timeout = Timeout::new(delay_ms.ceil() as u32, move || {
                            throttle.borrow_mut().on_trailing(js_sys::Date::now());
                            scroll::apply_scroll_effects();
                        });
                        *trailing.borrow_mut() = Some(timeout);
                    }
                    ThrottleDecision::Skip => {}
                }
            })
        };

        let key_buffer = Rc::new(RefCell::new(KeyBuffer::default()));
        let key_listener = {
            let key_buffer = key_buffer.clone();
            ListenerHandle::attach(doc.as_ref(), "keydown", move |event| {
                let Ok(event) = event.dyn_into::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if let Some(trigger) = key_buffer.borrow_mut().push(&event.key()) {
                    easter::activate(trigger);
                }
            })
        };

        let metric_tick = {
            let metrics = metrics.clone();
            Interval::new(config::METRIC_TICK_MS, move || {
                let snapshot = {
                    let mut m = metrics.borrow_mut();
                    m.apply_jitter(dom::random_unit(), dom::random_unit());
                    *m
                };
                view::apply_metrics(&snapshot);
            })
        };

        let health_tick = {
            let metrics = metrics.clone();
            Interval::new(config::HEALTH_TICK_MS, move || {
                view::apply_health(&metrics.borrow());
            })
        };

        let reveal = RevealBinding::mount();
        match &reveal {
            Some(binding) => log!(format!("observing {} reveal targets", binding.target_count())),
            None => warn!("no reveal targets found in the rendered page"),
        }

        log!("interaction engine mounted");
        Some(Self {
            reveal,
            _scroll_listener: scroll_listener,
            _key_listener: key_listener,
            _metric_tick: metric_tick,
            _health_tick: health_tick,
            _trailing: trailing,
        })
    }

    /// Detaches listeners, disconnects the observer and cancels every
    /// pending timer.
    pub fn teardown(self) {
        if let Some(reveal) = self.reveal {
            reveal.unmount();
        }
        log!("interaction engine unmounted");
    }
}
