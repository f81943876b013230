//! Scroll-driven behaviour.
//!
//! The throttle and easing math is pure and unit tested. The DOM-facing
//! functions read the live scroll position and hand derived state to
//! [`view`] for application.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::utils::dom;

use super::view;

/// What the throttle decided for one incoming event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Run the handler immediately.
    Run,
    /// Schedule a trailing run after this many milliseconds.
    Defer(f64),
    /// A trailing run is already pending; drop this event.
    Skip,
}

/// Leading-plus-trailing throttle over millisecond timestamps.
///
/// The first event in a quiet period runs immediately; during a burst the
/// handler then runs once per limit window, on the window boundary, so the
/// final event of a burst is never lost. At most one trailing run is
/// pending at any time.
#[derive(Debug)]
pub struct ScrollThrottle {
    limit_ms: f64,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl ScrollThrottle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_run_ms: None,
            trailing_pending: false,
        }
    }

    /// Feed one event at `now_ms` and learn what to do with it.
    pub fn on_event(&mut self, now_ms: f64) -> ThrottleDecision {
        if self.trailing_pending {
            return ThrottleDecision::Skip;
        }
        match self.last_run_ms {
            None => {
                self.last_run_ms = Some(now_ms);
                ThrottleDecision::Run
            }
            Some(last) if now_ms - last >= self.limit_ms => {
                self.last_run_ms = Some(now_ms);
                ThrottleDecision::Run
            }
            Some(last) => {
                self.trailing_pending = true;
                ThrottleDecision::Defer(self.limit_ms - (now_ms - last))
            }
        }
    }

    /// Record that the scheduled trailing run has fired at `now_ms`.
    pub fn on_trailing(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
    }
}

/// Fraction of the scrollable range covered by `scroll_y`, in `[0, 1]`.
/// Pages shorter than the viewport report zero.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Cubic ease-in-out over `[0, duration_ms]`.
///
/// Returns `start` at zero elapsed time and exactly `start + change` at the
/// full duration.
pub fn ease_in_out_cubic(elapsed_ms: f64, start: f64, change: f64, duration_ms: f64) -> f64 {
    let mut t = elapsed_ms / (duration_ms / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t * t + start;
    }
    t -= 2.0;
    change / 2.0 * (t * t * t + 2.0) + start
}

/// One throttled scroll update: restyle the navbar and refresh parallax.
pub fn apply_scroll_effects() {
    let Some(win) = dom::window() else {
        return;
    };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    view::apply_navbar(scroll_y);

    let document_height = dom::document()
        .and_then(|d| d.body())
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    view::apply_parallax(scroll_fraction(scroll_y, document_height, viewport_height));
}

/// Animates the window to the element matching `selector`, easing over
/// [`config::SMOOTH_SCROLL_DURATION_MS`] and stopping exactly on the
/// anchor position minus the navbar allowance. Missing targets are a
/// silent no-op.
pub fn smooth_scroll_to(selector: &str) {
    let Some(win) = dom::window() else {
        return;
    };
    let Some(target) = dom::query_html(selector) else {
        return;
    };

    let target_y = f64::from(target.offset_top()) - config::NAV_SCROLL_OFFSET_PX;
    let start_y = win.page_y_offset().unwrap_or(0.0);
    let distance = target_y - start_y;

    // Self-referencing animation frame chain. The closure holds a slot to
    // itself so each frame can request the next; the final frame defers
    // its own release to a zero-delay timeout, since a closure must not be
    // dropped while it is executing.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_slot = frame.clone();
    let begin: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    let closure = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
        let begin_ms = match begin.get() {
            Some(b) => b,
            None => {
                begin.set(Some(now_ms));
                now_ms
            }
        };
        let elapsed = now_ms - begin_ms;
        let clamped = elapsed.min(config::SMOOTH_SCROLL_DURATION_MS);
        let y = ease_in_out_cubic(clamped, start_y, distance, config::SMOOTH_SCROLL_DURATION_MS);
        let Some(win) = dom::window() else {
            return;
        };
        win.scroll_to_with_x_and_y(0.0, y);

        if elapsed < config::SMOOTH_SCROLL_DURATION_MS {
            if let Some(cb) = frame_slot.borrow().as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        } else {
            let release = frame_slot.clone();
            Timeout::new(0, move || {
                release.borrow_mut().take();
            })
            .forget();
        }
    });

    *frame.borrow_mut() = Some(closure);
    if let Some(cb) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives the throttle the way the event loop would: `Run` executes
    /// immediately, `Defer` fires at its deadline before later events are
    /// fed. Returns the execution timestamps.
    fn simulate(events: &[f64], limit_ms: f64) -> Vec<f64> {
        let mut throttle = ScrollThrottle::new(limit_ms);
        let mut executions = Vec::new();
        let mut pending: Option<f64> = None;
        for &at in events {
            if let Some(deadline) = pending {
                if deadline <= at {
                    throttle.on_trailing(deadline);
                    executions.push(deadline);
                    pending = None;
                }
            }
            match throttle.on_event(at) {
                ThrottleDecision::Run => executions.push(at),
                ThrottleDecision::Defer(delay) => pending = Some(at + delay),
                ThrottleDecision::Skip => {}
            }
        }
        executions
    }

    #[test]
    fn first_event_runs_immediately() {
        let mut throttle = ScrollThrottle::new(16.0);
        assert_eq!(throttle.on_event(5.0), ThrottleDecision::Run);
    }

    #[test]
    fn burst_is_limited_to_one_run_per_window() {
        // 100 events inside a 160ms window at a 16ms limit. The 1.5ms
        // spacing is exactly representable, so boundary timestamps are
        // exact integers.
        let events: Vec<f64> = (0..100).map(|i| f64::from(i) * 1.5).collect();
        let executions = simulate(&events, 16.0);
        let in_window: Vec<&f64> = executions.iter().filter(|&&t| t < 160.0).collect();
        assert!(in_window.len() <= 10);
        assert_eq!(in_window.len(), 10);
        // Executions land on window boundaries.
        assert_eq!(executions[0], 0.0);
        assert_eq!(executions[1], 16.0);
        assert_eq!(*executions.last().unwrap(), 144.0);
    }

    #[test]
    fn at_most_one_trailing_is_pending() {
        let mut throttle = ScrollThrottle::new(16.0);
        assert_eq!(throttle.on_event(0.0), ThrottleDecision::Run);
        assert_eq!(throttle.on_event(4.0), ThrottleDecision::Defer(12.0));
        // Further events inside the window are dropped, not re-deferred.
        assert_eq!(throttle.on_event(6.0), ThrottleDecision::Skip);
        assert_eq!(throttle.on_event(8.0), ThrottleDecision::Skip);
        throttle.on_trailing(16.0);
        assert_eq!(throttle.on_event(40.0), ThrottleDecision::Run);
    }

    #[test]
    fn trailing_boundary_catches_the_last_event_of_a_burst() {
        // A short burst that stops mid-window still produces a trailing
        // run, so the handler sees the final scroll position.
        let mut throttle = ScrollThrottle::new(16.0);
        assert_eq!(throttle.on_event(0.0), ThrottleDecision::Run);
        let ThrottleDecision::Defer(delay) = throttle.on_event(10.0) else {
            panic!("expected a trailing run to be scheduled");
        };
        assert_eq!(delay, 6.0);
    }

    #[test]
    fn spaced_events_all_run() {
        let events = [0.0, 20.0, 40.0, 80.0];
        let executions = simulate(&events, 16.0);
        assert_eq!(executions, vec![0.0, 20.0, 40.0, 80.0]);
    }

    #[test]
    fn scroll_fraction_handles_short_pages() {
        assert_eq!(scroll_fraction(0.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn scroll_fraction_spans_zero_to_one() {
        assert_eq!(scroll_fraction(0.0, 2_000.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(600.0, 2_000.0, 800.0), 0.5);
        assert_eq!(scroll_fraction(1_200.0, 2_000.0, 800.0), 1.0);
        // Overscroll bounce cannot push past the ends.
        assert_eq!(scroll_fraction(1_500.0, 2_000.0, 800.0), 1.0);
        assert_eq!(scroll_fraction(-50.0, 2_000.0, 800.0), 0.0);
    }

    #[test]
    fn easing_hits_both_endpoints_exactly() {
        assert_eq!(ease_in_out_cubic(0.0, 200.0, 600.0, 800.0), 200.0);
        assert_eq!(ease_in_out_cubic(800.0, 200.0, 600.0, 800.0), 800.0);
        // Downward scrolls land exactly too.
        assert_eq!(ease_in_out_cubic(800.0, 900.0, -400.0, 800.0), 500.0);
    }

    #[test]
    fn easing_is_monotonic_for_positive_change() {
        let mut previous = ease_in_out_cubic(0.0, 0.0, 1_000.0, 800.0);
        for step in 1..=80 {
            let value = ease_in_out_cubic(f64::from(step) * 10.0, 0.0, 1_000.0, 800.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn easing_midpoint_is_half_the_change() {
        let mid = ease_in_out_cubic(400.0, 100.0, 600.0, 800.0);
        assert_eq!(mid, 400.0);
    }
}
