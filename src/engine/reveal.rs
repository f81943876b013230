//! Scroll-into-view reveal animation.
//!
//! Tracked elements start hidden (faded out and shifted down) and are
//! revealed when they first intersect the viewport. Elements inside one
//! of the known grids reveal as a group: the first child to intersect
//! cascades the whole grid with a per-sibling stagger. The bookkeeping
//! lives in [`RevealRegistry`], which is pure and unit tested; the DOM
//! half binds it to an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
              IntersectionObserverInit};

use crate::config;
use crate::utils::dom;

/// Selectors whose matches participate in the reveal animation.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".feature-card",
    ".spec-category",
    ".benefit-item",
    ".system-visualization",
    ".section-header",
];

/// Container classes whose children reveal as a staggered group.
pub const GRID_CLASSES: &[&str] = &["features-grid", "specs-grid", "benefits-grid"];

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const INDEX_ATTR: &str = "data-reveal-index";

/// Position of one tracked element: which grid it belongs to, if any,
/// and its index among that grid's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget {
    pub grid: Option<usize>,
    pub child_index: usize,
}

/// One reveal to perform, `delay_ms` after the triggering intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub target: usize,
    pub delay_ms: u32,
}

/// Tracks which elements have revealed and which grids have cascaded.
#[derive(Debug)]
pub struct RevealRegistry {
    targets: Vec<RevealTarget>,
    revealed: Vec<bool>,
    cascaded: Vec<bool>,
}

impl RevealRegistry {
    pub fn new(targets: Vec<RevealTarget>, grid_count: usize) -> Self {
        let revealed = vec![false; targets.len()];
        Self {
            targets,
            revealed,
            cascaded: vec![false; grid_count],
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Handles one intersection report for the element at `index`.
    ///
    /// Standalone elements reveal themselves immediately. The first
    /// intersection from inside a grid schedules every child of that grid,
    /// staggered by child position; later reports from the same grid are
    /// no-ops, so a cascade fires at most once.
    pub fn on_intersection(&mut self, index: usize) -> Vec<ScheduledReveal> {
        let Some(target) = self.targets.get(index).copied() else {
            return Vec::new();
        };
        if self.revealed[index] {
            return Vec::new();
        }
        match target.grid {
            None => {
                self.revealed[index] = true;
                vec![ScheduledReveal {
                    target: index,
                    delay_ms: 0,
                }]
            }
            Some(grid) => {
                if self.cascaded.get(grid).copied().unwrap_or(true) {
                    return Vec::new();
                }
                self.cascaded[grid] = true;
                let mut scheduled = Vec::new();
                for (i, t) in self.targets.iter().enumerate() {
                    if t.grid == Some(grid) && !self.revealed[i] {
                        self.revealed[i] = true;
                        scheduled.push(ScheduledReveal {
                            target: i,
                            delay_ms: t.child_index as u32 * config::REVEAL_STAGGER_STEP_MS,
                        });
                    }
                }
                scheduled
            }
        }
    }
}

/// The DOM half: observed elements plus the handles keeping the observer
/// and any pending staggered reveals alive.
pub struct RevealBinding {
    observer: IntersectionObserver,
    registry: Rc<RefCell<RevealRegistry>>,
    // Held so the observer callback outlives the mount.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl RevealBinding {
    /// Collects every tracked element, hides it, and starts observing.
    /// Returns `None` when the page has no tracked elements or the
    /// observer cannot be constructed.
    pub fn mount() -> Option<Self> {
        let elements = collect_elements();
        if elements.is_empty() {
            return None;
        }
        let mut targets = Vec::with_capacity(elements.len());
        for (index, el) in elements.iter().enumerate() {
            let _ = el.set_attribute(INDEX_ATTR, &index.to_string());
            hide(el);
            targets.push(classify(el));
        }
        let registry = Rc::new(RefCell::new(RevealRegistry::new(
            targets,
            GRID_CLASSES.len(),
        )));
        let elements = Rc::new(elements);
        let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

        let cb_registry = registry.clone();
        let cb_elements = elements.clone();
        let cb_timers = timers.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(index) = entry
                    .target()
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let scheduled = cb_registry.borrow_mut().on_intersection(index);
                for reveal in scheduled {
                    schedule(&cb_elements, &cb_timers, reveal);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
        options.set_root_margin(OBSERVER_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        for el in elements.iter() {
            observer.observe(el);
        }

        Some(Self {
            observer,
            registry,
            _callback: callback,
            timers,
        })
    }

    pub fn target_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Stops observing and cancels any pending staggered reveals.
    pub fn unmount(self) {
        self.observer.disconnect();
        self.timers.borrow_mut().clear();
    }
}

fn collect_elements() -> Vec<HtmlElement> {
    dom::query_all(&REVEAL_SELECTORS.join(", "))
}

/// Reads an element's grid membership and sibling position.
fn classify(el: &HtmlElement) -> RevealTarget {
    let Some(parent) = el.parent_element() else {
        return RevealTarget {
            grid: None,
            child_index: 0,
        };
    };
    let grid = GRID_CLASSES
        .iter()
        .position(|class| parent.class_list().contains(class));
    let child_index = if grid.is_some() {
        child_index_within(&parent, el)
    } else {
        0
    };
    RevealTarget { grid, child_index }
}

fn child_index_within(parent: &Element, el: &HtmlElement) -> usize {
    let children = parent.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            let node: &web_sys::Node = el.as_ref();
            if child.is_same_node(Some(node)) {
                return i as usize;
            }
        }
    }
    0
}

fn hide(el: &HtmlElement) {
    dom::set_style(el, "opacity", "0");
    dom::set_style(el, "transform", "translateY(40px)");
    dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
}

fn show(el: &HtmlElement) {
    dom::set_style(el, "opacity", "1");
    dom::set_style(el, "transform", "translateY(0)");
}

fn schedule(
    elements: &Rc<Vec<HtmlElement>>,
    timers: &Rc<RefCell<Vec<Timeout>>>,
    reveal: ScheduledReveal,
) {
    let Some(el) = elements.get(reveal.target).cloned() else {
        return;
    };
    if reveal.delay_ms == 0 {
        show(&el);
        return;
    }
    let timer = Timeout::new(reveal.delay_ms, move || {
        show(&el);
    });
    timers.borrow_mut().push(timer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(grid: usize, count: usize) -> Vec<RevealTarget> {
        (0..count)
            .map(|child_index| RevealTarget {
                grid: Some(grid),
                child_index,
            })
            .collect()
    }

    #[test]
    fn standalone_element_reveals_immediately() {
        let mut registry = RevealRegistry::new(
            vec![RevealTarget {
                grid: None,
                child_index: 0,
            }],
            GRID_CLASSES.len(),
        );
        let scheduled = registry.on_intersection(0);
        assert_eq!(
            scheduled,
            vec![ScheduledReveal {
                target: 0,
                delay_ms: 0
            }]
        );
        assert!(registry.is_revealed(0));
    }

    #[test]
    fn repeated_intersections_reveal_once() {
        let mut registry = RevealRegistry::new(
            vec![RevealTarget {
                grid: None,
                child_index: 0,
            }],
            GRID_CLASSES.len(),
        );
        assert_eq!(registry.on_intersection(0).len(), 1);
        assert!(registry.on_intersection(0).is_empty());
        assert!(registry.on_intersection(0).is_empty());
    }

    #[test]
    fn grid_cascade_fires_once_and_staggers_by_position() {
        let mut registry = RevealRegistry::new(grid_of(0, 3), GRID_CLASSES.len());
        // The middle child intersects first; the whole grid schedules.
        let scheduled = registry.on_intersection(1);
        assert_eq!(scheduled.len(), 3);
        assert_eq!(scheduled[0], ScheduledReveal { target: 0, delay_ms: 0 });
        assert_eq!(
            scheduled[1],
            ScheduledReveal {
                target: 1,
                delay_ms: 100
            }
        );
        assert_eq!(
            scheduled[2],
            ScheduledReveal {
                target: 2,
                delay_ms: 200
            }
        );
        // Sibling intersections afterwards are no-ops.
        assert!(registry.on_intersection(0).is_empty());
        assert!(registry.on_intersection(2).is_empty());
    }

    #[test]
    fn grids_cascade_independently() {
        let mut targets = grid_of(0, 2);
        targets.extend(grid_of(1, 2));
        let mut registry = RevealRegistry::new(targets, GRID_CLASSES.len());

        assert_eq!(registry.on_intersection(0).len(), 2);
        assert!(!registry.is_revealed(2));
        assert_eq!(registry.on_intersection(3).len(), 2);
        assert!(registry.is_revealed(2));
    }

    #[test]
    fn standalone_and_grid_targets_coexist() {
        let mut targets = vec![RevealTarget {
            grid: None,
            child_index: 0,
        }];
        targets.extend(grid_of(2, 2));
        let mut registry = RevealRegistry::new(targets, GRID_CLASSES.len());

        assert_eq!(registry.on_intersection(2).len(), 2);
        assert!(!registry.is_revealed(0));
        assert_eq!(registry.on_intersection(0).len(), 1);
    }

    #[test]
    fn out_of_range_reports_are_ignored() {
        let mut registry = RevealRegistry::new(grid_of(0, 2), GRID_CLASSES.len());
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
        assert!(registry.on_intersection(99).is_empty());
        assert!(!registry.is_revealed(0));
    }

    #[test]
    fn unknown_grid_ids_never_cascade() {
        // A target claiming a grid the registry was not sized for stays
        // unrevealed rather than indexing out of bounds.
        let mut registry = RevealRegistry::new(
            vec![RevealTarget {
                grid: Some(7),
                child_index: 0,
            }],
            GRID_CLASSES.len(),
        );
        assert!(registry.on_intersection(0).is_empty());
    }
}
