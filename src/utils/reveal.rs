//! One-shot scroll reveal: regions start hidden and fade in the first time
//! they cross the visibility threshold. The controller is generic over a
//! [`ViewportObserver`] so the logic runs against a fake in tests; the DOM
//! adapter wraps `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub type RegionId = usize;

/// A region counts as visible at 10% intersection, with the viewport bottom
/// inset by 100px so the animation starts before the region has fully
/// entered.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Elements carrying this class are registered for reveal on mount.
pub const REVEAL_SELECTOR: &str = ".reveal";
const REVEALED_CLASS: &str = "reveal-visible";

pub trait ViewportObserver {
    fn register(&mut self, region: RegionId);
    fn unregister(&mut self, region: RegionId);
    fn disconnect(&mut self);
}

pub struct RevealController<O: ViewportObserver> {
    observer: O,
    threshold: f64,
    revealed: Vec<bool>,
    active: bool,
}

impl<O: ViewportObserver> RevealController<O> {
    /// Registers every region with the observer. All regions start hidden.
    pub fn new(mut observer: O, regions: usize, threshold: f64) -> Self {
        for region in 0..regions {
            observer.register(region);
        }
        Self {
            observer,
            threshold,
            revealed: vec![false; regions],
            active: true,
        }
    }

    /// Handles one intersection callback, returning true when this event
    /// revealed the region. Reveals are one-shot: the flag never reverts, a
    /// revealed region is unregistered, and events after teardown are
    /// ignored.
    pub fn handle_intersection(&mut self, region: RegionId, ratio: f64) -> bool {
        if !self.active {
            return false;
        }
        match self.revealed.get(region) {
            Some(false) if ratio >= self.threshold => {
                self.revealed[region] = true;
                self.observer.unregister(region);
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.revealed.get(region).copied().unwrap_or(false)
    }

    /// Releases every outstanding registration. Late observer callbacks
    /// become no-ops.
    pub fn teardown(&mut self) {
        if self.active {
            self.active = false;
            self.observer.disconnect();
        }
    }
}

/// [`ViewportObserver`] backed by a live `IntersectionObserver`, with regions
/// addressed by index into the observed element list.
struct DomRegions {
    observer: IntersectionObserver,
    elements: Vec<Element>,
}

impl ViewportObserver for DomRegions {
    fn register(&mut self, region: RegionId) {
        if let Some(element) = self.elements.get(region) {
            self.observer.observe(element);
        }
    }

    fn unregister(&mut self, region: RegionId) {
        if let Some(element) = self.elements.get(region) {
            self.observer.unobserve(element);
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Maps an observer entry to the ratio fed to the controller. On the upward
/// crossing the browser can report a ratio marginally below the configured
/// threshold while still flagging the entry as intersecting, so an
/// intersecting entry is clamped up to the threshold; a non-intersecting one
/// counts as fully hidden.
fn entry_ratio(is_intersecting: bool, ratio: f64) -> f64 {
    if is_intersecting {
        ratio.max(REVEAL_THRESHOLD)
    } else {
        0.0
    }
}

/// Live reveal wiring for one mounted page. The page's unmount path must
/// call [`dispose`](Self::dispose) to release the observer registrations.
pub struct RevealHandle {
    controller: Rc<RefCell<Option<RevealController<DomRegions>>>>,
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
}

impl RevealHandle {
    pub fn dispose(self) {
        if let Some(mut controller) = self.controller.borrow_mut().take() {
            controller.teardown();
        }
    }
}

/// Observes every [`REVEAL_SELECTOR`] element in the document and adds the
/// visible class the first time one crosses the threshold.
pub fn mount_reveals(document: &Document) -> Result<RevealHandle, JsValue> {
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }

    // The controller slot is filled after the observer exists; entries that
    // somehow arrive before that (or after dispose) are dropped.
    let controller: Rc<RefCell<Option<RevealController<DomRegions>>>> =
        Rc::new(RefCell::new(None));

    let callback = {
        let controller = Rc::clone(&controller);
        let elements = elements.clone();
        Closure::new(move |entries: Vec<IntersectionObserverEntry>| {
            let mut slot = controller.borrow_mut();
            let Some(ctrl) = slot.as_mut() else {
                return;
            };
            for entry in entries {
                let target = entry.target();
                let Some(region) = elements
                    .iter()
                    .position(|el| js_sys::Object::is(el.as_ref(), target.as_ref()))
                else {
                    continue;
                };
                let ratio = entry_ratio(entry.is_intersecting(), entry.intersection_ratio());
                if ctrl.handle_intersection(region, ratio) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let count = elements.len();
    let regions = DomRegions { observer, elements };
    *controller.borrow_mut() = Some(RevealController::new(regions, count, REVEAL_THRESHOLD));

    Ok(RevealHandle {
        controller,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeObserver {
        registered: Rc<RefCell<Vec<RegionId>>>,
        disconnected: Rc<RefCell<bool>>,
    }

    impl ViewportObserver for FakeObserver {
        fn register(&mut self, region: RegionId) {
            self.registered.borrow_mut().push(region);
        }

        fn unregister(&mut self, region: RegionId) {
            self.registered.borrow_mut().retain(|r| *r != region);
        }

        fn disconnect(&mut self) {
            *self.disconnected.borrow_mut() = true;
            self.registered.borrow_mut().clear();
        }
    }

    fn controller(regions: usize) -> (RevealController<FakeObserver>, FakeObserver) {
        let observer = FakeObserver::default();
        let handle = observer.clone();
        (
            RevealController::new(observer, regions, REVEAL_THRESHOLD),
            handle,
        )
    }

    #[test]
    fn every_region_starts_hidden_and_registered() {
        let (ctrl, observer) = controller(3);
        assert_eq!(*observer.registered.borrow(), vec![0, 1, 2]);
        for region in 0..3 {
            assert!(!ctrl.is_revealed(region));
        }
    }

    #[test]
    fn crossing_the_threshold_reveals_and_unregisters() {
        let (mut ctrl, observer) = controller(2);
        assert!(ctrl.handle_intersection(1, 0.25));
        assert!(ctrl.is_revealed(1));
        assert_eq!(*observer.registered.borrow(), vec![0]);
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let (mut ctrl, _observer) = controller(1);
        assert!(!ctrl.handle_intersection(0, 0.05));
        assert!(!ctrl.is_revealed(0));
    }

    #[test]
    fn reveal_survives_scrolling_back_out() {
        let (mut ctrl, _observer) = controller(1);
        assert!(ctrl.handle_intersection(0, 0.5));
        // Region leaves the viewport again: the flag stays set.
        assert!(!ctrl.handle_intersection(0, 0.0));
        assert!(ctrl.is_revealed(0));
    }

    #[test]
    fn already_revealed_region_is_not_revealed_twice() {
        let (mut ctrl, _observer) = controller(1);
        assert!(ctrl.handle_intersection(0, 0.2));
        assert!(!ctrl.handle_intersection(0, 0.9));
    }

    #[test]
    fn unknown_region_is_ignored() {
        let (mut ctrl, _observer) = controller(1);
        assert!(!ctrl.handle_intersection(7, 1.0));
        assert!(!ctrl.is_revealed(7));
    }

    #[test]
    fn intersecting_entry_reveals_despite_rounded_down_ratio() {
        // The browser can report the crossing with a ratio a hair under the
        // threshold while the entry is flagged intersecting.
        let (mut ctrl, _observer) = controller(1);
        let ratio = entry_ratio(true, 0.099_999);
        assert!(ctrl.handle_intersection(0, ratio));
        assert!(ctrl.is_revealed(0));
    }

    #[test]
    fn non_intersecting_entry_counts_as_hidden() {
        let (mut ctrl, _observer) = controller(1);
        // Stale ratio from the last visible frame must not reveal.
        assert!(!ctrl.handle_intersection(0, entry_ratio(false, 0.4)));
        assert!(!ctrl.is_revealed(0));
    }

    #[test]
    fn teardown_releases_registrations_with_regions_still_hidden() {
        let (mut ctrl, observer) = controller(3);
        ctrl.handle_intersection(0, 0.5);
        ctrl.teardown();
        assert!(*observer.disconnected.borrow());
        assert!(observer.registered.borrow().is_empty());
    }

    #[test]
    fn callbacks_after_teardown_mutate_nothing() {
        let (mut ctrl, _observer) = controller(2);
        ctrl.teardown();
        assert!(!ctrl.handle_intersection(0, 1.0));
        assert!(!ctrl.is_revealed(0));
    }
}
