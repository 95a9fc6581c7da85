//! Visibility trigger backed by an `IntersectionObserver`.

use std::rc::Rc;

use motion::trigger::{Visibility, VisibilityTrigger};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::slot::{SLOT_ATTR, SlotId};

pub struct ObserverTrigger {
    observer: IntersectionObserver,
    slots: Rc<[Element]>,
}

impl ObserverTrigger {
    /// Create an observer reporting at `threshold` and forward each batch to `on_batch`.
    ///
    /// Entries whose target carries no slot attribute are dropped.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if the observer cannot be constructed.
    pub fn new<F>(threshold: f64, slots: Rc<[Element]>, mut on_batch: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<Visibility<SlotId>>) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| visibility_of(&entry))
                    .collect::<Vec<_>>();
                on_batch(batch);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        // The observer lives as long as the page.
        callback.forget();

        Ok(Self { observer, slots })
    }
}

fn visibility_of(entry: &IntersectionObserverEntry) -> Option<Visibility<SlotId>> {
    let raw = entry.target().get_attribute(SLOT_ATTR)?;
    let target = SlotId::parse(&raw)?;
    Some(Visibility {
        target,
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    })
}

impl VisibilityTrigger for ObserverTrigger {
    type Target = SlotId;

    fn observe(&mut self, target: &SlotId) {
        if let Some(el) = self.slots.get(target.index()) {
            self.observer.observe(el);
        }
    }

    fn unobserve(&mut self, target: &SlotId) {
        if let Some(el) = self.slots.get(target.index()) {
            self.observer.unobserve(el);
        }
    }
}
