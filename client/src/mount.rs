//! Page wiring: find animated elements, build the controller, run the frame loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is shared between three browser callbacks (intersection
//! batches, animation frames, the typing timeout) through one
//! `Rc<RefCell<..>>`. Each callback borrows it for the duration of a single
//! controller call and then asks the shared [`FrameGate`](crate::frame_gate::FrameGate) whether to schedule
//! an animation frame; at most one is pending at a time.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature there is no page to mount; `mount_page`
//! returns zero so server-side and native test builds stay inert. The
//! decisions that do not need the DOM (config fallback, slot numbering) live
//! in [`MountPlan`] so they build and test natively.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use motion::config::MotionConfig;
use motion::error::ConfigError;

use crate::page_config::config_or_default;
use crate::slot::SlotPlan;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use motion::controller::PageController;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::frame_gate::FrameGate;
#[cfg(feature = "hydrate")]
use crate::dom::{clock::RafClock, observer::ObserverTrigger, sink::DomTextSink};
#[cfg(feature = "hydrate")]
use crate::slot::{CONFIG_ATTR, HERO_SELECTOR, SLOT_ATTR, STAT_SELECTOR, STAT_VALUE_SELECTOR, SlotId};

#[cfg(feature = "hydrate")]
type DomController = PageController<ObserverTrigger, DomTextSink, RafClock>;

#[cfg(feature = "hydrate")]
type SharedController = Rc<RefCell<Option<DomController>>>;

/// What a page mounts with, decided before any element is touched.
#[derive(Debug)]
pub struct MountPlan {
    pub config: MotionConfig,
    /// Set when the config attribute was present but invalid; `config` is then the default.
    pub config_error: Option<ConfigError>,
    pub slots: SlotPlan,
}

impl MountPlan {
    #[must_use]
    pub fn new(raw_config: Option<&str>, stat_count: usize, has_hero: bool) -> Self {
        let (config, config_error) = config_or_default(raw_config);
        Self { config, config_error, slots: SlotPlan::new(stat_count, has_hero) }
    }
}

/// Arm every stat on the page and start the hero typing effect.
///
/// Returns the number of stats armed. Stats whose text is not a number are
/// logged and left as they are.
pub fn mount_page() -> usize {
    #[cfg(feature = "hydrate")]
    {
        match mount_document() {
            Ok(armed) => armed,
            Err(err) => {
                log::warn!("motion: mount failed: {err:?}");
                0
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[cfg(feature = "hydrate")]
struct StatElement {
    container: Element,
    value: HtmlElement,
    text: String,
}

#[cfg(feature = "hydrate")]
fn mount_document() -> Result<usize, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let raw_config = document.body().and_then(|body| body.get_attribute(CONFIG_ATTR));
    let stats = collect_stats(&document)?;
    let hero = document
        .query_selector(HERO_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let plan = MountPlan::new(raw_config.as_deref(), stats.len(), hero.is_some());
    if let Some(err) = &plan.config_error {
        log::warn!("motion: {err}; using defaults");
    }
    let config = plan.config;

    for (stat, slot) in stats.iter().zip(&plan.slots.stats) {
        stat.container.set_attribute(SLOT_ATTR, &slot.to_string())?;
    }

    let containers: Rc<[Element]> = stats.iter().map(|s| s.container.clone()).collect();
    let texts: Rc<[HtmlElement]> = stats
        .iter()
        .map(|s| s.value.clone())
        .chain(hero.iter().cloned())
        .collect();

    let shared: SharedController = Rc::new(RefCell::new(None));
    let frames = Rc::new(FrameGate::new());

    let trigger = {
        let shared = Rc::clone(&shared);
        let frames = Rc::clone(&frames);
        ObserverTrigger::new(config.visibility_threshold, containers, move |batch| {
            if let Some(ctrl) = shared.borrow_mut().as_mut() {
                ctrl.on_visibility(batch);
            }
            pump(&shared, &frames);
        })?
    };
    let sink = DomTextSink::new(texts);
    let clock = RafClock::new(Rc::clone(&frames));
    let mut ctrl = PageController::new(config, trigger, sink, clock);

    let mut armed = 0;
    for (stat, slot) in stats.iter().zip(&plan.slots.stats) {
        match ctrl.watch(*slot, &stat.text) {
            Ok(true) => armed += 1,
            Ok(false) => {}
            Err(err) => log::warn!("motion: stat {slot} left static: {err}"),
        }
    }
    *shared.borrow_mut() = Some(ctrl);

    if let (Some(slot), Some(el)) = (plan.slots.hero, hero) {
        start_typing(&shared, &frames, slot, &el, config.typing_delay_ms);
    }

    Ok(armed)
}

#[cfg(feature = "hydrate")]
fn collect_stats(document: &Document) -> Result<Vec<StatElement>, JsValue> {
    let nodes = document.query_selector_all(STAT_SELECTOR)?;
    let mut stats = Vec::new();
    for idx in 0..nodes.length() {
        let Some(container) = nodes.get(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(value) = container
            .query_selector(STAT_VALUE_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let text = value.text_content().unwrap_or_default();
        stats.push(StatElement { container, value, text });
    }
    Ok(stats)
}

#[cfg(feature = "hydrate")]
fn start_typing(shared: &SharedController, frames: &Rc<FrameGate>, slot: SlotId, el: &HtmlElement, delay_ms: u32) {
    let text = el.text_content().unwrap_or_default();
    let shared = Rc::clone(shared);
    let frames = Rc::clone(frames);
    Timeout::new(delay_ms, move || {
        if let Some(ctrl) = shared.borrow_mut().as_mut() {
            ctrl.type_text(slot, &text);
        }
        pump(&shared, &frames);
    })
    .forget();
}

/// Schedule one animation frame if the controller asked for one and none is pending.
#[cfg(feature = "hydrate")]
fn pump(shared: &SharedController, frames: &Rc<FrameGate>) {
    if !frames.try_schedule() {
        return;
    }
    let Some(window) = web_sys::window() else {
        frames.delivered();
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let shared_for_cb = Rc::clone(shared);
    let frames_for_cb = Rc::clone(frames);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        frames_for_cb.delivered();
        if let Some(ctrl) = shared_for_cb.borrow_mut().as_mut() {
            ctrl.on_frame();
        }
        pump(&shared_for_cb, &frames_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        frames.delivered();
        log::warn!("motion: requestAnimationFrame failed; frames stopped");
    }
}
