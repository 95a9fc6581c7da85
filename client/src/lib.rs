//! # client
//!
//! WASM host for the portfolio page's text motion. Binds the `motion` engine
//! to the DOM: stat headings become text sinks, an `IntersectionObserver` is
//! the visibility trigger, and `requestAnimationFrame` drives frames.
//!
//! Everything that touches the browser sits behind the `hydrate` feature;
//! without it the crate only exposes the page-level constants, config
//! parsing, slot planning and the frame gate, and [`mount::mount_page`] is a
//! no-op.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod frame_gate;
pub mod mount;
pub mod page_config;
pub mod slot;

/// WASM entry point: install logging, then mount the page's motion.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("motion: console logging unavailable: {err}").into());
    }
    let mounted = mount::mount_page();
    log::debug!("motion: {mounted} stats armed");
}
