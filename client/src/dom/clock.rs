//! Frame clock: `performance.now()` for time, a shared [`FrameGate`] for frame requests.
//!
//! The engine cannot schedule `requestAnimationFrame` itself (the callback
//! needs the controller it is called from), so `request_frame` only records
//! the request. `mount` consults the gate after every call into the
//! controller and schedules the actual animation frame.

use std::rc::Rc;

use motion::host::TimeSource;
use web_sys::Performance;

use crate::frame_gate::FrameGate;

pub struct RafClock {
    performance: Option<Performance>,
    frames: Rc<FrameGate>,
}

impl RafClock {
    #[must_use]
    pub fn new(frames: Rc<FrameGate>) -> Self {
        let performance = web_sys::window().and_then(|w| w.performance());
        Self { performance, frames }
    }
}

impl TimeSource for RafClock {
    fn now_ms(&self) -> f64 {
        self.performance
            .as_ref()
            .map_or_else(js_sys::Date::now, Performance::now)
    }

    fn request_frame(&mut self) {
        self.frames.request();
    }
}
