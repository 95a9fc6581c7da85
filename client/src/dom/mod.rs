//! DOM-backed implementations of the motion host traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module wraps one browser facility so `mount` only wires them
//! together: text nodes ([`sink`]), the frame clock ([`clock`]) and the
//! intersection observer ([`observer`]).

pub mod clock;
pub mod observer;
pub mod sink;
