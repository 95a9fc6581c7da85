//! Text sink writing `textContent` of slot elements.

use std::rc::Rc;

use motion::error::SinkError;
use motion::host::TextSink;
use web_sys::HtmlElement;

use crate::slot::SlotId;

pub struct DomTextSink {
    slots: Rc<[HtmlElement]>,
}

impl DomTextSink {
    #[must_use]
    pub fn new(slots: Rc<[HtmlElement]>) -> Self {
        Self { slots }
    }
}

impl TextSink for DomTextSink {
    type Target = SlotId;

    /// Elements removed from the document report [`SinkError::Detached`].
    fn set_text(&mut self, target: &SlotId, text: &str) -> Result<(), SinkError> {
        let Some(el) = self.slots.get(target.index()) else {
            return Err(SinkError::Detached);
        };
        if !el.is_connected() {
            return Err(SinkError::Detached);
        }
        el.set_text_content(Some(text));
        Ok(())
    }
}
