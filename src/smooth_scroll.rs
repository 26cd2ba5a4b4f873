// Replaces the jump of in-page anchors with a smooth scroll to the target's top

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Listener};
use crate::error::Result;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub struct SmoothScroll {
    listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub fn mount(document: &Document) -> Result<SmoothScroll> {
        let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let document = document.clone();
            let href = anchor.get_attribute("href");
            listeners.push(Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                if let Some(target) = href.as_deref().and_then(|href| find_target(&document, href)) {
                    scroll_to(&target);
                }
            })?);
        }
        log::info!("smooth scroll bound to {} anchors", listeners.len());
        Ok(SmoothScroll { listeners })
    }

    pub fn anchor_count(&self) -> usize {
        self.listeners.len()
    }
}

// A bare "#" or a malformed selector has no target
fn find_target(document: &Document, href: &str) -> Option<Element> {
    if href.len() < 2 {
        return None;
    }
    document.query_selector(href).ok().flatten()
}

#[allow(deprecated)]
fn scroll_to(target: &Element) {
    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
