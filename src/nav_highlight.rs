// Navigation highlight.
//
// On every scroll the current section is the last one (in document order)
// whose top is within `NavConfig::offset` pixels of the scroll position.
// In-page links pointing at it get the active class; all others lose it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::NavConfig;
use crate::dom::{self, Listener};
use crate::error::Result;

pub const ACTIVE_LINK_STYLE: &str = "
        .nav-link.active {
            color: var(--undefined-primary) !important;
            border-bottom: 2px solid var(--undefined-primary);
        }
    ";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
}

/// Id of the section the viewport is currently in, if any.
/// A qualifying section without an id leaves nothing active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - offset)
        .last()
        .and_then(|section| section.id.as_deref())
}

// With no current section nothing matches; a bare "#" or "#null" link is never lit.
pub fn link_targets(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

pub struct NavHighlight {
    _scroll: Listener,
}

impl NavHighlight {
    pub fn mount(window: &Window, document: &Document, config: &NavConfig) -> Result<NavHighlight> {
        let sections = dom::query_all(document, &config.section_selector)?;
        let links = dom::query_all(document, &config.link_selector)?;
        log::info!(
            "nav highlight tracking {} sections, {} links",
            sections.len(),
            links.len()
        );

        let viewport = window.clone();
        let active_class = config.active_class.clone();
        let offset = config.offset;
        let scroll = Listener::new(window, "scroll", move |_| {
            let scroll_y = viewport.scroll_y().unwrap_or(0.0);
            let bounds = section_bounds(&sections);
            let active = active_section(scroll_y, &bounds, offset);
            for link in &links {
                let class_list = link.class_list();
                let _ = class_list.remove_1(&active_class);
                if link_targets(link.get_attribute("href").as_deref(), active) {
                    let _ = class_list.add_1(&active_class);
                }
            }
        })?;

        Ok(NavHighlight { _scroll: scroll })
    }
}

// Offsets are read on every scroll since layout can shift after load
fn section_bounds(sections: &[Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|section| SectionBounds {
            id: section.get_attribute("id"),
            top: section
                .dyn_ref::<HtmlElement>()
                .map_or(0.0, |el| el.offset_top() as f64),
        })
        .collect()
}
