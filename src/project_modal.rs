// Project cards open a modal overlay with the card's title and description.
// One modal at a time; the close button or a click on the backdrop dismisses it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::dom::{self, Listener};
use crate::error::{PageError, Result};

pub const CARD_SELECTOR: &str = ".project-card";

const OVERLAY_CLASS: &str =
    "fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn modal_markup(title: &str, description: &str) -> String {
    format!(
        r#"
    <div class="bg-slate-900 rounded-2xl p-8 max-w-2xl w-full border border-undefined-primary/20 animate-fade-in-up">
        <div class="flex justify-between items-start mb-6">
            <h3 class="text-3xl font-bold bg-gradient-to-r from-undefined-primary to-undefined-secondary bg-clip-text text-transparent">{}</h3>
            <button class="close-modal text-slate-400 hover:text-white transition-colors">
                <i data-feather="x" class="w-8 h-8"></i>
            </button>
        </div>
        <p class="text-slate-300 text-lg mb-6">{}</p>
        <div class="flex gap-4">
            <button class="btn-primary px-6 py-2 rounded-full">View Full Project</button>
            <button class="btn-secondary px-6 py-2 rounded-full">Share</button>
        </div>
    </div>
"#,
        escape_html(title),
        escape_html(description)
    )
}

struct OpenModal {
    overlay: Element,
    _close: Option<Listener>,
    _backdrop: Listener,
}

type ModalSlot = RefCell<Option<OpenModal>>;

pub struct ProjectCards {
    _cards: Vec<Listener>,
    modal: Rc<ModalSlot>,
}

impl ProjectCards {
    pub fn mount(window: &Window, document: &Document) -> Result<ProjectCards> {
        let modal: Rc<ModalSlot> = Rc::new(RefCell::new(None));
        let cards = dom::query_all(document, CARD_SELECTOR)?;
        if cards.is_empty() {
            log::warn!("no {} elements on page", CARD_SELECTOR);
        }

        let mut listeners = Vec::with_capacity(cards.len());
        for card in cards {
            let window = window.clone();
            let document = document.clone();
            let slot = Rc::downgrade(&modal);
            let source = card.clone();
            listeners.push(Listener::new(&card, "click", move |_| {
                let title = text_of(&source, "h3");
                let description = text_of(&source, "p");
                if let Err(err) = open_modal(&window, &document, &slot, &title, &description) {
                    log::error!("project modal: {}", err);
                }
            })?);
        }
        log::info!("project cards bound: {}", listeners.len());

        Ok(ProjectCards {
            _cards: listeners,
            modal,
        })
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.borrow().is_some()
    }
}

impl Drop for ProjectCards {
    fn drop(&mut self) {
        if let Some(modal) = self.modal.borrow_mut().take() {
            modal.overlay.remove();
        }
    }
}

fn text_of(card: &Element, selector: &str) -> String {
    dom::query_one(card, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn open_modal(
    window: &Window,
    document: &Document,
    slot: &Weak<ModalSlot>,
    title: &str,
    description: &str,
) -> Result<()> {
    close_modal(window, slot);

    let body = document
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
    let overlay = document.create_element("div").map_err(PageError::from_js)?;
    overlay.set_class_name(OVERLAY_CLASS);
    overlay.set_inner_html(&modal_markup(title, description));
    body.append_child(&overlay).map_err(PageError::from_js)?;
    refresh_icons(window);

    let close = match dom::query_one(&overlay, ".close-modal") {
        Some(button) => {
            let window = window.clone();
            let slot = slot.clone();
            Some(Listener::new(&button, "click", move |_| close_modal(&window, &slot))?)
        }
        None => None,
    };

    let backdrop = {
        let window = window.clone();
        let slot = slot.clone();
        let overlay_value: JsValue = overlay.clone().into();
        Listener::new(&overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .map_or(false, |target| JsValue::from(target) == overlay_value);
            if on_backdrop {
                close_modal(&window, &slot);
            }
        })?
    };

    if let Some(slot) = slot.upgrade() {
        *slot.borrow_mut() = Some(OpenModal {
            overlay,
            _close: close,
            _backdrop: backdrop,
        });
    }
    Ok(())
}

// Called from inside the modal's own listeners, so their closures are released
// on a later tick instead of while they are still running.
fn close_modal(window: &Window, slot: &Weak<ModalSlot>) {
    let slot = match slot.upgrade() {
        Some(slot) => slot,
        None => return,
    };
    let modal = slot.borrow_mut().take();
    if let Some(modal) = modal {
        modal.overlay.remove();
        let _ = dom::set_timeout(window, 0, move || drop(modal));
    }
}

// feather-icons swaps <i data-feather> placeholders for inline SVG, when the page loads it
fn refresh_icons(window: &Window) {
    let feather = match js_sys::Reflect::get(window, &JsValue::from_str("feather")) {
        Ok(feather) if feather.is_object() => feather,
        _ => return,
    };
    if let Ok(replace) = js_sys::Reflect::get(&feather, &JsValue::from_str("replace")) {
        if let Some(replace) = replace.dyn_ref::<js_sys::Function>() {
            let _ = replace.call0(&feather);
        }
    }
}
