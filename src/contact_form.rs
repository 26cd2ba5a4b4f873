// Contact form with a simulated submission.
//
// Nothing leaves the page: submitting shows a "Sent!" state on the button,
// waits `FormConfig::submit_delay_ms`, restores the form and pops a success
// notification. There is no failure path.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, Window};

use crate::config::FormConfig;
use crate::dom::{self, Listener};
use crate::error::{PageError, Result};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

const NOTIFICATION_BASE: &str = "fixed top-4 right-4 px-6 py-3 rounded-lg z-50 transition-all duration-300";

pub fn notification_class(kind: NotificationKind) -> String {
    let tone = match kind {
        NotificationKind::Success => "bg-green-500/20 border border-green-500 text-green-300",
        NotificationKind::Error => "bg-red-500/20 border border-red-500 text-red-300",
    };
    format!("{} {}", NOTIFICATION_BASE, tone)
}

pub struct ContactForm {
    _submit: Listener,
}

impl ContactForm {
    /// Returns `None` when the page has no form.
    pub fn mount(window: &Window, document: &Document, config: &FormConfig) -> Result<Option<ContactForm>> {
        let form = match document
            .query_selector(&config.form_selector)
            .map_err(PageError::from_js)?
        {
            Some(form) => form,
            None => {
                log::warn!("no {} on page, contact form disabled", config.form_selector);
                return Ok(None);
            }
        };
        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::WrongElementType(config.form_selector.clone()))?;

        let in_flight = Rc::new(Cell::new(false));
        let on_submit = {
            let window = window.clone();
            let document = document.clone();
            let target = form.clone();
            let config = config.clone();
            Listener::new(&form, "submit", move |event| {
                event.prevent_default();
                if in_flight.replace(true) {
                    return;
                }
                let done = Rc::clone(&in_flight);
                if let Err(err) = submit(&window, &document, &target, &config, done) {
                    log::error!("contact form: {}", err);
                    in_flight.set(false);
                }
            })?
        };
        log::info!("contact form bound");
        Ok(Some(ContactForm { _submit: on_submit }))
    }
}

fn submit(
    window: &Window,
    document: &Document,
    form: &HtmlFormElement,
    config: &FormConfig,
    in_flight: Rc<Cell<bool>>,
) -> Result<()> {
    let button = dom::query_one(form, &config.submit_selector)
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
    let original_label = button.as_ref().map(|button| {
        let label = button.inner_html();
        button.set_inner_html(&config.sent_label);
        button.set_disabled(true);
        label
    });

    let finish = {
        let window = window.clone();
        let document = document.clone();
        let form = form.clone();
        let config = config.clone();
        move || {
            if let (Some(button), Some(label)) = (button, original_label) {
                button.set_inner_html(&label);
                button.set_disabled(false);
            }
            form.reset();
            in_flight.set(false);
            if let Err(err) = show_notification(
                &window,
                &document,
                &config.success_message,
                NotificationKind::Success,
                &config,
            ) {
                log::error!("notification: {}", err);
            }
        }
    };
    dom::set_timeout(window, config.submit_delay_ms, finish)?;
    Ok(())
}

pub fn show_notification(
    window: &Window,
    document: &Document,
    message: &str,
    kind: NotificationKind,
    config: &FormConfig,
) -> Result<()> {
    let body = document
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
    let notification = document
        .create_element("div")
        .map_err(PageError::from_js)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::WrongElementType("div".to_owned()))?;
    notification.set_class_name(&notification_class(kind));
    notification.set_text_content(Some(message));
    body.append_child(&notification).map_err(PageError::from_js)?;

    let fade_ms = config.fade_ms;
    let timer_window = window.clone();
    dom::set_timeout(window, config.notification_ms, move || {
        let _ = notification.style().set_property("opacity", "0");
        let _ = dom::set_timeout(&timer_window, fade_ms, move || notification.remove());
    })?;
    Ok(())
}
