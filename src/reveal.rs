// Adds the "shown" class to elements the first time they scroll into view

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom;
use crate::error::{PageError, Result};

pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    observed: usize,
}

impl ScrollReveal {
    #[allow(deprecated)]
    pub fn mount(document: &Document, config: &RevealConfig) -> Result<ScrollReveal> {
        let shown_class = config.shown_class.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(&shown_class);
                // Revealed elements stay revealed
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options
            .threshold(&JsValue::from_f64(config.threshold))
            .root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(PageError::from_js)?;

        let targets = dom::query_all(document, &config.selector)?;
        for target in &targets {
            observer.observe(target);
        }
        log::info!("scroll reveal watching {} elements", targets.len());

        Ok(ScrollReveal {
            observer,
            _callback: callback,
            observed: targets.len(),
        })
    }

    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
