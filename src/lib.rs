mod utils;

pub mod animation;
pub mod canvas;
pub mod color;
pub mod config;
pub mod contact_form;
pub mod dom;
pub mod error;
pub mod field;
pub mod nav_highlight;
pub mod particle;
pub mod particle_layer;
pub mod project_modal;
pub mod reveal;
pub mod smooth_scroll;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::PageConfig;
use crate::contact_form::ContactForm;
use crate::error::PageError;
use crate::nav_highlight::NavHighlight;
use crate::particle_layer::ParticleLayer;
use crate::project_modal::ProjectCards;
use crate::reveal::ScrollReveal;
use crate::smooth_scroll::SmoothScroll;

pub use crate::error::Result;
pub use crate::field::ParticleField;
pub use crate::particle::Particle;
pub use crate::surface::{DrawCall, Recorder, Surface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logger();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Everything the page wires up on load. Each piece keeps its own listeners
/// alive, so the page stays interactive for as long as this value is held.
#[wasm_bindgen]
pub struct Page {
    particles: ParticleLayer,
    _reveal: ScrollReveal,
    _smooth_scroll: SmoothScroll,
    _contact_form: Option<ContactForm>,
    _projects: ProjectCards,
    _nav: NavHighlight,
}

#[wasm_bindgen]
impl Page {
    pub fn mount() -> std::result::Result<Page, JsValue> {
        Page::mount_with_config(PageConfig::default()).map_err(JsValue::from)
    }

    pub fn mount_with(particle_count: u32) -> std::result::Result<Page, JsValue> {
        let mut config = PageConfig::default();
        config.field.particle_count = particle_count as usize;
        Page::mount_with_config(config).map_err(JsValue::from)
    }

    pub fn stop(&self) {
        self.particles.stop();
    }

    pub fn is_animating(&self) -> bool {
        self.particles.is_running()
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.particle_count() as u32
    }
}

impl Page {
    pub fn mount_with_config(config: PageConfig) -> Result<Page> {
        let window = dom::window()?;
        let document = dom::document(&window)?;

        // The canvas is the one hard requirement; fail before wiring anything else
        let particles = ParticleLayer::mount(&window, config.field)?;
        let reveal = ScrollReveal::mount(&document, &config.reveal)?;
        let smooth_scroll = SmoothScroll::mount(&document)?;
        let contact_form = ContactForm::mount(&window, &document, &config.form)?;
        let projects = ProjectCards::mount(&window, &document)?;
        let nav = NavHighlight::mount(&window, &document, &config.nav)?;
        inject_style(&document, nav_highlight::ACTIVE_LINK_STYLE)?;
        log::info!("page mounted");

        Ok(Page {
            particles,
            _reveal: reveal,
            _smooth_scroll: smooth_scroll,
            _contact_form: contact_form,
            _projects: projects,
            _nav: nav,
        })
    }
}

fn inject_style(document: &web_sys::Document, css: &str) -> Result<()> {
    let head = document
        .head()
        .ok_or_else(|| PageError::MissingElement("head".to_owned()))?;
    let style = document
        .create_element("style")
        .map_err(PageError::from_js)?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(PageError::from_js)?;
    Ok(())
}
