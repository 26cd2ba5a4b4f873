//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use ambient_page::canvas::CanvasSurface;
use ambient_page::config::{FieldConfig, FormConfig, NavConfig, RevealConfig};
use ambient_page::contact_form::ContactForm;
use ambient_page::dom;
use ambient_page::error::PageError;
use ambient_page::nav_highlight::NavHighlight;
use ambient_page::particle_layer::ParticleLayer;
use ambient_page::project_modal::ProjectCards;
use ambient_page::reveal::ScrollReveal;
use ambient_page::smooth_scroll::SmoothScroll;
use ambient_page::{Particle, ParticleField};
use web_sys::{
    Document, Element, Event, EventInit, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn create(document: &Document, tag: &str, id: &str, class: &str, html: &str) -> Element {
    let el = document.create_element(tag).unwrap();
    el.set_id(id);
    el.set_class_name(class);
    el.set_inner_html(html);
    el
}

fn append_div(document: &Document, id: &str, class: &str) -> Element {
    let div = create(document, "div", id, class, "");
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _| {
        window().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn canvas_is_created_inside_container() {
    let document = document();
    let container = append_div(&document, "canvas-host", "");
    let surface = CanvasSurface::create_in(&document, "canvas-host").unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert!(container
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .is_ok());
    drop(surface);
    container.remove();
}

#[wasm_bindgen_test]
fn missing_container_is_a_hard_failure() {
    match CanvasSurface::create_in(&document(), "no-such-container") {
        Err(PageError::MissingElement(selector)) => assert_eq!(selector, "#no-such-container"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("mounted without a container"),
    }
}

#[wasm_bindgen_test]
fn field_resizes_and_draws_on_canvas() {
    let document = document();
    let container = append_div(&document, "field-host", "");
    let surface = CanvasSurface::create_in(&document, "field-host").unwrap();
    let mut field = ParticleField::with_particles(
        surface,
        FieldConfig::default(),
        200,
        100,
        vec![
            Particle::new(10.0, 10.0, 0.0, 0.0, 2.0, 0.5),
            Particle::new(20.0, 10.0, 0.0, 0.0, 2.0, 0.5),
        ],
    );
    assert_eq!(field.surface().canvas.width(), 200);
    field.step();
    field.resize(320, 240);
    assert_eq!(field.surface().canvas.width(), 320);
    assert_eq!(field.surface().canvas.height(), 240);
    assert_eq!(field.particles()[0].pos, [10.0, 10.0]);
    container.remove();
}

#[wasm_bindgen_test]
async fn particle_layer_freezes_after_stop() {
    let document = document();
    let container = append_div(&document, "layer-host", "");
    let config = FieldConfig {
        particle_count: 25,
        container_id: "layer-host".to_owned(),
        ..FieldConfig::default()
    };
    let layer = ParticleLayer::mount(&window(), config).unwrap();
    assert_eq!(layer.particle_count(), 25);
    assert!(layer.is_running());
    assert!(!layer.is_released());

    next_frame().await;
    next_frame().await;
    layer.stop();
    assert!(!layer.is_running());
    assert!(layer.is_released());

    let frozen = layer.positions();
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(layer.positions(), frozen);
    container.remove();
}

#[wasm_bindgen_test]
fn reveal_observes_marked_elements() {
    let document = document();
    let first = append_div(&document, "reveal-a", "reveal-test");
    let second = append_div(&document, "reveal-b", "reveal-test");
    let config = RevealConfig {
        selector: ".reveal-test".to_owned(),
        ..RevealConfig::default()
    };
    let reveal = ScrollReveal::mount(&document, &config).unwrap();
    assert_eq!(reveal.observed(), 2);
    first.remove();
    second.remove();
}

fn notifications_saying(document: &Document, message: &str) -> usize {
    dom::query_all(document, "body > div")
        .unwrap()
        .iter()
        .filter(|el| el.text_content().as_deref() == Some(message))
        .count()
}

#[wasm_bindgen_test]
async fn contact_form_simulates_one_submission() {
    let document = document();
    let form = create(
        &document,
        "form",
        "contact-test",
        "",
        r#"<input name="email"><button type="submit">Send</button>"#,
    );
    document.body().unwrap().append_child(&form).unwrap();
    let input: HtmlInputElement = dom::query_one(&form, "input").unwrap().dyn_into().unwrap();
    let button: HtmlButtonElement = dom::query_one(&form, "button").unwrap().dyn_into().unwrap();
    input.set_value("someone@example.com");

    let config = FormConfig {
        form_selector: "#contact-test".to_owned(),
        submit_delay_ms: 50,
        notification_ms: 10_000,
        success_message: "contact test: sent".to_owned(),
        ..FormConfig::default()
    };
    let contact = ContactForm::mount(&window(), &document, &config).unwrap();
    assert!(contact.is_some());

    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    assert!(button.inner_html().ends_with("Sent!"));
    assert!(button.disabled());

    // A second submit while the first is pending is ignored
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    sleep(150).await;
    assert_eq!(button.inner_html(), "Send");
    assert!(!button.disabled());
    assert_eq!(input.value(), "");
    assert_eq!(notifications_saying(&document, &config.success_message), 1);

    sleep(100).await;
    assert_eq!(notifications_saying(&document, &config.success_message), 1);

    for note in dom::query_all(&document, "body > div").unwrap() {
        if note.text_content().as_deref() == Some(config.success_message.as_str()) {
            note.remove();
        }
    }
    form.remove();
}

#[wasm_bindgen_test]
fn contact_form_is_optional() {
    let config = FormConfig {
        form_selector: "#no-such-form".to_owned(),
        ..FormConfig::default()
    };
    assert!(ContactForm::mount(&window(), &document(), &config)
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn project_modal_opens_and_closes() {
    let document = document();
    let card = create(
        &document,
        "div",
        "card-test",
        "project-card",
        "<h3>Orbit</h3><p>Tiny &amp; fast</p>",
    );
    document.body().unwrap().append_child(&card).unwrap();
    let cards = ProjectCards::mount(&window(), &document).unwrap();
    assert!(!cards.is_modal_open());

    click(&card);
    assert!(cards.is_modal_open());
    let overlay = document.query_selector(".inset-0").unwrap().unwrap();
    assert_eq!(
        dom::query_one(&overlay, "h3").unwrap().text_content().as_deref(),
        Some("Orbit")
    );
    assert_eq!(
        dom::query_one(&overlay, "p").unwrap().text_content().as_deref(),
        Some("Tiny & fast")
    );

    // Clicks inside the dialog bubble to the overlay but are not on the backdrop
    click(&overlay.first_element_child().unwrap());
    assert!(cards.is_modal_open());

    click(&overlay);
    assert!(!cards.is_modal_open());
    assert!(document.query_selector(".inset-0").unwrap().is_none());

    click(&card);
    assert!(cards.is_modal_open());
    click(&document.query_selector(".close-modal").unwrap().unwrap());
    assert!(!cards.is_modal_open());
    assert!(document.query_selector(".close-modal").unwrap().is_none());

    card.remove();
}

#[allow(deprecated)]
fn cancelable_click() -> Event {
    let mut init = EventInit::new();
    init.cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn in_page_anchors_never_jump() {
    let document = document();
    let missing = create(&document, "a", "anchor-missing", "", "missing");
    missing.set_attribute("href", "#no-such-target").unwrap();
    let bare = create(&document, "a", "anchor-bare", "", "top");
    bare.set_attribute("href", "#").unwrap();
    let body = document.body().unwrap();
    body.append_child(&missing).unwrap();
    body.append_child(&bare).unwrap();

    let scroll = SmoothScroll::mount(&document).unwrap();
    assert!(scroll.anchor_count() >= 2);

    for anchor in &[&missing, &bare] {
        let event = cancelable_click();
        assert!(!anchor.dispatch_event(&event).unwrap());
        assert!(event.default_prevented());
    }

    missing.remove();
    bare.remove();
}

#[wasm_bindgen_test]
fn nav_lights_the_current_section_link() {
    let document = document();
    let body = document.body().unwrap();
    let sections: Vec<Element> = [("nav-a", 50), ("nav-b", 500), ("nav-c", 50)]
        .iter()
        .map(|(id, height)| {
            let section = create(&document, "section", id, "", "");
            section
                .set_attribute("style", &format!("height: {}px; margin: 0", height))
                .unwrap();
            section
        })
        .collect();
    for section in sections.iter().rev() {
        body.insert_before(section, body.first_child().as_ref()).unwrap();
    }
    let nav = create(
        &document,
        "nav",
        "nav-test",
        "",
        r##"<a class="nav-link" href="#nav-a">A</a><a class="nav-link" href="#nav-b">B</a><a class="nav-link" href="#nav-c">C</a>"##,
    );
    body.append_child(&nav).unwrap();

    let window = window();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let _highlight = NavHighlight::mount(&window, &document, &NavConfig::default()).unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();

    let active = |href: &str| {
        dom::query_one(&nav, &format!("a[href=\"{}\"]", href))
            .unwrap()
            .class_list()
            .contains("active")
    };
    assert!(!active("#nav-a"));
    assert!(active("#nav-b"));
    assert!(!active("#nav-c"));

    nav.remove();
    for section in sections {
        section.remove();
    }
}
