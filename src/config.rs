// Tunables for every piece of the page. Defaults match the shipped site.

use crate::color::Color;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Pairs strictly closer than this get a connection line.
    pub link_distance: f64,
    /// Line alpha at distance zero, fading linearly to 0 at `link_distance`.
    pub link_alpha: f64,
    pub link_width: f64,
    /// Per-axis velocity bound, in pixels per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub max_depth: f64,
    pub particle_color: Color,
    pub link_color: Color,
    /// Id of the element the canvas is appended to.
    pub container_id: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 150,
            link_distance: 100.0,
            link_alpha: 0.2,
            link_width: 0.5,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            min_opacity: 0.2,
            max_opacity: 0.7,
            max_depth: 1000.0,
            particle_color: Color::from_u32(0x6366f1ff),
            link_color: Color::from_u32(0x8b5cf6ff),
            container_id: "particles".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealConfig {
    pub selector: String,
    pub shown_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            selector: ".animate-on-scroll".to_owned(),
            shown_class: "show".to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormConfig {
    pub form_selector: String,
    pub submit_selector: String,
    pub sent_label: String,
    pub submit_delay_ms: i32,
    pub notification_ms: i32,
    pub fade_ms: i32,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            form_selector: "form".to_owned(),
            submit_selector: "button[type=\"submit\"]".to_owned(),
            sent_label: "<i data-feather=\"check\" class=\"inline-block w-5 h-5 mr-2\"></i>Sent!"
                .to_owned(),
            submit_delay_ms: 2000,
            notification_ms: 3000,
            fade_ms: 300,
            success_message: "Message sent successfully! We'll get back to you soon.".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavConfig {
    pub section_selector: String,
    pub link_selector: String,
    pub active_class: String,
    /// A section counts as current once the viewport is within this many pixels of its top.
    pub offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            section_selector: "section".to_owned(),
            link_selector: "a[href^=\"#\"]".to_owned(),
            active_class: "active".to_owned(),
            offset: 200.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageConfig {
    pub field: FieldConfig,
    pub reveal: RevealConfig,
    pub form: FormConfig,
    pub nav: NavConfig,
}
