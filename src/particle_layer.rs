// Binds a ParticleField to a canvas that fills the viewport, keeps it sized
// on window resize and drives it from the animation loop.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Window;

use crate::animation::{self, AnimationLoop};
use crate::canvas::CanvasSurface;
use crate::config::FieldConfig;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::field::ParticleField;

pub struct ParticleLayer {
    field: Rc<RefCell<ParticleField<CanvasSurface>>>,
    _resize: Listener,
    animation: AnimationLoop,
}

impl ParticleLayer {
    pub fn mount(window: &Window, config: FieldConfig) -> Result<ParticleLayer> {
        let document = dom::document(window)?;
        let surface = CanvasSurface::create_in(&document, &config.container_id)?;
        let (width, height) = dom::viewport_size(window)?;
        let count = config.particle_count;
        let field = ParticleField::with_rng(surface, config, width, height, &mut rand::thread_rng());
        let field = Rc::new(RefCell::new(field));
        log::info!("particle field ready: {} particles on {}x{}", count, width, height);

        let resize = {
            let field = Rc::clone(&field);
            let viewport = window.clone();
            Listener::new(window, "resize", move |_| {
                if let Ok((width, height)) = dom::viewport_size(&viewport) {
                    log::debug!("viewport resized to {}x{}", width, height);
                    field.borrow_mut().resize(width, height);
                }
            })?
        };

        let animation = animation::run(Rc::clone(&field))?;

        Ok(ParticleLayer {
            field,
            _resize: resize,
            animation,
        })
    }

    pub fn stop(&self) {
        self.animation.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_released(&self) -> bool {
        self.animation.is_released()
    }

    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.field.borrow().particles().iter().map(|p| p.pos).collect()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }
}
