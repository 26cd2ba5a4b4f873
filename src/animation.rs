// Display-synchronised frame loop.
//
// Each `requestAnimationFrame` callback runs the frame work once and then
// re-arms itself only while the loop is still running. The browser throttles
// these callbacks for hidden tabs, so no pause logic lives here.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{PageError, Result};
use crate::field::ParticleField;
use crate::surface::Surface;

// Runs one frame if the loop is live; the return value says whether to re-arm.
pub fn run_frame<F: FnMut()>(running: &Cell<bool>, frame: &mut F) -> bool {
    if !running.get() {
        return false;
    }
    frame();
    running.get()
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request_frame(&self) -> Result<()> {
        let callback = self.callback.borrow();
        let callback = match callback.as_ref() {
            Some(callback) => callback,
            None => return Ok(()),
        };
        let id = crate::dom::window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(PageError::from_js)?;
        self.pending.set(Some(id));
        Ok(())
    }
}

pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start<F>(mut frame: F) -> Result<AnimationLoop>
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The callback lives inside the state it refers to, so it only holds a weak handle.
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move || {
            let state = match weak.upgrade() {
                Some(state) => state,
                None => return,
            };
            state.pending.set(None);
            if run_frame(&state.running, &mut frame) {
                if let Err(err) = state.request_frame() {
                    log::error!("animation loop halted: {}", err);
                    state.running.set(false);
                }
            }
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(callback);

        state.request_frame()?;
        Ok(AnimationLoop { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// True once `stop` has handed back the frame callback and everything it captured.
    pub fn is_released(&self) -> bool {
        self.state.callback.borrow().is_none()
    }

    /// Stops re-arming, cancels the frame already requested and releases the callback.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        let window = web_sys::window();
        if let Some(id) = self.state.pending.take() {
            if let Some(window) = &window {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // stop may run from inside the frame callback, so the closure is freed on a later tick
        let callback = self.state.callback.borrow_mut().take();
        if let (Some(callback), Some(window)) = (callback, &window) {
            let _ = crate::dom::set_timeout(window, 0, move || drop(callback));
        }
        log::debug!("animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Steps the field once per display frame until the returned loop is stopped or dropped.
pub fn run<S: Surface + 'static>(field: Rc<RefCell<ParticleField<S>>>) -> Result<AnimationLoop> {
    AnimationLoop::start(move || field.borrow_mut().step())
}
