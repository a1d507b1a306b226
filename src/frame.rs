use crate::core::{run_frame, FrameEffect, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `effect` from its own `requestAnimationFrame` chain until the
/// returned handle is stopped or the effect reports `Tick::Done`.
pub fn start_loop<E: FrameEffect + 'static>(effect: Rc<RefCell<E>>) -> LoopHandle {
    let handle = LoopHandle::new();
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_handle = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let again = run_frame(&mut *effect.borrow_mut(), &loop_handle, now_ms);
        if again {
            request_frame(&tick_clone);
        } else {
            // Releasing the closure breaks the Rc cycle; it is freed on return.
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
    handle
}
