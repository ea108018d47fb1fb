use crate::core::Cancel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser handle of a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    Frame(i32),
    Interval(i32),
    Timeout(i32),
}

impl Cancel for Task {
    fn cancel(&self) {
        let Some(w) = web::window() else {
            return;
        };
        match *self {
            Task::Frame(id) => {
                _ = w.cancel_animation_frame(id);
            }
            Task::Interval(id) => w.clear_interval_with_handle(id),
            Task::Timeout(id) => w.clear_timeout_with_handle(id),
        }
    }
}

pub fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<Task> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
        .map(Task::Frame)
}

pub fn every(cb: &Closure<dyn FnMut()>, period_ms: i32) -> Option<Task> {
    web::window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok()
        .map(Task::Interval)
}

pub fn after(cb: &Closure<dyn FnMut()>, delay_ms: i32) -> Option<Task> {
    web::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok()
        .map(Task::Timeout)
}
