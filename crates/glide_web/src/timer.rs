//! Single-slot browser timeout.
//!
//! One callback, at most one pending `setTimeout` for it. Arming again
//! clears the previous one first. The callback closure lives as long as the
//! slot, so re-arming from inside the callback is safe.

use crate::error::{js_message, WebError};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub struct TimerSlot {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl TimerSlot {
    pub fn new<F>(window: Window, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            window,
            callback: Closure::<dyn FnMut()>::new(callback),
            handle: None,
        }
    }

    /// Run the callback once after `delay`, replacing any pending run.
    pub fn arm(&mut self, delay: Duration) -> Result<(), WebError> {
        self.clear();
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|err| WebError::Timer(js_message(&err)))?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel the pending run, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    /// Forget the handle of a run that has just fired.
    pub fn fired(&mut self) {
        self.handle = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for TimerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSlot")
            .field("handle", &self.handle)
            .finish()
    }
}
