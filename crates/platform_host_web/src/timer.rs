//! `window.setTimeout`-backed one-shot timers.

use std::time::Duration;

use platform_host::{DeferredTask, TimerService};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer service. The returned timeout id is discarded, so tasks cannot be cleared.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn set_timeout_once(&self, delay: Duration, task: DeferredTask) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let timeout_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
            let callback = Closure::once_into_js(move || task());
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    timeout_ms,
                )
                .map(|_| ())
                .map_err(|e| format!("setTimeout failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay, task);
            Err(crate::unsupported("setTimeout"))
        }
    }
}
