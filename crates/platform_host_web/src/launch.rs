//! Browser launch primitives.
//!
//! Custom-scheme navigation goes through `location.href`, which gives no success signal: an
//! unregistered scheme simply does nothing. Web fallbacks open in a fresh `_blank` context.

use platform_host::LaunchService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser launch service backed by `window.location` and `window.open`.
pub struct WebLaunchService;

impl LaunchService for WebLaunchService {
    fn navigate_current(&self, uri: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .set_href(uri)
                .map_err(|e| format!("location.href assignment failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = uri;
            Err(crate::unsupported("location.href"))
        }
    }

    fn open_new_context(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            // A `None` handle means a popup blocker swallowed the request; nothing to report.
            window
                .open_with_url_and_target(url, "_blank")
                .map(|_| ())
                .map_err(|e| format!("window.open failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err(crate::unsupported("window.open"))
        }
    }
}
