//! Screenshot capture of the preview frame via the page-level `html2canvas`
//! script.
//!
//! Capture is split in two so the caller can show progress between the
//! cheap readiness checks and the slow rasterization.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::state::status::StatusLine;

/// Selector of the live preview iframe.
pub const PREVIEW_FRAME_SELECTOR: &str = ".preview-frame";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("Preview not ready to capture yet.")]
    NotReady,
    #[error("Capture failed: html2canvas not loaded.")]
    LibraryMissing,
    #[error("Capture failed: {0}")]
    Failed(String),
}

impl CaptureError {
    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        match self {
            Self::NotReady => StatusLine::warning(self.to_string()),
            Self::LibraryMissing | Self::Failed(_) => StatusLine::danger(self.to_string()),
        }
    }
}

/// Download name for a capture taken at `ms`.
#[must_use]
pub fn capture_file_name(ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stamp = ms.max(0.0) as u64;
    format!("preview-{stamp}.png")
}

/// A preview body ready to rasterize.
pub struct CaptureTarget {
    #[cfg(feature = "hydrate")]
    body: web_sys::HtmlElement,
    #[cfg(feature = "hydrate")]
    rasterize: js_sys::Function,
}

/// Locate the preview body and the rasterizer.
///
/// # Errors
///
/// [`CaptureError::NotReady`] when no preview document is mounted,
/// [`CaptureError::LibraryMissing`] when `window.html2canvas` is absent.
pub fn prepare_capture() -> Result<CaptureTarget, CaptureError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(CaptureError::NotReady)?;
        let body = window
            .document()
            .and_then(|doc| doc.query_selector(PREVIEW_FRAME_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            .and_then(|frame| frame.content_document())
            .and_then(|doc| doc.body())
            .ok_or(CaptureError::NotReady)?;
        let rasterize = js_sys::Reflect::get(&window, &JsValue::from_str("html2canvas"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(CaptureError::LibraryMissing)?;
        Ok(CaptureTarget { body, rasterize })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CaptureError::NotReady)
    }
}

/// Rasterize the target to PNG and trigger a client-side download.
///
/// # Errors
///
/// [`CaptureError::Failed`] with the underlying script error text.
pub async fn render_capture(target: CaptureTarget) -> Result<(), CaptureError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(CaptureError::NotReady)?;
        let document = window.document().ok_or(CaptureError::NotReady)?;

        let options = js_sys::Object::new();
        let scale = window.device_pixel_ratio();
        let scale = if scale > 0.0 { scale } else { 1.0 };
        for (key, value) in [
            ("backgroundColor", JsValue::from_str("#ffffff")),
            ("useCORS", JsValue::TRUE),
            ("scale", JsValue::from_f64(scale)),
        ] {
            js_sys::Reflect::set(&options, &JsValue::from_str(key), &value).map_err(js_failure)?;
        }

        let pending = target
            .rasterize
            .call2(&JsValue::NULL, &target.body, &options)
            .map_err(js_failure)?;
        let pending: js_sys::Promise = pending
            .dyn_into()
            .map_err(|_| CaptureError::Failed("html2canvas did not return a promise".to_owned()))?;
        let canvas: web_sys::HtmlCanvasElement = wasm_bindgen_futures::JsFuture::from(pending)
            .await
            .map_err(js_failure)?
            .dyn_into()
            .map_err(|_| CaptureError::Failed("html2canvas did not return a canvas".to_owned()))?;
        let data_url = canvas.to_data_url_with_type("image/png").map_err(js_failure)?;

        let link: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_failure)?
            .dyn_into()
            .map_err(|_| CaptureError::Failed("could not create download link".to_owned()))?;
        link.set_href(&data_url);
        link.set_download(&capture_file_name(crate::util::time::now_ms()));
        let host_body = document.body().ok_or(CaptureError::NotReady)?;
        host_body.append_child(&link).map_err(js_failure)?;
        link.click();
        link.remove();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        Err(CaptureError::NotReady)
    }
}

#[cfg(feature = "hydrate")]
fn js_failure(value: wasm_bindgen::JsValue) -> CaptureError {
    use wasm_bindgen::JsCast;

    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown error".to_owned());
    CaptureError::Failed(message)
}
