//! Outbound browser side effects: file downloads, clipboard, page URL.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ExportError>`. Callers log failures and
//! skip the associated point award; nothing here panics. Outside the browser
//! all operations report `Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("browser APIs are unavailable")]
    Unavailable,
    #[error("browser call failed: {0}")]
    Browser(String),
}

#[cfg(feature = "hydrate")]
fn browser_error(value: &wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// MIME type by file extension.
#[must_use]
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("csv") => "text/csv;charset=utf-8",
        Some("json") => "application/json",
        _ => "text/plain;charset=utf-8",
    }
}

/// Save `bytes` through a temporary object URL and a synthetic anchor click.
///
/// # Errors
///
/// Returns an error when there is no document or a DOM call is rejected.
pub fn download(file_name: &str, bytes: &[u8]) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Unavailable)?;
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_for(file_name));
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| browser_error(&e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| browser_error(&e))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| browser_error(&e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|e| browser_error(&e))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        log::info!("exported {file_name} ({} bytes)", bytes.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, bytes);
        Err(ExportError::Unavailable)
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when the clipboard is missing or the write is refused.
pub async fn copy_text(text: &str) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ExportError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| browser_error(&e))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ExportError::Unavailable)
    }
}

/// How a share request was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet accepted it.
    Native,
    /// No share sheet; the text went to the clipboard.
    Copied,
}

impl ShareOutcome {
    #[must_use]
    pub fn notice(self) -> &'static str {
        match self {
            Self::Native => "Shared!",
            Self::Copied => "Copied to clipboard!",
        }
    }
}

/// Offer `text` to `navigator.share` when the browser has it, otherwise copy
/// it to the clipboard. A dismissed share sheet is an error, not a fallback.
///
/// # Errors
///
/// Returns an error when the share sheet is dismissed or the clipboard write
/// fails.
pub async fn share(title: &str, text: &str, url: &str) -> Result<ShareOutcome, ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(ExportError::Unavailable)?;
        let navigator = window.navigator();
        let share_fn = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        let Some(share_fn) = share_fn else {
            copy_text(text).await?;
            return Ok(ShareOutcome::Copied);
        };

        let data = js_sys::Object::new();
        for (key, value) in [("title", title), ("text", text), ("url", url)] {
            js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|e| browser_error(&e))?;
        }
        let promise = share_fn
            .call1(&navigator, &data)
            .map_err(|e| browser_error(&e))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|e| browser_error(&e))?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| browser_error(&e))?;
        Ok(ShareOutcome::Native)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, text, url);
        Err(ExportError::Unavailable)
    }
}

/// Full URL of the current page, or an empty string off-browser.
#[must_use]
pub fn current_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
