//! Object URLs for previewing selected files.
//!
//! A host that receives a file from the field typically shows it back
//! as the field's `preview`. This module wraps the file's bytes in a
//! `Blob` and exposes it through `URL.createObjectURL`. The URL is
//! revoked when the [`ObjectUrl`] is dropped, so holding the handle for
//! as long as the preview is displayed is all the bookkeeping a host
//! needs.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An object URL that is revoked on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create an object URL for `bytes` with the given MIME type.
    ///
    /// An empty `mime_type` leaves the blob untyped; browsers then sniff
    /// the content when rendering it as an image.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if `Blob` creation or
    /// `URL.createObjectURL` fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, ObjectUrlError> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        if !mime_type.is_empty() {
            opts.set_type(mime_type);
        }

        let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &opts)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    /// The `blob:` URL, suitable for an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        // Best-effort: a failed revoke only leaks the blob until unload.
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            tracing::warn!("failed to revoke object URL {}: {e:?}", self.url);
        }
    }
}
