//! Programmatic activation of the native file picker.
//!
//! The field keeps its `<input type="file">` hidden and opens it when
//! the dropzone is clicked. Dioxus hands out mounted elements as
//! [`MountedData`]; on the web renderer those wrap a `web_sys::Element`,
//! which is clicked directly.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dioxus::prelude::MountedData;
use wasm_bindgen::JsCast;

/// Errors that can occur when opening the file picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The input element has not been mounted yet.
    #[error("file input is not mounted")]
    NotMounted,
    /// The mounted element is not backed by a browser DOM element.
    #[error("file input is not a DOM element")]
    NotAnElement,
}

/// Open the native file picker behind `input`.
///
/// The browser only honors this from inside a user-gesture handler
/// (e.g. a click); elsewhere the call silently does nothing.
///
/// # Errors
///
/// Returns [`PickerError::NotMounted`] when `input` is `None`, and
/// [`PickerError::NotAnElement`] when the mounted node is not an
/// `HTMLElement` (e.g. under a non-web renderer).
pub fn open(input: Option<&MountedData>) -> Result<(), PickerError> {
    let mounted = input.ok_or(PickerError::NotMounted)?;
    let element = mounted
        .downcast::<web_sys::Element>()
        .ok_or(PickerError::NotAnElement)?;
    let html = element
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or(PickerError::NotAnElement)?;
    html.click();
    Ok(())
}
