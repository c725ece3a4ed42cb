//! picfield-io: Browser I/O and Dioxus component library.
//!
//! Provides the [`ImageUploadField`] component, programmatic activation
//! of the native file picker, and object URLs for previewing selected
//! files.

pub mod components;
pub mod object_url;
pub mod picker;

pub use components::ImageUploadField;
pub use object_url::ObjectUrl;
