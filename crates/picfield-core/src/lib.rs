//! picfield-core: interaction policy for the picfield image-upload field.
//!
//! This crate has no browser or UI dependencies. It decides which file
//! (if any) an intake path forwards to the host, how the drag-hover
//! highlight evolves, and which of the two mutually exclusive views the
//! field renders. The Dioxus component in `picfield-io` is a thin shell
//! around these rules.

pub mod dropzone;
pub mod intake;
pub mod mime;
pub mod size;
pub mod view;

pub use dropzone::Dropzone;
pub use intake::{Intake, picked};
pub use mime::{IMAGE_ACCEPT, IMAGE_MIME_PREFIX, is_image};
pub use size::{SIZE_HINT_BYTES, exceeds_size_hint, format_size};
pub use view::FieldView;
