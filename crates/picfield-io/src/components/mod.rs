//! Dioxus UI components for picfield.

mod image_upload_field;

pub use image_upload_field::ImageUploadField;
pub use image_upload_field::ImageUploadFieldProps;
