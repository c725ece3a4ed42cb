//! Which of the field's two views renders, and the text it shows.

/// Instructional text inside the dropzone.
pub const DROPZONE_PROMPT: &str = "Drag and drop image here or click to select";

/// Type and size hint under the prompt.
///
/// Informational only: neither the type list nor the size is enforced
/// by the field.
pub const DROPZONE_HINT: &str = "JPG, PNG up to 10MB";

/// Alt text of the preview image.
pub const PREVIEW_ALT: &str = "Preview";

/// Accessible name of the removal control.
pub const REMOVE_LABEL: &str = "Remove image";

/// The view the field renders below its label.
///
/// The two views are mutually exclusive: the preview image and its
/// removal control never appear together with the dropzone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldView<'a> {
    /// Show the host-supplied preview and a removal control.
    Preview {
        /// Renderable image reference (object URL, data URL, ...).
        src: &'a str,
    },
    /// Show the drop target.
    Dropzone,
}

impl<'a> FieldView<'a> {
    /// Pick the view for the host's current preview reference.
    ///
    /// A blank reference cannot be displayed, so it selects the dropzone
    /// just like a missing one.
    #[must_use]
    pub fn for_preview(preview: Option<&'a str>) -> Self {
        match preview {
            Some(src) if !src.is_empty() => Self::Preview { src },
            _ => Self::Dropzone,
        }
    }

    /// Whether the dropzone (and its click-to-browse trigger) renders.
    #[must_use]
    pub const fn shows_dropzone(self) -> bool {
        matches!(self, Self::Dropzone)
    }

    /// Whether the preview image and removal control render.
    #[must_use]
    pub const fn shows_preview(self) -> bool {
        matches!(self, Self::Preview { .. })
    }
}
