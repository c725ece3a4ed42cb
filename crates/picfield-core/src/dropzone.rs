//! Drag-hover model for the dropzone.

use crate::intake::Intake;

/// Transient drag-hover state of the dropzone.
///
/// Starts inactive. Enter and over events light it up, leave and drop
/// put it out. Nothing else about the field is stored here: the selected
/// file and its preview belong to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropzone {
    hovering: bool,
}

impl Dropzone {
    /// A dropzone with no drag over it.
    #[must_use]
    pub const fn new() -> Self {
        Self { hovering: false }
    }

    /// Whether a drag is currently over the dropzone.
    #[must_use]
    pub const fn is_hovering(self) -> bool {
        self.hovering
    }

    /// A drag entered the dropzone.
    pub const fn drag_enter(&mut self) {
        self.hovering = true;
    }

    /// A drag moved over the dropzone.
    pub const fn drag_over(&mut self) {
        self.hovering = true;
    }

    /// A drag left the dropzone.
    pub const fn drag_leave(&mut self) {
        self.hovering = false;
    }

    /// A payload was dropped, whether or not it is accepted.
    pub const fn dropped(&mut self) {
        self.hovering = false;
    }

    /// Handle a drop: clear the highlight, then pick the file to forward.
    ///
    /// Returns the first file when it is an image, `None` otherwise. The
    /// highlight is cleared either way.
    #[must_use]
    pub fn receive_drop<'a, F>(
        &mut self,
        files: &'a [F],
        content_type: impl Fn(&F) -> Option<String>,
    ) -> Option<&'a F> {
        self.dropped();
        Intake::Drop.select(files, content_type)
    }
}
