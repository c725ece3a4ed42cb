//! Which file an intake path forwards to the host.
//!
//! Files reach the field by two paths with different rules:
//!
//! - **Drop**: only the first file is considered, and it is forwarded
//!   only when its MIME type is an image type.
//! - **Picker**: the first file is forwarded whatever its type. The
//!   native input's `accept` attribute narrows what the OS dialog offers,
//!   but nothing re-checks the result.
//!
//! The asymmetry is intentional and observable; callers that need a
//! uniform rule validate after receiving the file.

use crate::mime::is_image;

/// The path a file list arrived by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intake {
    /// Dropped onto the dropzone.
    Drop,
    /// Chosen in the native file picker.
    Picker,
}

impl Intake {
    /// Select the file this path forwards, if any.
    ///
    /// `content_type` reports a file's MIME type; `None` means the browser
    /// did not know it. Only the drop path consults it.
    ///
    /// Returns `None` for an empty list, and on the drop path for a first
    /// file that is not an image. Files after the first are never looked
    /// at.
    #[must_use]
    pub fn select<'a, F>(
        self,
        files: &'a [F],
        content_type: impl Fn(&F) -> Option<String>,
    ) -> Option<&'a F> {
        let first = files.first()?;
        match self {
            Self::Drop => content_type(first)
                .is_some_and(|mime| is_image(&mime))
                .then_some(first),
            Self::Picker => Some(first),
        }
    }
}

/// The file a picker change forwards: the first one, whatever its type.
#[must_use]
pub fn picked<F>(files: &[F]) -> Option<&F> {
    Intake::Picker.select(files, |_| None)
}
