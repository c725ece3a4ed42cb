//! MIME type classification for incoming files.

/// Prefix shared by every image MIME type (`image/png`, `image/jpeg`, ...).
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Value for the native file input's `accept` attribute.
///
/// This only filters what the OS picker offers; the picker path does not
/// re-check the type of what comes back.
pub const IMAGE_ACCEPT: &str = "image/*";

/// Check whether a MIME type names an image.
///
/// The comparison is a plain prefix match on the type as reported by the
/// browser. Browsers report types in lowercase, so no case folding is
/// done. An empty type (unknown to the browser) is not an image.
#[must_use]
pub fn is_image(mime_type: &str) -> bool {
    mime_type.starts_with(IMAGE_MIME_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_image_types_match() {
        for mime in ["image/png", "image/jpeg", "image/gif", "image/webp", "image/svg+xml"] {
            assert!(is_image(mime), "{mime} should be classified as an image");
        }
    }

    #[test]
    fn non_image_types_do_not_match() {
        for mime in ["text/plain", "application/pdf", "video/mp4", "application/image"] {
            assert!(!is_image(mime), "{mime} should not be classified as an image");
        }
    }

    #[test]
    fn empty_and_bare_prefix() {
        assert!(!is_image(""));
        assert!(!is_image("image"));
        // The bare prefix still matches; the browser never reports it, and
        // the rule is a prefix test, nothing more.
        assert!(is_image("image/"));
    }

    #[test]
    fn accept_attribute_covers_prefix() {
        assert_eq!(IMAGE_ACCEPT.trim_end_matches('*'), IMAGE_MIME_PREFIX);
    }
}
