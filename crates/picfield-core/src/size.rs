//! File size helpers for hosts.
//!
//! The field advertises a size limit in its hint text but never enforces
//! it. Hosts that want to act on the limit use these helpers after
//! receiving the file.

/// Size advertised by the dropzone hint: 10 MiB.
pub const SIZE_HINT_BYTES: u64 = 10 * 1024 * 1024;

/// Whether a file is larger than the advertised size hint.
#[must_use]
pub const fn exceeds_size_hint(size: u64) -> bool {
    size > SIZE_HINT_BYTES
}

/// Format a byte count for display using binary units.
///
/// Whole bytes below 1 KiB, one decimal place above.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only; sub-byte precision is irrelevant
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if size < 1024 {
        return format!("{size} B");
    }

    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_boundary() {
        assert!(!exceeds_size_hint(0));
        assert!(!exceeds_size_hint(SIZE_HINT_BYTES));
        assert!(exceeds_size_hint(SIZE_HINT_BYTES + 1));
    }

    #[test]
    fn bytes_below_one_kib() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn scaled_units() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(SIZE_HINT_BYTES), "10.0 MiB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }

    #[test]
    fn largest_unit_saturates() {
        assert_eq!(format_size(u64::MAX), "16777216.0 TiB");
    }
}
