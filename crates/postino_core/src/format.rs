//! Size presentation helpers.

/// Format a byte count as megabytes with two decimals.
///
/// Zero renders as a zero-magnitude value, never an error.
///
/// # Examples
///
/// ```
/// use postino_core::format_size_mb;
///
/// assert_eq!(format_size_mb(2_097_152), "2.00 MB");
/// assert_eq!(format_size_mb(0), "0.00 MB");
/// ```
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
