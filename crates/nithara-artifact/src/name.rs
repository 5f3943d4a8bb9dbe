//! Filename normalization
//!
//! Host filesystems and share sheets reject most punctuation, so the
//! suggested name is sanitized before it ever reaches a bridge call.

/// Normalize a suggested filename for delivery.
///
/// Appends `extension` when the name does not already end with it
/// (case-insensitive), then replaces every character outside
/// `[A-Za-z0-9.]` with `_`. Case of allowed characters is preserved.
pub fn normalize_file_name(suggested: &str, extension: &str) -> String {
    let mut name = suggested.to_string();
    if !name.to_lowercase().ends_with(&extension.to_lowercase()) {
        name.push_str(extension);
    }

    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
        .collect()
}
