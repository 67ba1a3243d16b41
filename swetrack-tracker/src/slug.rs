//! Device-key derivation from human-readable names.

/// Normalize a device name into an identifier-safe key.
///
/// Lowercases the input, keeps alphanumeric runs, and collapses every other
/// run of characters into a single `_`. Leading and trailing separators are
/// dropped, so a name with no usable characters yields an empty string.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}
