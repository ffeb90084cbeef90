//! Title canonicalization.

/// Canonicalize a title for fuzzy equality comparison.
///
/// Lower-cases, drops every character that is neither alphanumeric nor
/// whitespace, then drops the whitespace. Only meant for comparison, never
/// for display.
///
/// ```
/// use mangadl_core::normalize_title;
///
/// assert_eq!(normalize_title("Namaikizakari."), "namaikizakari");
/// assert_eq!(normalize_title("One-Punch Man"), "onepunchman");
/// ```
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
