//! Container number helpers.

/// Minimum number of digits a container search term must contain.
pub const MIN_CONTAINER_DIGITS: usize = 7;

/// Message shown when a container search term has too few digits.
pub const CONTAINER_TOO_SHORT: &str = "Containerul trebuie să conțină minim 7 cifre";

/// Number of ASCII digits in `container`, ignoring every other character.
pub fn digit_count(container: &str) -> usize {
    container.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Whether `container` is specific enough to search for.
pub fn is_searchable(container: &str) -> bool {
    digit_count(container) >= MIN_CONTAINER_DIGITS
}

/// Canonical stored form: trimmed and upper-cased.
pub fn normalize(container: &str) -> String {
    container.trim().to_uppercase()
}

/// Container model: the first four characters of the container followed by its type.
///
/// Empty when either part is missing.
pub fn model_container(container: &str, tip_container: &str) -> String {
    if container.is_empty() || tip_container.is_empty() {
        return String::new();
    }

    let prefix: String = container.chars().take(4).collect();
    format!("{prefix}{tip_container}")
}
