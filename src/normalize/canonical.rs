use super::NormalizeError;
use once_cell::sync::Lazy;
use regex::Regex;

// scheme, host and a non-empty path, stopping at the query string
static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://[^/]+/[^?]+").expect("a valid canonical pattern"));

/// Reduces a URL to its scheme, host and path.
///
/// The query string (and anything after the first `?`) is dropped along with a
/// single trailing `/`. Casing is preserved as supplied.
///
/// # Examples
///
/// - `canonicalize("https://BYFOOD.com/food-EXPeriences?query=abc/")` → `"https://BYFOOD.com/food-EXPeriences"`
/// - `canonicalize("https://byfood.com")` → `Err(NormalizeError::NoCanonicalForm)`
pub fn canonicalize(url: &str) -> Result<String, NormalizeError> {
    let matched = CANONICAL
        .find(url)
        .ok_or(NormalizeError::NoCanonicalForm)?
        .as_str();

    Ok(matched.strip_suffix('/').unwrap_or(matched).to_string())
}
