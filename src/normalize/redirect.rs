use super::NormalizeError;
use once_cell::sync::Lazy;
use regex::Regex;

// apex domain or its www. host only, never arbitrary subdomains
static BYFOOD_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(www\.)?byfood\.com(?:/.*)?$").expect("a valid domain pattern")
});

static AFTER_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?://)(.*)").expect("a valid scheme pattern"));

/// Rewrites a ByFood URL into its redirection form.
///
/// The result always uses `https`, always carries the `www.` host prefix and is
/// lowercased in its entirety.
pub fn redirect(url: &str) -> Result<String, NormalizeError> {
    if !BYFOOD_DOMAIN.is_match(url) {
        return Err(NormalizeError::NotByfoodDomain);
    }

    let remainder = AFTER_SCHEME
        .captures(url)
        .and_then(|c| c.get(1))
        .ok_or(NormalizeError::InvalidUrl)?
        .as_str();

    let redirected = if remainder.starts_with("www.") {
        format!("https://{remainder}")
    } else {
        format!("https://www.{remainder}")
    };

    Ok(lowercase(&redirected))
}

// One character in, one character out: `İ` becomes a plain `i` and a
// word-final `Σ` becomes `σ`, unlike `str::to_lowercase`.
fn lowercase(url: &str) -> String {
    url.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_www_and_lowercases() {
        assert_eq!(
            redirect("https://ByFooD.com/FOOD-EXPeriences/"),
            Ok("https://www.byfood.com/food-experiences/".to_string())
        );
    }

    #[test]
    fn keeps_existing_www() {
        assert_eq!(
            redirect("https://www.byfood.com/Tokyo?Lang=EN"),
            Ok("https://www.byfood.com/tokyo?lang=en".to_string())
        );
    }

    #[test]
    fn forces_https() {
        assert_eq!(
            redirect("http://byfood.com"),
            Ok("https://www.byfood.com".to_string())
        );
    }

    #[test]
    fn rejects_other_domains() {
        assert_eq!(
            redirect("https://BootlegFood.com/FOOD-EXPeriences/"),
            Err(NormalizeError::NotByfoodDomain)
        );
        assert_eq!(
            redirect("https://blog.byfood.com/"),
            Err(NormalizeError::NotByfoodDomain)
        );
        assert_eq!(
            redirect("https://byfood.com.evil.io/"),
            Err(NormalizeError::NotByfoodDomain)
        );
        assert_eq!(
            redirect("ftp://byfood.com/"),
            Err(NormalizeError::NotByfoodDomain)
        );
    }

    #[test]
    fn uppercase_scheme_is_not_rewritten() {
        assert_eq!(
            redirect("HTTPS://byfood.com/about"),
            Err(NormalizeError::InvalidUrl)
        );
    }

    #[test]
    fn lowercases_one_character_at_a_time() {
        assert_eq!(
            redirect("https://byfood.com/İstanbul"),
            Ok("https://www.byfood.com/istanbul".to_string())
        );
        assert_eq!(
            redirect("https://byfood.com/ΟΔΟΣ"),
            Ok("https://www.byfood.com/οδοσ".to_string())
        );
    }

    #[test]
    fn www_prefix_is_case_sensitive() {
        assert_eq!(
            redirect("https://WWW.byfood.com/about"),
            Ok("https://www.www.byfood.com/about".to_string())
        );
    }
}
