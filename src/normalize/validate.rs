use url::{ParseError, Url};

/// Checks whether `candidate` is an absolute URL using the `http` or `https` scheme.
///
/// On top of what [`Url::parse`] enforces, control characters and malformed
/// percent-escapes outside the query string are rejected. An empty host and an
/// all-digit port outside the 16-bit range are tolerated.
pub fn is_valid_url(candidate: &str) -> bool {
    if !candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        || candidate.bytes().any(|b| b < 0x20 || b == 0x7f)
        || !has_valid_escapes(candidate)
    {
        return false;
    }

    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(ParseError::EmptyHost) => has_web_scheme(candidate),
        Err(ParseError::InvalidPort) => has_web_scheme(candidate) && has_numeric_port(candidate),
        Err(_) => false,
    }
}

fn has_web_scheme(candidate: &str) -> bool {
    candidate
        .split_once(':')
        .map(|(scheme, _)| {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        })
        .unwrap_or_default()
}

// every `%` outside the query must start a two digit hex escape
fn has_valid_escapes(candidate: &str) -> bool {
    let (rest, fragment) = candidate.split_once('#').unwrap_or((candidate, ""));
    let before_query = rest.split_once('?').map_or(rest, |(before, _)| before);

    [before_query, fragment].iter().all(|part| {
        part.split('%').skip(1).all(|escape| {
            escape.len() >= 2 && escape.as_bytes()[..2].iter().all(u8::is_ascii_hexdigit)
        })
    })
}

fn has_numeric_port(candidate: &str) -> bool {
    let Some((_, rest)) = candidate.split_once("://") else {
        return false;
    };

    let authority = rest
        .split(|c: char| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let port = match host.strip_prefix('[') {
        Some(ipv6) => ipv6.split_once("]:").map(|(_, port)| port),
        None => host.rsplit_once(':').map(|(_, port)| port),
    };

    port.is_some_and(|port| port.bytes().all(|b| b.is_ascii_digit()))
}
