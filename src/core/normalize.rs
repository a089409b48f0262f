//! Domain normalization shared by list entries and evaluated URLs.

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Strip a single leading `http://` or `https://`.
///
/// The scheme is compared ASCII case-insensitively; the rest of the string
/// is left untouched.
pub fn strip_scheme(input: &str) -> &str {
    for scheme in SCHEMES {
        let n = scheme.len();
        if input.len() >= n && input.as_bytes()[..n].eq_ignore_ascii_case(scheme.as_bytes()) {
            return &input[n..];
        }
    }
    input
}

/// Trim and strip schemes until neither changes the string.
///
/// The result is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_url(input: &str) -> &str {
    let mut current = input.trim();
    loop {
        let next = strip_scheme(current).trim();
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

/// Normalize a user-supplied domain for storage or comparison.
///
/// Returns `None` when nothing is left after trimming and scheme removal.
pub fn normalize_domain(input: &str) -> Option<&str> {
    let normalized = normalize_url(input);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
