//! Format validators for common string shapes
//!
//! The pattern-shaped checks compile their regular expressions once and
//! reuse them across calls. The tag heuristic is hand-rolled because its
//! closing-tag rule needs a backreference.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored email pattern: local part, domain, 2-6 letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,6})$").expect("valid email pattern")
});

/// Anchored mainland mobile pattern: 11 digits, prefix 1, second digit 3/5/7/8
static CELLPHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3578][0-9]\d{8}$").expect("valid cellphone pattern"));

/// Check whether a string is a well-formed email address
///
/// Accepts `local@domain.tld` with a lowercase local part of letters,
/// digits, `_`, `.`, `-`, a lowercase domain of letters, digits, `.`, `-`,
/// and a TLD of 2 to 6 letters or dots.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check whether a string is a mainland mobile phone number
///
/// Exactly 11 digits, starting with `1`, second digit 3, 5, 7, or 8.
pub fn is_cellphone(value: &str) -> bool {
    CELLPHONE_REGEX.is_match(value)
}

/// Check whether a string looks like a single HTML tag pair or self-closing tag
///
/// A heuristic, not a parser. Two shapes are accepted:
///
/// - `<name attrs />`: at least one whitespace character immediately before
///   the `/>` and no `<` after the opening one;
/// - `<name attrs>content</close>`: attributes free of `<`, single-line
///   content, and a closing tag matching a non-empty leading run of the
///   opening tag's letters (surplus letters read as attribute text).
///
/// Tag names are lowercase ASCII letters.
pub fn is_html(value: &str) -> bool {
    if !value.starts_with('<') {
        return false;
    }
    let rest = &value[1..];

    let name_len = rest.bytes().take_while(|b| b.is_ascii_lowercase()).count();
    if name_len == 0 {
        return false;
    }

    // Self-closing form
    if let Some(body) = rest.strip_suffix("/>") {
        if !body.contains('<') && body.ends_with(char::is_whitespace) {
            return true;
        }
    }

    // Tag pair form. The attribute run may not contain '<', so only '>'
    // separators before the first '<' can open the content region.
    let lt_cap = rest.find('<').unwrap_or(rest.len());
    for end in (1..=name_len).rev() {
        let closing = format!("</{}>", &rest[..end]);
        if !rest.ends_with(&closing) {
            continue;
        }
        let close_start = rest.len() - closing.len();
        // The latest usable separator leaves the shortest content, which
        // has the best chance of staying single-line.
        if let Some(gt) = rest[..close_start.min(lt_cap)].rfind('>') {
            let content = &rest[gt + 1..close_start];
            if !content.chars().any(|c| c == '\n' || c == '\r') {
                return true;
            }
        }
    }
    false
}
