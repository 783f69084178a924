//! Street line splitting.
//!
//! Shop platforms store the street as one free-text line ("Musterstraße
//! 12a", "Rue de la Paix 5/3"); the integration wants street name and house
//! number separately. Splitting is a best-effort heuristic: it always
//! terminates and always returns a pair, falling back to the unchanged
//! input when no house-number token is found.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of digits, slashes, spaces and hyphens, optionally followed by a
/// single letter suffix, ending at whitespace or end of line. House numbers
/// in many European address formats trail the street name but may carry
/// letter suffixes ("12a") or multi-part numbers ("5/3").
static HOUSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9/ -]+ ?[A-Za-z]?(\s|$)").expect("house number pattern"));

/// A street line split into street name and house number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetParts {
    pub street: String,
    pub number: String,
}

/// Split a free-text street line into street name and house number.
///
/// The *last* house-number token wins; digits embedded earlier in
/// multi-word street names ("Straße des 17. Juni 135") would otherwise
/// produce false positives. When no token matches, the street comes back
/// unchanged (trimmed) with an empty number.
///
/// # Examples
///
/// ```
/// use checkout_normalize::street::split_street;
///
/// let parts = split_street("Musterstraße 12a");
/// assert_eq!(parts.street, "Musterstraße");
/// assert_eq!(parts.number, "12a");
///
/// let parts = split_street("Hauptplatz");
/// assert_eq!(parts.street, "Hauptplatz");
/// assert_eq!(parts.number, "");
/// ```
pub fn split_street(raw: &str) -> StreetParts {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return StreetParts::default();
    }

    let Some(token) = HOUSE_NUMBER
        .find_iter(trimmed)
        .last()
        .map(|m| m.as_str())
    else {
        return StreetParts {
            street: trimmed.to_string(),
            number: String::new(),
        };
    };

    // Remove the matched token and any slashes from the street name; the
    // token keeps its surrounding whitespace so removal does not leave a
    // double space behind.
    let street = trimmed.replace(token, "").replace('/', "").trim().to_string();
    StreetParts {
        street,
        number: token.trim().to_string(),
    }
}
