//! Payload extraction
//!
//! Pasted tables usually arrive wrapped in typographic quotes with prose
//! around them, e.g. `Given the following matrix A: “| 1 | 2 | ... |”`.
//! Only the quoted region is kept. Whatever survives is then reduced to
//! plain ASCII, which also removes non-breaking spaces, ligatures and the
//! replacement characters left by lossy decoding.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `“` up to the nearest `”`, across newlines
static QUOTED_REGION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\u{201C}(.*?)\u{201D}").unwrap());

/// Returns the text enclosed by the first pair of curly double quotes.
pub fn extract_quoted(input: &str) -> Option<&str> {
    QUOTED_REGION_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|region| region.as_str())
}

/// Removes every character outside 7-bit ASCII.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Select the quoted region if there is one, otherwise the whole input,
/// and strip it down to ASCII.
pub fn extract_payload(input: &str) -> String {
    let region = match extract_quoted(input) {
        Some(region) => {
            log::debug!("using quoted region of {} bytes", region.len());
            region
        }
        None => {
            log::debug!("no quoted region, using the whole input");
            input
        }
    };

    strip_non_ascii(region)
}
