use std::sync::OnceLock;

use regex::Regex;

/// Hostname with its trailing digit run split off.
static TRAILING_DIGITS: OnceLock<Regex> = OnceLock::new();

fn trailing_digits() -> &'static Regex {
    TRAILING_DIGITS.get_or_init(|| Regex::new(r"^(.*?)\d+$").expect("Invalid Regex"))
}

/// Derive the address group name for a hostname.
///
/// Only the final run of decimal digits is removed; digits elsewhere in the
/// name are kept. Names without trailing digits are returned unchanged.
pub fn group_prefix(hostname: &str) -> &str {
    match trailing_digits()
        .captures(hostname)
        .and_then(|caps| caps.get(1))
    {
        Some(head) => head.as_str(),
        None => hostname,
    }
}
