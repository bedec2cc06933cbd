//! Identifier extraction from single lines of document text.
//!
//! Both source documents identify questions and options with 10-digit
//! numeric tokens, always laid out as `<label> <value>`. Every other
//! parsing component funnels through these two functions, so the
//! "first match only" policy lives in exactly one place.

use std::sync::OnceLock;

use regex::Regex;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{10}").unwrap())
}

fn choice_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+|Not Attempted").unwrap())
}

/// Return the first run of 10 consecutive decimal digits in `line`.
///
/// A longer digit run yields its first 10 digits. Labels precede values
/// in the source layout, so the first match is the value we want; a line
/// with several 10-digit tokens yields only the first.
pub fn first_identifier(line: &str) -> Option<&str> {
    identifier_re().find(line).map(|m| m.as_str())
}

/// Return the raw chosen-option token from a "Chosen Option" line:
/// either the first run of decimal digits or the literal `Not Attempted`.
pub fn first_choice_token(line: &str) -> Option<&str> {
    choice_token_re().find(line).map(|m| m.as_str())
}
