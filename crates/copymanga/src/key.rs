use fancy_regex::Regex;
use once_cell::sync::Lazy;

use crate::Error;

// any `var <name> = '<value>'`, the name changes between page builds
static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\s+\w+\s*=\s*'([^']+)'").expect("key pattern"));

static CONTENT_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\s+contentKey\s*=\s*'([^']+)'").expect("content key pattern"));

static RESULTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""results"\s*:\s*"([^"]+)""#).expect("results pattern"));

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .ok()
        .flatten()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the value of the first single-quoted `var` assignment in `markup`.
pub fn extract_key(markup: &str) -> Result<&str, Error> {
    let key = first_capture(&KEY_RE, markup).ok_or(Error::KeyNotFound)?;
    trace!("found key of {} bytes", key.len());

    Ok(key)
}

/// Returns the encrypted page list assigned to `contentKey` on a reader page.
pub fn extract_content_key(markup: &str) -> Result<&str, Error> {
    first_capture(&CONTENT_KEY_RE, markup).ok_or(Error::ContentKeyNotFound)
}

/// Returns the opaque `results` string of a chapter list response, if any.
pub fn extract_results(body: &str) -> Option<&str> {
    first_capture(&RESULTS_RE, body)
}
