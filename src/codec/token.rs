//! Escaping for free-text tokens (names, departments, secrets).
//!
//! The format splits on whitespace, so whitespace inside a value is written as an
//! escape sequence. Input written without any backslashes decodes unchanged.

use std::borrow::Cow;

/// Written in place of an empty string, which would otherwise vanish between separators.
const EMPTY: &str = "\\e";

pub fn escape(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed(EMPTY);
    }
    if !value.chars().any(|c| c == '\\' || c.is_whitespace()) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' => out.push_str("\\s"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // Other Unicode whitespace would still split the token.
            c if c.is_whitespace() => out.push_str(&format!("\\u{:04x};", u32::from(c))),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`escape`]. Returns `None` on an unknown or truncated escape sequence.
pub fn unescape(token: &str) -> Option<String> {
    if token == EMPTY {
        return Some(String::new());
    }
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            's' => out.push(' '),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'u' => {
                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        ';' => break,
                        c => hex.push(c),
                    }
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(out)
}
