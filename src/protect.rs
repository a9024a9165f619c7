//! URL protection: URLs are swapped for placeholders before the stages run
//! and put back verbatim afterwards.
//!
//! Placeholders look like `__urls__0__`, `__urls__1__`, … numbered in order of
//! appearance. If the input already contains the marker, leading underscores
//! are added until it does not, so a placeholder can never be confused with
//! input text. The digit stage may turn the index into Persian digits;
//! restoration reads either alphabet.

use crate::unicode::digit_value;
use memchr::memmem;
use regex::Regex;
use std::borrow::Cow;

pub const URL_PATTERN: &str = r"https?://[-\w.]+(:\d+)?(/([\w/_.]*(\?\S+)?)?)?";

const MARKER: &str = "__urls__";
const CLOSE: &str = "__";

/// URLs taken out of one text, valid for a single `cleanup` call.
#[derive(Debug, Default)]
pub struct ProtectedSpans {
    marker: String,
    spans: Vec<String>,
}

impl ProtectedSpans {
    /// Replace every URL with a placeholder.
    pub fn protect<'a>(pattern: &Regex, text: Cow<'a, str>) -> (Cow<'a, str>, Self) {
        if !pattern.is_match(&text) {
            return (text, Self::default());
        }

        let mut marker = String::from(MARKER);
        while memmem::find(text.as_bytes(), marker.as_bytes()).is_some() {
            marker.insert(0, '_');
        }

        let mut spans = Vec::new();
        let replaced = pattern
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let placeholder = format!("{marker}{}{CLOSE}", spans.len());
                spans.push(caps[0].to_owned());
                placeholder
            })
            .into_owned();
        log::trace!("protected {} url(s) behind `{marker}`", spans.len());

        (Cow::Owned(replaced), Self { marker, spans })
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Put every protected URL back in place of its placeholder.
    ///
    /// A placeholder whose index is unknown is left as it is.
    pub fn restore<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if self.spans.is_empty() {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut rest: &str = &text;
        while let Some(at) = memmem::find(rest.as_bytes(), self.marker.as_bytes()) {
            out.push_str(&rest[..at]);
            let after = &rest[at + self.marker.len()..];
            match self.placeholder_index(after) {
                Some((index, consumed)) => {
                    out.push_str(&self.spans[index]);
                    rest = &after[consumed..];
                }
                None => {
                    out.push_str(&self.marker);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Cow::Owned(out)
    }

    /// Parse `<digits>__` at the start of `after`; returns the span index and
    /// the number of bytes consumed.
    fn placeholder_index(&self, after: &str) -> Option<(usize, usize)> {
        let mut index: usize = 0;
        let mut digits_len = 0;
        for c in after.chars() {
            let Some(d) = digit_value(c) else { break };
            index = index.checked_mul(10)?.checked_add(d as usize)?;
            digits_len += c.len_utf8();
        }
        if digits_len == 0 || !after[digits_len..].starts_with(CLOSE) {
            return None;
        }
        (index < self.spans.len()).then_some((index, digits_len + CLOSE.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_regex() -> Regex {
        Regex::new(URL_PATTERN).unwrap()
    }

    #[test]
    fn urls_become_numbered_placeholders() {
        let text = "ببینید https://example.com/a?b=1 و http://x.ir:8080/path";
        let (protected, spans) = ProtectedSpans::protect(&url_regex(), Cow::Borrowed(text));
        assert_eq!(protected, "ببینید __urls__0__ و __urls__1__");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans.restore(protected), text);
    }

    #[test]
    fn no_url_is_zero_copy() {
        let text = "متن بدون پیوند";
        let (protected, spans) = ProtectedSpans::protect(&url_regex(), Cow::Borrowed(text));
        assert!(spans.is_empty());
        assert!(matches!(protected, Cow::Borrowed(s) if s.as_ptr() == text.as_ptr()));
    }

    #[test]
    fn persian_digit_index_is_restored() {
        let text = "https://a.ir";
        let (_, spans) = ProtectedSpans::protect(&url_regex(), Cow::Borrowed(text));
        assert_eq!(spans.restore(Cow::Borrowed("پیوند: __urls__۰__")), "پیوند: https://a.ir");
    }

    #[test]
    fn marker_already_in_input_is_not_confused() {
        let text = "__urls__0__ https://a.ir";
        let (protected, spans) = ProtectedSpans::protect(&url_regex(), Cow::Borrowed(text));
        assert_eq!(protected, "__urls__0__ ___urls__0__");
        assert_eq!(spans.restore(protected), text);
    }

    #[test]
    fn unknown_index_is_kept_verbatim() {
        let (_, spans) = ProtectedSpans::protect(&url_regex(), Cow::Borrowed("https://a.ir"));
        assert_eq!(
            spans.restore(Cow::Borrowed("__urls__7__ __urls__x")),
            "__urls__7__ __urls__x"
        );
    }
}
