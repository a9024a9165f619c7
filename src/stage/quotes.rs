use crate::{
    stage::{Stage, StageError},
    unicode::is_english_quote,
};
use std::borrow::Cow;

/// Rewrite ASCII-quoted spans into Persian guillemets.
///
/// A span opens with a run of `"`, `'` or `` ` `` and closes at the nearest
/// later occurrence of the *same* run, with at least one character in
/// between; newlines are allowed inside. The longest opening run is tried
/// first, shorter prefixes of it only if no closing run is found.
///
/// ```text
/// او گفت "سلام" و رفت   → او گفت «سلام» و رفت
/// ''دو''                → «دو»
/// "باز                  → "باز           (unpaired, left alone)
/// ```
///
/// The `regex` crate has no backreferences, hence the hand-written scanner.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixEnglishQuotes;

impl FixEnglishQuotes {
    /// Byte range `(delimiter_len, content_len)` of a quoted span starting at
    /// the beginning of `rest`, if any.
    fn quoted_span(rest: &str) -> Option<(usize, usize)> {
        // Quote characters are ASCII, so run length in bytes == in chars.
        let run = rest.bytes().take_while(|&b| is_english_quote(b as char)).count();
        (1..=run).rev().find_map(|len| {
            let delimiter = &rest[..len];
            let after = &rest[len..];
            let first = after.chars().next()?.len_utf8();
            after[first..]
                .find(delimiter)
                .map(|pos| (len, first + pos))
        })
    }
}

impl Stage for FixEnglishQuotes {
    fn name(&self) -> &'static str {
        "fix_english_quotes"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.bytes().any(|b| is_english_quote(b as char)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut i = 0;

        while let Some(c) = text[i..].chars().next() {
            if !is_english_quote(c) {
                i += c.len_utf8();
                continue;
            }
            match Self::quoted_span(&text[i..]) {
                Some((delim, content)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 8));
                    buf.push_str(&text[copied..i]);
                    buf.push('«');
                    buf.push_str(&text[i + delim..i + delim + content]);
                    buf.push('»');
                    i += delim + content + delim;
                    copied = i;
                }
                None => i += 1,
            }
        }

        Ok(match out {
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
            None => text,
        })
    }
}
