//! Sentence and word segmentation for (normalized) Persian text.
//!
//! Both operations are stateless: the compiled patterns are the only data a
//! [`Tokenizer`] holds, so one instance can serve any number of threads.

use crate::unicode::{TOKEN_PUNCTUATION, ZWNJ};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("invalid tokenizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Sentence end: `. ! ? ؟ ⸮`, optionally one closing quote or ZWNJ, then
/// whitespace (consumed as the separator).
const SENTENCE_END: &str = "([.!?\u{2E2E}\u{061F}][\"'\u{200C}]?)\\s+";

#[derive(Debug, Clone)]
pub struct Tokenizer {
    sentence_end: Regex,
    /// Word passes in order; each is `(pattern, replacement)`.
    word_passes: [(Regex, &'static str); 4],
}

impl Tokenizer {
    pub fn new() -> Result<Self, TokenizerError> {
        let p = TOKEN_PUNCTUATION;
        // Non-punctuation followed by a punctuation mark that is itself
        // followed by punctuation, whitespace, ZWNJ or the end of text.
        let closing = format!("([^{p}])([{p}][{p}\\s{ZWNJ}]|[{p}]\\z)");
        // Opening punctuation (text start, or after punctuation/space/ZWNJ)
        // followed by a non-punctuation character.
        let opening = format!("(\\A[{p}]|[{p}\\s{ZWNJ}][{p}])([^{p}])");

        Ok(Self {
            sentence_end: Regex::new(SENTENCE_END)?,
            // Matches never overlap, so a mark squeezed between two others
            // needs a second sweep.
            word_passes: [
                (Regex::new(&closing)?, "${1} ${2}"),
                (Regex::new(&closing)?, "${1} ${2}"),
                (Regex::new(&opening)?, "${1} ${2}"),
                (Regex::new(&format!("[ {ZWNJ}]{{2,}}"))?, " "),
            ],
        })
    }

    /// Split `text` into sentences.
    ///
    /// Sentences are slices of the input, in order. Line breaks already in
    /// the text also end a sentence; blank lines produce nothing, so empty
    /// input gives an empty vector.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for caps in self.sentence_end.captures_iter(text) {
            let (Some(whole), Some(mark)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_lines(&mut sentences, &text[start..mark.end()]);
            start = whole.end();
        }
        push_lines(&mut sentences, &text[start..]);
        sentences
    }

    /// Split one sentence into words.
    ///
    /// Each punctuation mark, or cluster of adjacent marks, becomes its own
    /// token. The result comes from a plain split on `' '`: empty input gives
    /// `[""]`, and leading or trailing spaces give empty tokens.
    pub fn split_words(&self, sentence: &str) -> Vec<String> {
        let spaced = self
            .word_passes
            .iter()
            .fold(sentence.to_owned(), |text, (pattern, replacement)| {
                pattern.replace_all(&text, *replacement).into_owned()
            });
        spaced.split(' ').map(str::to_owned).collect()
    }

    /// Sentences, each split into words.
    pub fn tokenize(&self, text: &str) -> Vec<Vec<String>> {
        self.split_sentences(text)
            .into_iter()
            .map(|sentence| self.split_words(sentence))
            .collect()
    }
}

fn push_lines<'a>(out: &mut Vec<&'a str>, segment: &'a str) {
    out.extend(segment.lines().filter(|line| !line.trim().is_empty()));
}
