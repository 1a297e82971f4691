use super::classify::{
    is_lower_or_number, is_separator, is_upper, next_is_lower_or_number, next_is_upper,
};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

/// Iterator over the words of an identifier-like string.
///
/// Words are split on every character that is neither a letter nor a number, and on
/// case transitions inside run-together identifiers. Acronyms are kept together:
/// `TCPOrUDPSocket` yields `TCP`, `Or`, `UDP`, `Socket`. Numbers behave like
/// lowercase letters, so a word should not normally start with one.
///
/// Created by [`words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    start: usize,
    finished: bool,
}

/// Split `input` into words without transforming them.
pub fn words(input: &str) -> Words<'_> {
    Words {
        input,
        chars: input.char_indices().peekable(),
        start: 0,
        finished: false,
    }
}

impl<'a> Words<'a> {
    /// Close the word ending at `end` and start the next one there.
    fn close(&mut self, end: usize) -> Option<&'a str> {
        let word = &self.input[self.start..end];
        self.start = end;
        (!word.is_empty()).then_some(word)
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some((i, ch)) = self.chars.next() {
            let next_offset = i + ch.len_utf8();
            let next = self.chars.peek().map(|&(_, c)| c);

            let word = if is_separator(ch) {
                let word = self.close(i);
                // The separator itself never belongs to a word
                self.start = next_offset;
                word
            } else if is_upper(ch) && next_is_lower_or_number(next) {
                // Boundary before the first letter of a title-cased word
                self.close(i)
            } else if is_lower_or_number(ch) && next_is_upper(next) {
                // Boundary after the last letter before an uppercase one
                self.close(next_offset)
            } else {
                None
            };

            if word.is_some() {
                return word;
            }
        }

        self.finished = true;
        self.close(self.input.len())
    }
}

impl FusedIterator for Words<'_> {}

/// Split `input` into words, apply `transform` to each word and join the results
/// with `separator`.
///
/// `transform` is called exactly once per word, left to right. An input without
/// letters or numbers produces an empty string.
///
/// ```
/// use casify::convert;
///
/// assert_eq!(convert("XRequestID", "-", str::to_uppercase), "X-REQUEST-ID");
/// assert_eq!(convert("TCPOrUDPSocket", "_", str::to_lowercase), "tcp_or_udp_socket");
/// ```
pub fn convert<F>(input: &str, separator: &str, mut transform: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(input.len());

    for (n, word) in words(input).enumerate() {
        if n > 0 {
            output.push_str(separator);
        }
        output.push_str(&transform(word));
    }

    output
}
