use log::trace;

use super::tokens::{StreamHeader, Token};
use crate::error::Result;
use crate::Lz77Config;

/// Greedy longest-match tokenizer over a bounded sliding window
///
/// Yields tokens lazily. At each step the longest run of upcoming bytes
/// (at most `preview_length`) that also starts somewhere in the previous
/// `window_length` bytes becomes a match; among equally long candidates the
/// nearest one wins. A match may run into the bytes it is encoding, so
/// `offset < length` is possible. The byte following a match is folded
/// into the same token.
pub struct Matcher<'a> {
    input: &'a [u8],
    /// Next input position to encode
    cursor: usize,
    window_length: usize,
    preview_length: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(input: &'a [u8], config: &Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            input,
            cursor: 0,
            window_length: config.window_length,
            preview_length: config.preview_length,
        })
    }

    /// Configuration triple that leads the token stream
    pub fn header(&self) -> StreamHeader {
        // validate() bounds both lengths to 1-255
        StreamHeader {
            window_length: self.window_length as u8,
            preview_length: self.preview_length as u8,
        }
    }

    /// Find `(distance, length)` of the longest, nearest match at the cursor
    fn longest_match(&self) -> Option<(usize, usize)> {
        let cursor = self.cursor;
        let max_length = self.preview_length.min(self.input.len() - cursor);
        if cursor == 0 || max_length == 0 {
            return None;
        }

        let lookahead = &self.input[cursor..cursor + max_length];
        let window_start = cursor.saturating_sub(self.window_length);
        let mut best: Option<(usize, usize)> = None;
        let mut search_end = cursor;

        // Walk candidate starts from nearest to farthest; only a strictly
        // longer match replaces the current best.
        while let Some(pos) = memchr::memrchr(lookahead[0], &self.input[window_start..search_end])
        {
            let start = window_start + pos;
            let length = self.input[start..]
                .iter()
                .zip(lookahead)
                .take_while(|(candidate, wanted)| candidate == wanted)
                .count();

            if best.map_or(true, |(_, best_length)| length > best_length) {
                best = Some((cursor - start, length));
                if length == max_length {
                    break;
                }
            }
            search_end = start;
        }

        best
    }
}

impl Iterator for Matcher<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.cursor >= self.input.len() {
            return None;
        }

        let token = match self.longest_match() {
            Some((distance, length)) => {
                let next = self.input.get(self.cursor + length).copied();
                self.cursor += length + next.is_some() as usize;
                Token::Match { offset: distance as u8, length: length as u8, next }
            }
            None => {
                let byte = self.input[self.cursor];
                self.cursor += 1;
                Token::Literal(byte)
            }
        };

        trace!("lz77 token at {}: {:?}", self.cursor, token);
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.len() - self.cursor.min(self.input.len());
        ((remaining + 255) / 256, Some(remaining))
    }
}
