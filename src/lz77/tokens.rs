use crate::error::{Error, Result};

/// Symbol byte carried by the configuration token
pub const SENTINEL: u8 = 0x01;

/// Bytes per token in the flat stream
pub const TOKEN_BYTES: usize = 3;

/// Represents a single token in the LZ77 stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes from `offset` bytes back, then
    /// append `next` if the input continues past the match
    Match { offset: u8, length: u8, next: Option<u8> },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, next, .. } => *length as usize + next.is_some() as usize,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

/// Window geometry recorded as the first triple of every token stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamHeader {
    pub window_length: u8,
    pub preview_length: u8,
}

/// Serialize a header and token sequence to the flat byte stream
///
/// Literals become `(0, 0, byte)` and matches `(offset, length, next)`.
/// A match with no following byte ends the stream and is written as the
/// two bytes `(offset, length)`.
pub fn flatten<I>(header: StreamHeader, tokens: I) -> Vec<u8>
where
    I: IntoIterator<Item = Token>,
{
    let tokens = tokens.into_iter();
    let mut flat = Vec::with_capacity((tokens.size_hint().0 + 1) * TOKEN_BYTES);
    flat.extend_from_slice(&[header.window_length, header.preview_length, SENTINEL]);

    let mut terminated = false;
    for token in tokens {
        debug_assert!(!terminated, "token after an unterminated match");
        match token {
            Token::Literal(byte) => flat.extend_from_slice(&[0, 0, byte]),
            Token::Match { offset, length, next: Some(next) } => {
                flat.extend_from_slice(&[offset, length, next])
            }
            Token::Match { offset, length, next: None } => {
                flat.extend_from_slice(&[offset, length]);
                terminated = true;
            }
        }
    }
    flat
}

/// Parse the flat byte stream back into its header and tokens
///
/// The stream length modulo 3 tags the end: a trailing 2-byte remainder is
/// a final match with no following byte.
pub fn parse(flat: &[u8]) -> Result<(StreamHeader, Vec<Token>)> {
    if flat.len() < TOKEN_BYTES {
        return Err(Error::corrupt(0, "missing configuration token"));
    }
    let header = StreamHeader { window_length: flat[0], preview_length: flat[1] };

    let body = &flat[TOKEN_BYTES..];
    let mut chunks = body.chunks_exact(TOKEN_BYTES);
    let mut tokens = Vec::with_capacity(body.len() / TOKEN_BYTES + 1);

    for chunk in &mut chunks {
        let index = tokens.len() + 1;
        let token = match (chunk[0], chunk[1]) {
            (0, 0) => Token::Literal(chunk[2]),
            (0, length) => {
                return Err(Error::corrupt(
                    index,
                    format!("literal token carries match length {}", length),
                ))
            }
            (offset, length) => Token::Match { offset, length, next: Some(chunk[2]) },
        };
        tokens.push(token);
    }

    let index = tokens.len() + 1;
    match *chunks.remainder() {
        [] => {}
        [0, _] => return Err(Error::corrupt(index, "literal token without a symbol")),
        [offset, length] => tokens.push(Token::Match { offset, length, next: None }),
        _ => return Err(Error::corrupt(index, "truncated token")),
    }

    Ok((header, tokens))
}
