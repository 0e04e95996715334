pub mod matcher;
pub mod reconstructor;
pub mod tokens;

pub use matcher::Matcher;
pub use reconstructor::reconstruct;
pub use tokens::{flatten, parse, StreamHeader, Token};

use crate::error::Result;
use crate::Lz77Config;

/// Lazily tokenize `input` with the given window geometry
pub fn tokens<'a>(input: &'a [u8], config: &Lz77Config) -> Result<Matcher<'a>> {
    Matcher::new(input, config)
}

/// Tokenize `input` and serialize the stream, configuration token first
pub fn compress(input: &[u8], config: &Lz77Config) -> Result<Vec<u8>> {
    let matcher = tokens(input, config)?;
    let header = matcher.header();
    Ok(flatten(header, matcher))
}
