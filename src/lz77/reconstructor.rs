use log::debug;

use super::tokens::{parse, Token};
use crate::error::{Error, Result};

/// Rebuild the original bytes from a flat token stream
///
/// The leading configuration token supplies the window length that bounds
/// how far back a match may reach. Copies proceed byte by byte so a match
/// may overlap the bytes it produces.
pub fn reconstruct(flat: &[u8]) -> Result<Vec<u8>> {
    let (header, tokens) = parse(flat)?;
    let window_length = header.window_length as usize;

    let capacity = tokens.iter().map(Token::uncompressed_size).sum();
    let mut output = Vec::with_capacity(capacity);

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Literal(byte) => output.push(byte),
            Token::Match { offset, length, next } => {
                let available = output.len().min(window_length);
                let distance = offset as usize;
                if distance == 0 || distance > available {
                    // Token 0 is the configuration token
                    return Err(Error::corrupt(
                        i + 1,
                        format!(
                            "back-reference offset {} exceeds available window {}",
                            offset, available
                        ),
                    ));
                }

                let start = output.len() - distance;
                for k in 0..length as usize {
                    let byte = output[start + k];
                    output.push(byte);
                }
                if let Some(byte) = next {
                    output.push(byte);
                }
            }
        }
    }

    debug!("lz77: {} tokens rebuilt {} bytes", tokens.len(), output.len());
    Ok(output)
}
