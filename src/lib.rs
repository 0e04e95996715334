pub mod bits;
pub mod container;
pub mod error;
pub mod huffman;
pub mod lz77;

pub use bits::BitString;
pub use error::{Error, Result};
pub use huffman::CodeTable;
pub use lz77::Token;

use log::{debug, info};

/// Default sliding window length
pub const DEFAULT_WINDOW_LENGTH: usize = 128;

/// Default preview (lookahead) window length
pub const DEFAULT_PREVIEW_LENGTH: usize = 64;

/// Largest window or preview length a token can address
pub const MAX_WINDOW_LENGTH: usize = u8::MAX as usize;

/// Window geometry for the LZ77 stage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lz77Config {
    /// How many already-seen bytes a match may reach back (1-255)
    pub window_length: usize,
    /// Longest match considered at each step (1-255)
    pub preview_length: usize,
}

impl Lz77Config {
    /// Create a validated configuration
    pub fn new(window_length: usize, preview_length: usize) -> Result<Self> {
        let config = Self { window_length, preview_length };
        config.validate()?;
        Ok(config)
    }

    /// Check both lengths fit a single token byte and are non-zero
    pub fn validate(&self) -> Result<()> {
        for (name, value) in
            [("window_length", self.window_length), ("preview_length", self.preview_length)]
        {
            if !(1..=MAX_WINDOW_LENGTH).contains(&value) {
                return Err(Error::InvalidConfiguration { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self { window_length: DEFAULT_WINDOW_LENGTH, preview_length: DEFAULT_PREVIEW_LENGTH }
    }
}

/// Statistics from a compression call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Tokens emitted, excluding the configuration token
    pub tokens: u64,
    pub literal_tokens: u64,
    pub match_tokens: u64,
    /// Length of the Huffman-encoded bit string
    pub encoded_bits: u64,
    /// Distinct symbols in the code table
    pub alphabet_size: usize,
}

impl CompressionStats {
    /// Output size divided by input size (0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Percentage of the input size saved; negative when the output grew
    pub fn space_savings_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            100.0 - self.output_bytes as f64 * 100.0 / self.input_bytes as f64
        }
    }
}

/// Compress `input` with the default window geometry
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_with_config(input, &Lz77Config::default())
}

/// Compress `input` with an explicit window geometry
pub fn compress_with_config(input: &[u8], config: &Lz77Config) -> Result<Vec<u8>> {
    compress_with_stats(input, config).map(|(output, _)| output)
}

/// Compress `input`, also returning statistics about each stage
pub fn compress_with_stats(
    input: &[u8],
    config: &Lz77Config,
) -> Result<(Vec<u8>, CompressionStats)> {
    let matcher = lz77::tokens(input, config)?;
    let header = matcher.header();
    let tokens: Vec<Token> = matcher.collect();
    let literal_tokens = tokens.iter().filter(|t| t.is_literal()).count() as u64;

    let flat = lz77::flatten(header, tokens.iter().copied());
    debug!("lz77: {} bytes -> {} tokens, {} flat bytes", input.len(), tokens.len(), flat.len());

    let encoder = huffman::HuffmanEncoder::from_data(&flat);
    let encoded = encoder.encode(&flat)?;
    let output = container::pack(&encoded, encoder.table())?;

    let stats = CompressionStats {
        input_bytes: input.len() as u64,
        output_bytes: output.len() as u64,
        tokens: tokens.len() as u64,
        literal_tokens,
        match_tokens: tokens.len() as u64 - literal_tokens,
        encoded_bits: encoded.len() as u64,
        alphabet_size: encoder.table().len(),
    };

    info!(
        "compressed {} bytes to {} bytes ({:.2}% saved)",
        stats.input_bytes,
        stats.output_bytes,
        stats.space_savings_percent()
    );

    Ok((output, stats))
}

/// Restore the original bytes from a container produced by [`compress`]
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let (bits, table) = container::unpack(container)?;
    let flat = huffman::decode(&bits, &table)?;
    lz77::reconstruct(&flat)
}
