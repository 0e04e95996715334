use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // LZ77 token stream errors
    #[error("Corrupt token stream at token {token}: {reason}")]
    CorruptStream { token: usize, reason: String },

    // Container errors
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    // Huffman errors
    #[error("No Huffman code for symbol 0x{0:02x}")]
    MissingCode(u8),

    // Configuration errors
    #[error("Invalid {name}: {value} (must be between 1 and 255)")]
    InvalidConfiguration { name: &'static str, value: usize },
}

impl Error {
    /// Whether this error reports a damaged LZ77 token stream
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(self, Self::CorruptStream { .. })
    }

    pub(crate) fn corrupt(token: usize, reason: impl Into<String>) -> Self {
        Self::CorruptStream { token, reason: reason.into() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedContainer(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
