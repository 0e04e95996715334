//! Self-describing container holding a code table and an encoded bit string.
//!
//! ```text
//! [u32 BE] header length, counted after this field
//! [u8]     valid bits in the final byte of the packed codes
//! [u32 BE] alphabet table length in bytes
//! [..]     alphabet table: (symbol, code length) byte pairs
//! [..]     packed codes, concatenated in table order, MSB-first
//! ---- end of header ----
//! [u8]     valid bits in the final byte of the packed data
//! [..]     packed data, MSB-first
//! ```
//!
//! A "valid bits" count is 0 for an empty run and 1-8 otherwise. The valid
//! bits of a final partial byte sit in its low end.

pub mod packer;
pub mod unpacker;

pub use packer::pack;
pub use unpacker::unpack;

/// Size of each length field
pub const LENGTH_FIELD_BYTES: usize = 4;

/// Bytes per alphabet table entry
pub const ALPHABET_ENTRY_BYTES: usize = 2;

/// Longest code the one-byte length field can describe
pub const MAX_CODE_LENGTH: usize = u8::MAX as usize;
