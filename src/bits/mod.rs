pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

use bitvec::prelude::{BitSlice, BitVec, Msb0};

/// Bit string used for Huffman codes and the encoded payload
///
/// Bit 0 is the most significant bit of the first byte, matching the
/// order in which runs are packed into the container.
pub type BitString = BitVec<u8, Msb0>;

/// Borrowed view of a [`BitString`]
pub type Bits = BitSlice<u8, Msb0>;

/// Number of valid bits in the final byte of a packed run of `len` bits
///
/// Returns 0 for an empty run and 1-8 otherwise.
pub fn last_byte_bits(len: usize) -> u8 {
    if len == 0 {
        0
    } else {
        ((len - 1) % 8) as u8 + 1
    }
}
