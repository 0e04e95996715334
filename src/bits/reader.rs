use super::BitString;
use crate::error::{Error, Result};

/// Bounds-checked reader over a container buffer
///
/// Every read names the field it is reading so a short buffer is reported
/// as a malformed container rather than a panic.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next read position in bytes
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read a single byte
    pub fn read_u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.read_bytes(1, field)?[0])
    }

    /// Read a 32-bit big-endian value
    pub fn read_u32_be(&mut self, field: &str) -> Result<u32> {
        let bytes = self.read_bytes(4, field)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read exactly `n` bytes
    pub fn read_bytes(&mut self, n: usize, field: &str) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::malformed(format!(
                "{} needs {} bytes at offset {}, only {} available",
                field,
                n,
                self.pos,
                self.remaining()
            )));
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Consume everything left in the buffer
    pub fn read_rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.pos..];
        self.pos = self.data.len();
        bytes
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current position in bytes
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Expand a packed run back into bits
///
/// `last_bits` is the number of valid bits in the final byte: 0 for an
/// empty run, 1-8 otherwise. Those bits sit in the low end of the final
/// byte; the padding bits above them are ignored.
pub fn unpack_run(bytes: &[u8], last_bits: u8, field: &str) -> Result<BitString> {
    let Some((&last, full)) = bytes.split_last() else {
        if last_bits != 0 {
            return Err(Error::malformed(format!(
                "{} is empty but its final byte claims {} valid bits",
                field, last_bits
            )));
        }
        return Ok(BitString::new());
    };

    if !(1..=8).contains(&last_bits) {
        return Err(Error::malformed(format!(
            "{} final byte bit count {} out of range 1-8",
            field, last_bits
        )));
    }

    let mut bits = BitString::from_slice(full);
    for shift in (0..last_bits).rev() {
        bits.push((last >> shift) & 1 == 1);
    }
    Ok(bits)
}
