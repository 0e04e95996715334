use super::Bits;

/// Byte-oriented writer for the container format
///
/// Integers are written big-endian and bit runs are packed MSB-first,
/// 8 bits per byte. A final partial byte holds its bits in the low end,
/// zero-padded above.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self { output: Vec::new(), current_byte: 0, bits_in_byte: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0 }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte |= (bit as u8) << (7 - self.bits_in_byte);
        self.bits_in_byte += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write a run of bits in order, first bit into the MSB
    pub fn write_bits(&mut self, bits: &Bits) {
        if self.bits_in_byte == 0 {
            // Aligned: assemble whole bytes directly
            let mut chunks = bits.chunks_exact(8);
            for chunk in &mut chunks {
                let byte = chunk.iter().by_vals().fold(0u8, |acc, bit| (acc << 1) | bit as u8);
                self.output.push(byte);
            }
            for bit in chunks.remainder().iter().by_vals() {
                self.write_bit(bit);
            }
        } else {
            for bit in bits.iter().by_vals() {
                self.write_bit(bit);
            }
        }
    }

    /// Close the current partial byte, moving its bits to the low end
    pub fn align_to_byte(&mut self) {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte >> (8 - self.bits_in_byte));
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write a raw byte (must be byte-aligned)
    pub fn write_byte(&mut self, byte: u8) {
        debug_assert_eq!(self.bits_in_byte, 0, "write_byte requires byte alignment");
        self.output.push(byte);
    }

    /// Write a 32-bit value in big-endian
    pub fn write_u32_be(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Write raw bytes (must be byte-aligned)
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        debug_assert_eq!(self.bits_in_byte, 0, "write_bytes requires byte alignment");
        self.output.extend_from_slice(bytes);
    }

    /// Finish and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.output
    }

    /// Get current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len() + if self.bits_in_byte > 0 { 1 } else { 0 }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.bits_in_byte == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
