use log::debug;

use super::{unpack, ALPHABET_ENTRY_BYTES, LENGTH_FIELD_BYTES, MAX_CODE_LENGTH};
use crate::bits::{last_byte_bits, BitString, BitWriter, Bits};
use crate::error::{Error, Result};
use crate::huffman::CodeTable;

/// Serialize a code table and encoded bit string into a container
///
/// Fails if a code is empty or longer than [`MAX_CODE_LENGTH`] bits, or a
/// section outgrows its 32-bit length field. The result is parsed back
/// before returning and any disagreement with the inputs panics.
pub fn pack(bits: &Bits, table: &CodeTable) -> Result<Vec<u8>> {
    let mut alphabet = Vec::with_capacity(table.len() * ALPHABET_ENTRY_BYTES);
    let mut code_bits = BitString::with_capacity(table.total_code_bits());
    for (symbol, code) in table.iter() {
        if code.is_empty() || code.len() > MAX_CODE_LENGTH {
            return Err(Error::malformed(format!(
                "code for symbol 0x{:02x} has {} bits, container allows 1-{}",
                symbol,
                code.len(),
                MAX_CODE_LENGTH
            )));
        }
        alphabet.extend_from_slice(&[symbol, code.len() as u8]);
        code_bits.extend_from_bitslice(code);
    }

    let packed_code_len = (code_bits.len() + 7) / 8;
    let header_len = 1 + LENGTH_FIELD_BYTES + alphabet.len() + packed_code_len;
    let data_len = 1 + (bits.len() + 7) / 8;

    let mut writer = BitWriter::with_capacity(LENGTH_FIELD_BYTES + header_len + data_len);
    writer.write_u32_be(length_field(header_len, "header")?);
    writer.write_byte(last_byte_bits(code_bits.len()));
    writer.write_u32_be(length_field(alphabet.len(), "alphabet table")?);
    writer.write_bytes(&alphabet);
    writer.write_bits(&code_bits);
    writer.align_to_byte();
    writer.write_byte(last_byte_bits(bits.len()));
    writer.write_bits(bits);
    let output = writer.finish();

    debug_assert_eq!(output.len(), LENGTH_FIELD_BYTES + header_len + data_len);
    debug!(
        "container: {} symbols, {} header bytes, {} data bits, {} bytes total",
        table.len(),
        header_len,
        bits.len(),
        output.len()
    );

    verify(&output, bits, table);
    Ok(output)
}

fn length_field(len: usize, section: &str) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::malformed(format!("{} length {} exceeds 32 bits", section, len)))
}

/// Parse a freshly packed container and check it reproduces its inputs
fn verify(output: &[u8], bits: &Bits, table: &CodeTable) {
    match unpack(output) {
        Ok((unpacked_bits, unpacked_table)) => {
            assert!(unpacked_table == *table, "container self-check: code table mismatch");
            assert!(
                unpacked_bits.as_bitslice() == bits,
                "container self-check: data bits mismatch"
            );
        }
        Err(e) => panic!("container self-check: packed output does not parse: {}", e),
    }
}
