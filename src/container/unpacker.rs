use super::ALPHABET_ENTRY_BYTES;
use crate::bits::reader::unpack_run;
use crate::bits::{BitReader, BitString};
use crate::error::{Error, Result};
use crate::huffman::CodeTable;

/// Parse a container into its encoded bit string and code table
pub fn unpack(container: &[u8]) -> Result<(BitString, CodeTable)> {
    let mut reader = BitReader::new(container);
    let header_len = reader.read_u32_be("header length")? as usize;
    let header = reader.read_bytes(header_len, "header")?;

    let table = parse_header(header)?;

    let last_data_bits = reader.read_u8("data bit count")?;
    let bits = unpack_run(reader.read_rest(), last_data_bits, "packed data")?;

    Ok((bits, table))
}

fn parse_header(header: &[u8]) -> Result<CodeTable> {
    let mut reader = BitReader::new(header);
    let last_code_bits = reader.read_u8("code bit count")?;
    let alphabet_len = reader.read_u32_be("alphabet table length")? as usize;
    if alphabet_len % ALPHABET_ENTRY_BYTES != 0 {
        return Err(Error::malformed(format!(
            "alphabet table length {} is not a whole number of entries",
            alphabet_len
        )));
    }
    let alphabet = reader.read_bytes(alphabet_len, "alphabet table")?;
    let code_bits = unpack_run(reader.read_rest(), last_code_bits, "packed codes")?;

    let declared: usize = alphabet.chunks_exact(ALPHABET_ENTRY_BYTES).map(|e| e[1] as usize).sum();
    if declared != code_bits.len() {
        return Err(Error::malformed(format!(
            "alphabet table declares {} code bits, packed codes hold {}",
            declared,
            code_bits.len()
        )));
    }

    let mut table = CodeTable::new();
    let mut cursor = 0;
    for entry in alphabet.chunks_exact(ALPHABET_ENTRY_BYTES) {
        let (symbol, len) = (entry[0], entry[1] as usize);
        if len == 0 {
            return Err(Error::malformed(format!("zero-length code for symbol 0x{:02x}", symbol)));
        }
        if table.contains(symbol) {
            return Err(Error::malformed(format!("symbol 0x{:02x} listed twice", symbol)));
        }
        table.insert(symbol, code_bits[cursor..cursor + len].to_bitvec());
        cursor += len;
    }

    Ok(table)
}
