use log::debug;

use super::table::CodeTable;
use crate::bits::BitString;
use crate::error::{Error, Result};

/// Huffman encoder over a fixed code table
pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(table: CodeTable) -> Self {
        Self { table }
    }

    /// Build the code table from the data that will be encoded
    pub fn from_data(data: &[u8]) -> Self {
        Self::new(CodeTable::from_bytes(data))
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn into_table(self) -> CodeTable {
        self.table
    }

    /// Replace each byte with its code, concatenated in input order
    pub fn encode(&self, data: &[u8]) -> Result<BitString> {
        let bits = encode(data, &self.table)?;
        debug!("huffman: {} bytes -> {} bits", data.len(), bits.len());
        Ok(bits)
    }
}

/// Encode `data` with an externally supplied table
pub fn encode(data: &[u8], table: &CodeTable) -> Result<BitString> {
    let mut bits = BitString::with_capacity(data.len() * 2);
    for &byte in data {
        let code = table.get(byte).ok_or(Error::MissingCode(byte))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}
