use log::debug;

use super::table::CodeTable;
use crate::bits::Bits;
use crate::error::{Error, Result};

/// Child slot of a trie node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Empty,
    Branch(usize),
    Leaf(u8),
}

/// Prefix-code decoder
///
/// Codes are loaded into a binary trie, so each input bit is one step
/// and a symbol is emitted as soon as a leaf is reached.
pub struct HuffmanDecoder {
    /// `nodes[i][bit]`; node 0 is the root
    nodes: Vec<[Slot; 2]>,
}

impl HuffmanDecoder {
    /// Build from a code table, rejecting tables that are not prefix-free
    pub fn from_table(table: &CodeTable) -> Result<Self> {
        let mut nodes = vec![[Slot::Empty; 2]];

        for (symbol, code) in table.iter() {
            let Some((last, path)) = code.split_last() else {
                return Err(Error::malformed(format!("empty code for symbol 0x{:02x}", symbol)));
            };

            let mut node = 0;
            for bit in path.iter().by_vals() {
                node = match nodes[node][bit as usize] {
                    Slot::Branch(next) => next,
                    Slot::Empty => {
                        nodes.push([Slot::Empty; 2]);
                        let next = nodes.len() - 1;
                        nodes[node][bit as usize] = Slot::Branch(next);
                        next
                    }
                    Slot::Leaf(other) => return Err(prefix_conflict(symbol, other)),
                };
            }

            match nodes[node][*last as usize] {
                Slot::Empty => nodes[node][*last as usize] = Slot::Leaf(symbol),
                Slot::Leaf(other) => return Err(prefix_conflict(symbol, other)),
                Slot::Branch(_) => {
                    return Err(Error::malformed(format!(
                        "code for symbol 0x{:02x} is a prefix of another code",
                        symbol
                    )))
                }
            }
        }

        Ok(Self { nodes })
    }

    /// Decode a bit string into symbols
    pub fn decode(&self, bits: &Bits) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(bits.len() / 4);
        let mut node = 0;
        let mut code_start = 0;

        for (pos, bit) in bits.iter().by_vals().enumerate() {
            match self.nodes[node][bit as usize] {
                Slot::Branch(next) => node = next,
                Slot::Leaf(symbol) => {
                    output.push(symbol);
                    node = 0;
                    code_start = pos + 1;
                }
                Slot::Empty => {
                    return Err(Error::malformed(format!(
                        "no code matches the bits at position {}",
                        code_start
                    )))
                }
            }
        }

        if node != 0 {
            return Err(Error::malformed(format!(
                "bit stream ends inside a code starting at position {}",
                code_start
            )));
        }

        debug!("huffman: {} bits -> {} bytes", bits.len(), output.len());
        Ok(output)
    }
}

fn prefix_conflict(symbol: u8, other: u8) -> Error {
    Error::malformed(format!(
        "codes for symbols 0x{:02x} and 0x{:02x} are not prefix-free",
        other, symbol
    ))
}

/// Decode `bits` with the table they were encoded with
pub fn decode(bits: &Bits, table: &CodeTable) -> Result<Vec<u8>> {
    HuffmanDecoder::from_table(table)?.decode(bits)
}
