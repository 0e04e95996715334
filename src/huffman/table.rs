use std::collections::BTreeMap;

use bitvec::prelude::*;

use super::tree::{FrequencyTable, HuffmanTree};
use crate::bits::{BitString, Bits};

/// Mapping from symbol to its prefix code
///
/// Iterates in ascending symbol order, which is also the order in which
/// the container serializes the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitString>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive codes from root-to-leaf paths
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::new();
        match tree {
            // A zero-length code cannot be decoded; give the lone symbol "0"
            HuffmanTree::Leaf { symbol, .. } => {
                table.insert(*symbol, bitvec![u8, Msb0; 0]);
            }
            HuffmanTree::Node { .. } => {
                let mut path = BitString::new();
                table.assign(tree, &mut path);
            }
        }
        table
    }

    /// Count `data`, build its tree and derive the codes
    pub fn from_bytes(data: &[u8]) -> Self {
        HuffmanTree::build(&FrequencyTable::from_bytes(data))
            .map(|tree| Self::from_tree(&tree))
            .unwrap_or_default()
    }

    fn assign(&mut self, node: &HuffmanTree, path: &mut BitString) {
        match node {
            HuffmanTree::Leaf { symbol, .. } => {
                self.insert(*symbol, path.clone());
            }
            HuffmanTree::Node { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();
                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    /// Insert or replace the code for `symbol`
    pub fn insert(&mut self, symbol: u8, code: BitString) -> Option<BitString> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Bits> {
        self.codes.get(&symbol).map(BitString::as_bitslice)
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.codes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Bits)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Length of the longest code (0 for an empty table)
    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Sum of all code lengths
    pub fn total_code_bits(&self) -> usize {
        self.codes.values().map(|code| code.len()).sum()
    }

    /// Whether no code is a prefix of (or equal to) another
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Bits> = self.codes.values().map(BitString::as_bitslice).collect();
        codes.sort_unstable();
        // Any prefix sorts directly before some code that extends it
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}
