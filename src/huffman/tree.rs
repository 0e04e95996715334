use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Occurrence count for each byte value of one input buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.add(byte);
        }
        table
    }

    #[inline]
    pub fn add(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of symbols with a non-zero count
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Symbols with a non-zero count, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().enumerate().filter(|(_, &c)| c > 0).map(|(s, &c)| (s as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Huffman code tree
///
/// Every internal node has exactly two children. Following the left edge
/// emits a 0 bit and the right edge a 1 bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffmanTree {
    Leaf { symbol: u8, weight: u64 },
    Node { weight: u64, left: Box<HuffmanTree>, right: Box<HuffmanTree> },
}

/// Heap entry ordered by weight, then by insertion order
struct Pending {
    weight: u64,
    order: u64,
    tree: HuffmanTree,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Pending {}
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.order).cmp(&(other.weight, other.order))
    }
}

impl HuffmanTree {
    /// Build a tree from symbol frequencies
    ///
    /// Returns `None` when no symbol occurs. A single distinct symbol yields
    /// a lone leaf; the code table gives it a one-bit code.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        if frequencies.is_empty() {
            return None;
        }

        let mut heap: BinaryHeap<Reverse<Pending>> = frequencies
            .iter()
            .enumerate()
            .map(|(order, (symbol, weight))| {
                Reverse(Pending {
                    weight,
                    order: order as u64,
                    tree: HuffmanTree::Leaf { symbol, weight },
                })
            })
            .collect();
        let mut order = heap.len() as u64;

        // Build tree by combining lowest weight nodes
        loop {
            let Reverse(left) = heap.pop()?;
            let Some(Reverse(right)) = heap.pop() else {
                return Some(left.tree);
            };

            let weight = left.weight + right.weight;
            heap.push(Reverse(Pending {
                weight,
                order,
                tree: HuffmanTree::Node {
                    weight,
                    left: Box::new(left.tree),
                    right: Box::new(right.tree),
                },
            }));
            order += 1;
        }
    }

    /// Sum of the weights of all leaves below this node
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanTree::Leaf { weight, .. } | HuffmanTree::Node { weight, .. } => *weight,
        }
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanTree::Leaf { .. } => 1,
            HuffmanTree::Node { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
