pub mod decoder;
pub mod encoder;
pub mod table;
pub mod tree;

pub use decoder::{decode, HuffmanDecoder};
pub use encoder::{encode, HuffmanEncoder};
pub use table::CodeTable;
pub use tree::{FrequencyTable, HuffmanTree};
