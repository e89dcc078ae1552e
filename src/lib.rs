//! Huffman coding of text.
//!
//! Counts the symbols of a text, greedily builds a Huffman tree from those counts, labels
//! every leaf with its path from the root and swaps each symbol of the text for its code.
//! The encoded result is a string of `0` and `1` characters; its packed size is reported
//! but no bytes are packed and there is no decoder.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::{filter_spaces, HuffmanEncoding};
//!
//! let text = filter_spaces("abra cadabra");
//! let enc = HuffmanEncoding::new(&text).unwrap();
//! assert_eq!(enc.codes().get('a'), Some("1"));
//! assert_eq!(enc.encoded().bit_len(), 23);
//! assert_eq!(enc.compressed_size(), 3);
//! ```
//!
//! From the command line:
//!
//! `$> huffcode -t "abra cadabra"`
//!
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::encode::HuffmanEncoding;
pub use error::{HuffmanError, Result};
pub use huffman_coding::code_table::{build_code_table, CodeTable};
pub use huffman_coding::encoder::{encode, EncodedOutput};
pub use huffman_coding::node::{Node, NodeData};
pub use huffman_coding::tree::build_tree;
pub use tools::filter::filter_spaces;
pub use tools::freq_count::{freqs, FrequencyTable};
