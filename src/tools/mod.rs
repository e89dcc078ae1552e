//! The tools module provides the helpers around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface and runtime options.
//! - filter: Strips spaces and newlines from user text before it is encoded.
//! - freq_count: Frequency count of the symbols in a text.
//! - report: Text views of the code table and the tree.
//!
pub mod cli;
pub mod filter;
pub mod freq_count;
pub mod report;
