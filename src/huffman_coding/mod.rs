//! The huffman module turns symbol frequencies into a prefix-free code and applies it.
//!
//! - node: the tree node shared by the other stages.
//! - tree: greedy construction of the tree from a frequency table.
//! - code_table: path-to-leaf labelling of the tree into a code table.
//! - encoder: replaces each symbol of a text with its code.
//!
//! Every stage is a pure function of its input and none of them changes what the stage
//! before handed over.
//!

pub mod code_table;
pub mod encoder;
pub mod node;
pub mod tree;
