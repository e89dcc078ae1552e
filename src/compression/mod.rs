//! The compression module runs the full encoding pipeline.
//!
//! Encoding happens in the following steps:
//! - Frequency count: how often each symbol occurs in the text.
//! - Tree build: greedily join the two lightest subtrees until one tree is left.
//! - Code table: label each leaf with its path from the root.
//! - Encode: swap every symbol of the text for its code.
//!
//! The text is expected to be filtered already (see `tools::filter`). There is no decoding
//! side.
//!

pub mod encode;
