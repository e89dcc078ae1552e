use log::info;

use crate::error::{HuffmanError, Result};
use crate::huffman_coding::code_table::{build_code_table, CodeTable};
use crate::huffman_coding::encoder::{encode, EncodedOutput};
use crate::huffman_coding::node::Node;
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::{freqs, FrequencyTable};

/// Everything one run of the pipeline produces, handed over as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanEncoding {
    freqs: FrequencyTable,
    tree: Node,
    codes: CodeTable,
    encoded: EncodedOutput,
}

impl HuffmanEncoding {
    /// Run the whole pipeline over already filtered text:
    /// text → frequencies → tree → code table → encoded bits.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let freqs = freqs(text);
        let tree = build_tree(&freqs)?;
        let codes = build_code_table(&tree);
        let encoded = encode(text, &codes)?;

        info!(
            "Encoded {} symbols ({} distinct) into {} bits ({} bytes)",
            freqs.total(),
            freqs.len(),
            encoded.bit_len(),
            encoded.byte_len()
        );

        Ok(Self {
            freqs,
            tree,
            codes,
            encoded,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn encoded(&self) -> &EncodedOutput {
        &self.encoded
    }

    /// Number of symbols that went in.
    pub fn input_len(&self) -> u64 {
        self.freqs.total()
    }

    /// Size of the encoded bits in whole bytes.
    pub fn compressed_size(&self) -> usize {
        self.encoded.byte_len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_test() {
        assert_eq!(HuffmanEncoding::new(""), Err(HuffmanError::EmptyInput));
    }

    #[test]
    fn singleton_test() {
        let enc = HuffmanEncoding::new("aaaa").unwrap();
        assert_eq!(enc.frequencies().iter().collect::<Vec<_>>(), vec![('a', 4)]);
        assert_eq!(enc.codes().iter().collect::<Vec<_>>(), vec![('a', "0")]);
        assert_eq!(enc.encoded().as_str(), "0000");
        assert_eq!(enc.compressed_size(), 1);
    }

    #[test]
    fn abracadabra_test() {
        let enc = HuffmanEncoding::new("abracadabra").unwrap();
        assert_eq!(enc.input_len(), 11);
        assert_eq!(enc.tree().weight, 11);
        assert!(enc.encoded().bit_len() <= 11 * 3);
        assert_eq!(enc.encoded().bit_len(), 23);
        assert_eq!(enc.compressed_size(), 3);
    }

    #[test]
    fn deterministic_test() {
        let text = "peter_piper_picked_a_peck_of_pickled_peppers";
        let first = HuffmanEncoding::new(text).unwrap();
        let second = HuffmanEncoding::new(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_runs_test() {
        let texts = ["mississippi", "banana", "abracadabra", "zzz"];
        let handles = texts
            .iter()
            .map(|&t| std::thread::spawn(move || HuffmanEncoding::new(t).unwrap()))
            .collect::<Vec<_>>();
        for (handle, text) in handles.into_iter().zip(texts) {
            assert_eq!(handle.join().unwrap(), HuffmanEncoding::new(text).unwrap());
        }
    }
}
