//! Greedy construction of the Huffman tree from a frequency table.
//!
//! Nodes wait in a priority queue keyed on weight. The two lightest are pulled off, joined
//! under a new parent and the parent goes back in, until a single tree is left.
//!
//! Ties between equal weights go to whichever node entered the queue first. Leaves enter in
//! the order their symbols were first seen, and every joined node enters after everything
//! already queued. Of each pulled pair the first one becomes the right child (`1`), the second
//! the left child (`0`).
//!
//! Each step depends on the queue left by the step before, so this is strictly sequential.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, info};

use super::node::Node;
use crate::error::{HuffmanError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A node waiting in the queue, stamped with its arrival order.
#[derive(Debug)]
struct Queued {
    node: Node,
    seq: usize,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    /// Sort by decreasing weight, then decreasing arrival, so the max-heap pops the lightest
    /// and oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build a Huffman tree from the frequency table and return its root.
///
/// A table with a single symbol gives a leaf wrapped in a left-only parent, so the
/// symbol is coded as `0` rather than the empty string.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Node> {
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut queue = freqs
        .iter()
        .enumerate()
        .map(|(seq, (sym, count))| Queued {
            node: Node::leaf(sym, count),
            seq,
        })
        .collect::<BinaryHeap<_>>();
    let mut next_seq = queue.len();

    // Pare the forest down to a single tree.
    while queue.len() > 1 {
        if let (Some(first), Some(second)) = (queue.pop(), queue.pop()) {
            let (first, second) = (first.node, second.node);
            debug!(
                "joining {:?} ({}) and {:?} ({})",
                second.label, second.weight, first.label, first.weight
            );
            queue.push(Queued {
                node: Node::join(second, first),
                seq: next_seq,
            });
            next_seq += 1;
        }
    }

    let root = queue.pop().map(|q| q.node).ok_or(HuffmanError::EmptyInput)?;
    info!(
        "Huffman tree built: {} symbols, total weight {}",
        freqs.len(),
        root.weight
    );

    if root.is_leaf() {
        return Ok(Node::wrap(root));
    }
    Ok(root)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::node::NodeData;
    use crate::tools::freq_count::freqs;

    #[test]
    fn empty_table_test() {
        assert_eq!(build_tree(&FrequencyTable::new()), Err(HuffmanError::EmptyInput));
    }

    #[test]
    fn singleton_is_wrapped_test() {
        let root = build_tree(&freqs("aaaa")).unwrap();
        assert_eq!(root.weight, 4);
        match &root.node_data {
            NodeData::Wrap(leaf) => assert_eq!(leaf.symbol(), Some('a')),
            other => panic!("expected a wrapped leaf, got {:?}", other),
        }
    }

    #[test]
    fn two_symbols_test() {
        let root = build_tree(&freqs("aabb")).unwrap();
        assert_eq!(root.weight, 4);
        assert_eq!(root.leaf_count(), 2);
        // 'a' entered the queue first, so it is pulled first and lands on the right.
        assert_eq!(root.left().and_then(Node::symbol), Some('b'));
        assert_eq!(root.right().and_then(Node::symbol), Some('a'));
        assert_eq!(root.label, "ba");
    }

    #[test]
    fn abracadabra_test() {
        let root = build_tree(&freqs("abracadabra")).unwrap();
        assert_eq!(root.weight, 11);
        assert_eq!(root.leaf_count(), 5);
        assert_eq!(root.label, "rbdca");
        assert_eq!(root.right().and_then(Node::symbol), Some('a'));
        let left = root.left().unwrap();
        assert_eq!(left.weight, 6);
        assert_eq!(left.label, "rbdc");
    }

    #[test]
    fn internal_nodes_sum_children_test() {
        fn check(node: &Node) {
            if let NodeData::Kids(left, right) = &node.node_data {
                assert_eq!(node.weight, left.weight + right.weight);
                check(left);
                check(right);
            }
        }
        let text = "it was the best of times, it was the worst of times";
        let root = build_tree(&freqs(text)).unwrap();
        assert_eq!(root.weight, text.chars().count() as u64);
        check(&root);
    }

    #[test]
    fn heap_order_test() {
        let mut heap = BinaryHeap::new();
        heap.push(Queued { node: Node::leaf('x', 3), seq: 0 });
        heap.push(Queued { node: Node::leaf('y', 1), seq: 2 });
        heap.push(Queued { node: Node::leaf('z', 1), seq: 1 });
        let order = std::iter::from_fn(|| heap.pop())
            .map(|q| q.node.label)
            .collect::<String>();
        assert_eq!(order, "zyx");
    }

    #[test]
    fn wide_alphabet_test() {
        // Every merge step must consume two nodes, leaving exactly one root.
        let text = (0..300u32)
            .filter_map(|i| char::from_u32(0x100 + i))
            .flat_map(|c| std::iter::repeat(c).take(1 + (c as usize % 7)))
            .collect::<String>();
        let root = build_tree(&freqs(&text)).unwrap();
        assert_eq!(root.leaf_count(), 300);
        assert_eq!(root.weight, text.chars().count() as u64);
        assert!(root.right().is_some());
    }
}
