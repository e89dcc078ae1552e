use log::trace;
use rustc_hash::FxHashMap;

use super::node::{Node, NodeData};

/// Symbol to code lookup. Codes are strings of `'0'` and `'1'` and no code is a
/// prefix of another. Entries keep the left-to-right leaf order of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
    index: FxHashMap<char, usize>,
}

impl CodeTable {
    pub fn get(&self, sym: char) -> Option<&str> {
        self.index.get(&sym).map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (symbol, code) pairs in tree order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries.iter().map(|(sym, code)| (*sym, code.as_str()))
    }

    fn insert(&mut self, sym: char, code: String) {
        trace!("code for {:?}: {}", sym, code);
        self.index.insert(sym, self.entries.len());
        self.entries.push((sym, code));
    }
}

/// Walk the tree and label every leaf with its path from the root: `0` for each step
/// left, `1` for each step right.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();
    return_leaves(root, &mut String::new(), &mut table);
    table
}

/// Recursively walk the tree, left before right, recording the path taken to each leaf.
/// Alphabets are at most a few thousand symbols, so the recursion stays shallow enough.
fn return_leaves(node: &Node, path: &mut String, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(sym) => table.insert(*sym, path.clone()),
        NodeData::Kids(left, right) => {
            descend(left, '0', path, table);
            descend(right, '1', path, table);
        }
        NodeData::Wrap(child) => descend(child, '0', path, table),
    }
}

fn descend(node: &Node, bit: char, path: &mut String, table: &mut CodeTable) {
    path.push(bit);
    return_leaves(node, path, table);
    path.pop();
}
