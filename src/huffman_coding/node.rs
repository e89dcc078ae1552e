/// What a node holds below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// A single input symbol.
    Leaf(char),
    /// Two subtrees: left (`0`) and right (`1`).
    Kids(Box<Node>, Box<Node>),
    /// A left-only parent over a lone leaf. Only built for single-symbol inputs,
    /// so that symbol still gets a one bit code.
    Wrap(Box<Node>),
}

/// A node of the Huffman tree. Children are owned, so the tree is built once and
/// then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Summed frequency of every symbol below this node.
    pub weight: u64,
    /// The leaf symbol, or the symbols of the subtree in merge order. Display only.
    pub label: String,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(sym: char, weight: u64) -> Node {
        Node {
            weight,
            label: sym.to_string(),
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Join two subtrees under a new parent. The parent label is `left` then `right`.
    pub fn join(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            label: format!("{}{}", left.label, right.label),
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    /// Put a left-only parent over `child`.
    pub fn wrap(child: Node) -> Node {
        Node {
            weight: child.weight,
            label: child.label.clone(),
            node_data: NodeData::Wrap(Box::new(child)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    pub fn symbol(&self) -> Option<char> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, _) | NodeData::Wrap(left) => Some(&**left),
            NodeData::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(_, right) => Some(&**right),
            _ => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Leaf(_) => 1,
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Wrap(child) => child.leaf_count(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn join_test() {
        let node = Node::join(Node::leaf('b', 2), Node::leaf('a', 1));
        assert_eq!(node.weight, 3);
        assert_eq!(node.label, "ba");
        assert!(!node.is_leaf());
        assert_eq!(node.left().and_then(Node::symbol), Some('b'));
        assert_eq!(node.right().and_then(Node::symbol), Some('a'));
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn wrap_test() {
        let node = Node::wrap(Node::leaf('a', 4));
        assert_eq!(node.weight, 4);
        assert!(!node.is_leaf());
        assert_eq!(node.left().and_then(Node::symbol), Some('a'));
        assert!(node.right().is_none());
        assert_eq!(node.leaf_count(), 1);
    }
}
