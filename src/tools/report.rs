use crate::compression::encode::HuffmanEncoding;
use crate::huffman_coding::node::{Node, NodeData};
use crate::tools::cli::HuffOpts;

/// One line of the code table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub symbol: char,
    pub freq: u64,
    pub code: String,
    pub length: usize,
}

/// Code table rows, shortest codes first. Equal lengths keep the code table order.
pub fn code_rows(enc: &HuffmanEncoding) -> Vec<CodeRow> {
    let mut rows = enc
        .codes()
        .iter()
        .map(|(symbol, code)| CodeRow {
            symbol,
            freq: enc.frequencies().get(symbol).unwrap_or(0),
            code: code.to_string(),
            length: code.len(),
        })
        .collect::<Vec<_>>();
    rows.sort_by_key(|row| row.length);
    rows
}

/// Render the code table as aligned text columns.
pub fn render_table(enc: &HuffmanEncoding) -> String {
    let rows = code_rows(enc);
    let width = rows.iter().map(|r| r.length).max().unwrap_or(0).max(4);
    let mut out = format!("{:<6} {:>8}  {:<width$} {:>6}\n", "char", "freq", "code", "length");
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:>8}  {:<width$} {:>6}\n",
            format!("{:?}", row.symbol),
            row.freq,
            row.code,
            row.length
        ));
    }
    out
}

/// Render the tree as an indented outline. Each line starts with the edge bit that led to it.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    print_node(root, 0, "root", &mut out);
    out
}

fn print_node(node: &Node, depth: usize, edge: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match &node.node_data {
        NodeData::Leaf(sym) => {
            out.push_str(&format!("{}{}-> {:?} [weight: {}]\n", indent, edge, sym, node.weight));
        }
        NodeData::Kids(left, right) => {
            out.push_str(&format!("{}{}-> {:?} [weight: {}]\n", indent, edge, node.label, node.weight));
            print_node(left, depth + 1, "0", out);
            print_node(right, depth + 1, "1", out);
        }
        NodeData::Wrap(child) => {
            out.push_str(&format!("{}{}-> {:?} [weight: {}]\n", indent, edge, node.label, node.weight));
            print_node(child, depth + 1, "0", out);
        }
    }
}

/// Everything the command line prints for one encoding. Quiet mode is the bits alone;
/// otherwise the sizes and bits, then the table and tree views when asked for.
pub fn render_output(enc: &HuffmanEncoding, opts: &HuffOpts) -> String {
    if opts.quiet {
        return format!("{}\n", enc.encoded());
    }

    let mut out = format!(
        "Input size:  {} characters\nOutput size: {} bytes\nEncoded:     {}\n",
        enc.input_len(),
        enc.compressed_size(),
        enc.encoded()
    );
    if opts.show_table {
        out.push('\n');
        out.push_str(&render_table(enc));
    }
    if opts.show_tree {
        out.push('\n');
        out.push_str(&render_tree(enc.tree()));
    }
    out
}
