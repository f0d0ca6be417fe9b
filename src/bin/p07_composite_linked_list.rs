//! Pattern 7: Composite
//! Example: Leaf values and node chains behind one Node interface
//!
//! Run with: cargo run --bin p07_composite_linked_list

use std::fmt;

pub trait Node: fmt::Display {}

/// A single value.
pub struct LeafNode {
    pub value: i64,
}

impl LeafNode {
    pub fn new(value: i64) -> Self {
        LeafNode { value }
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Node for LeafNode {}

/// A chain of nodes. A child may itself be a chain, and printing either a
/// leaf or a chain goes through the same Node interface.
pub struct CompositeNode {
    children: Vec<Box<dyn Node>>,
}

impl CompositeNode {
    pub fn new() -> Self {
        CompositeNode {
            children: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: Box<dyn Node>) {
        self.children.push(node);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for CompositeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.children.iter().map(|child| child.to_string()).collect();
        write!(f, "{}", rendered.join(" --> "))
    }
}

impl Node for CompositeNode {}

fn main() {
    println!("=== Composite nodes rendered as a linked list ===\n");
    let mut list = CompositeNode::new();
    list.add_node(Box::new(LeafNode::new(1)));
    list.add_node(Box::new(LeafNode::new(2)));
    println!("{}", list);

    let mut tail = CompositeNode::new();
    tail.add_node(Box::new(LeafNode::new(3)));
    tail.add_node(Box::new(LeafNode::new(4)));
    println!("{}", tail);

    list.add_node(Box::new(tail));
    println!("{}", list);
}
