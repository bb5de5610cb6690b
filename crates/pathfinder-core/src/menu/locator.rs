//! Lookup of a node anywhere in a menu forest

use crate::domain::{MenuNode, Subtree};

/// First node whose id equals `target_id`, in depth-first pre-order,
/// left to right. Duplicate ids deeper in the tree are shadowed.
pub fn find_node<'a>(forest: &'a [MenuNode], target_id: &str) -> Option<&'a MenuNode> {
    let mut stack: Vec<&MenuNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id == target_id {
            return Some(node);
        }
        if let Some(children) = node.children() {
            stack.extend(children.iter().rev());
        }
    }
    None
}

/// Children to display for `target_id`. A link or an unknown id both
/// give an empty slice.
pub fn children_of<'a>(forest: &'a [MenuNode], target_id: &str) -> &'a [MenuNode] {
    find_node(forest, target_id)
        .and_then(MenuNode::children)
        .unwrap_or(&[])
}

pub fn locate_subtree(forest: &[MenuNode], target_id: &str) -> Subtree {
    match find_node(forest, target_id) {
        Some(node) => Subtree {
            children: node.children().map(<[MenuNode]>::to_vec).unwrap_or_default(),
            parent: Some(node.clone()),
        },
        None => Subtree::default(),
    }
}
