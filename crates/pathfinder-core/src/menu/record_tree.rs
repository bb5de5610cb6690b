// ============================================================================
// Pathfinder Core - Record Tree Builder
// File: crates/pathfinder-core/src/menu/record_tree.rs
// Description: Flat parent-referencing link records -> MenuNode forest
// ============================================================================

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::domain::{LinkRecord, MenuNode};

/// Builds the children of `parent_id` (`None` = root level), each with its
/// own children resolved recursively.
///
/// Records keep the order the storage returned them in. A submenu record
/// that is already an ancestor on the current path (a parent-reference
/// cycle) is emitted as a leaf link and not expanded again.
pub fn build_record_tree(links: &[LinkRecord], parent_id: Option<i32>) -> Vec<MenuNode> {
    let index = ChildIndex::new(links);
    let mut ancestors: HashSet<i32> = parent_id.into_iter().collect();
    index.build(parent_id, &mut ancestors)
}

/// `parent_id -> children` in input order, built in one pass.
struct ChildIndex<'a> {
    by_parent: HashMap<Option<i32>, Vec<&'a LinkRecord>>,
}

impl<'a> ChildIndex<'a> {
    fn new(links: &'a [LinkRecord]) -> Self {
        let mut by_parent: HashMap<Option<i32>, Vec<&'a LinkRecord>> = HashMap::new();
        for link in links {
            by_parent.entry(link.parent_id).or_default().push(link);
        }
        Self { by_parent }
    }

    fn children_of(&self, parent_id: Option<i32>) -> &[&'a LinkRecord] {
        self.by_parent.get(&parent_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn build(&self, parent_id: Option<i32>, ancestors: &mut HashSet<i32>) -> Vec<MenuNode> {
        let mut nodes = Vec::new();
        for link in self.children_of(parent_id) {
            let node = if link.submenu && ancestors.insert(link.id) {
                let children = self.build(Some(link.id), ancestors);
                ancestors.remove(&link.id);
                MenuNode::submenu(link.id.to_string(), &link.title, children)
            } else {
                if link.submenu {
                    warn!("Link {} is its own ancestor; rendering it without children", link.id);
                }
                MenuNode::link(link.id.to_string(), &link.title, non_empty(&link.url))
            };
            nodes.push(node.annotated(
                non_empty(&link.description),
                non_empty(&link.password),
                non_empty(&link.disclaimer),
            ));
        }
        nodes
    }
}

/// Storage may hold empty strings where nothing was entered.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
