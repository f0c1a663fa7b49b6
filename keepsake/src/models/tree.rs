use serde::{Deserialize, Serialize};

use super::{Profile, RelationshipKind};

/// One node of a built family tree.
///
/// Trees are built fresh per request by the tree builder and discarded after
/// serialization; nothing here is cached or incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeNode {
    pub profile: Profile,
    /// Connection tag linking this node to its parent. `None` for the root.
    pub relationship_to_parent: Option<RelationshipKind>,
    /// Distance from the root. Root = 0; increases by exactly 1 per level.
    pub depth: u32,
    /// Child nodes in the order the store returned their edges.
    pub children: Vec<FamilyTreeNode>,
}

impl FamilyTreeNode {
    pub fn new(
        profile: Profile,
        relationship_to_parent: Option<RelationshipKind>,
        depth: u32,
    ) -> Self {
        Self {
            profile,
            relationship_to_parent,
            depth,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Largest depth present in this subtree.
    pub fn max_depth(&self) -> u32 {
        let mut max = self.depth;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            max = max.max(node.depth);
            stack.extend(node.children.iter());
        }
        max
    }
}
