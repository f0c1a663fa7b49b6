use std::collections::HashSet;
use std::sync::Arc;

use crate::db::ConnectionStore;
use crate::error::{KeepsakeError, Result};
use crate::models::{FamilyTreeNode, Profile, RelationshipKind};

/// Builds a bounded-depth, cycle-free tree view of a profile's connection
/// graph.
///
/// Cycles are guarded per branch: an edge is dropped only when it points back
/// to a profile already on the path from the root to the node being expanded.
/// The same profile reached through two disjoint paths appears once under
/// each — a person can hold distinct relationships into the same family.
#[derive(Clone)]
pub struct FamilyTreeBuilder {
    store: Arc<dyn ConnectionStore>,
}

/// Worklist entry: a node already placed in the arena whose children still
/// need to be fetched.
struct PendingExpansion {
    node: usize,
    profile_id: String,
    depth: u32,
    /// Profile ids on the root-to-node path, this entry's copy. Branches
    /// never share a chain after forking.
    ancestors: HashSet<String>,
}

/// Arena node; children hold arena indices until assembly.
struct FlatNode {
    profile: Profile,
    relationship_to_parent: Option<RelationshipKind>,
    depth: u32,
    children: Vec<usize>,
}

impl FamilyTreeBuilder {
    pub fn new(store: Arc<dyn ConnectionStore>) -> Self {
        Self { store }
    }

    /// Expand `root`'s connection graph into a tree, at most `max_depth`
    /// edges deep. `max_depth == 0` yields the root alone.
    ///
    /// One store read per expanded node, issued sequentially; nodes at the
    /// depth cap are kept as leaves without consulting the store. Any store
    /// failure aborts the whole build — no partial trees.
    pub async fn build_tree(&self, root: Profile, max_depth: u32) -> Result<FamilyTreeNode> {
        let root_id = root.id.clone();
        let mut arena = vec![FlatNode {
            profile: root,
            relationship_to_parent: None,
            depth: 0,
            children: Vec::new(),
        }];

        let mut worklist = vec![PendingExpansion {
            node: 0,
            profile_id: root_id.clone(),
            depth: 0,
            ancestors: HashSet::from([root_id]),
        }];

        while let Some(pending) = worklist.pop() {
            if pending.depth >= max_depth {
                // Leaf by depth cap, not by graph structure.
                continue;
            }

            let edges = self.store.connections_for(&pending.profile_id).await?;
            tracing::debug!(
                profile_id = %pending.profile_id,
                depth = pending.depth,
                edges = edges.len(),
                "Expanding tree node"
            );

            for edge in edges {
                if pending.ancestors.contains(&edge.profile.id) {
                    tracing::trace!(
                        profile_id = %edge.profile.id,
                        "Dropping edge back into the current branch"
                    );
                    continue;
                }

                let mut ancestors = pending.ancestors.clone();
                ancestors.insert(edge.profile.id.clone());

                let child = arena.len();
                let profile_id = edge.profile.id.clone();
                arena.push(FlatNode {
                    profile: edge.profile,
                    relationship_to_parent: Some(edge.kind),
                    depth: pending.depth + 1,
                    children: Vec::new(),
                });
                arena[pending.node].children.push(child);
                worklist.push(PendingExpansion {
                    node: child,
                    profile_id,
                    depth: pending.depth + 1,
                    ancestors,
                });
            }
        }

        assemble(arena)
    }
}

/// Fold the flat arena into a nested tree. A child's arena index is always
/// greater than its parent's, so one reverse pass moves every node into its
/// parent before the parent itself moves.
fn assemble(arena: Vec<FlatNode>) -> Result<FamilyTreeNode> {
    let mut children_of: Vec<Vec<usize>> = Vec::with_capacity(arena.len());
    let mut built: Vec<Option<FamilyTreeNode>> = arena
        .into_iter()
        .map(|flat| {
            children_of.push(flat.children);
            Some(FamilyTreeNode::new(
                flat.profile,
                flat.relationship_to_parent,
                flat.depth,
            ))
        })
        .collect();

    for index in (0..built.len()).rev() {
        let children: Vec<FamilyTreeNode> = children_of[index]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        if let Some(node) = built[index].as_mut() {
            node.children = children;
        }
    }

    built
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| KeepsakeError::Internal("Tree assembly produced no root".to_string()))
}
