//! # Catalog Tree
//!
//! The grouped catalog as an expandable two-level tree: one header per group,
//! one leaf per entry. Only headers carry expansion state.
//!
//! ```text
//! ▾ A          Header { group: 0 }
//!     abra     Leaf   { group: 0, entry }
//!     absol    Leaf   { group: 0, entry }
//! ▸ B          Header { group: 1 }   (collapsed, no leaves listed)
//! ```

use crate::api::ListEntry;
use crate::core::group::Group;

#[derive(Debug, Clone)]
struct GroupNode {
    group: Group,
    expanded: bool,
}

/// A visible row of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRow<'a> {
    Header {
        group: usize,
        key: char,
        expanded: bool,
        count: usize,
    },
    Leaf {
        group: usize,
        entry: &'a ListEntry,
    },
}

impl<'a> TreeRow<'a> {
    /// The entry attached to this row. Headers carry none.
    pub fn reference(&self) -> Option<&'a ListEntry> {
        match self {
            TreeRow::Header { .. } => None,
            TreeRow::Leaf { entry, .. } => Some(*entry),
        }
    }

    pub fn group(&self) -> usize {
        match self {
            TreeRow::Header { group, .. } | TreeRow::Leaf { group, .. } => *group,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogTree {
    nodes: Vec<GroupNode>,
}

impl CatalogTree {
    /// Builds the tree with every group expanded.
    pub fn new(groups: Vec<Group>) -> Self {
        Self {
            nodes: groups
                .into_iter()
                .map(|group| GroupNode {
                    group,
                    expanded: true,
                })
                .collect(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn entry_count(&self) -> usize {
        self.nodes.iter().map(|n| n.group.members.len()).sum()
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::with_capacity(self.nodes.len() + self.entry_count());
        for (index, node) in self.nodes.iter().enumerate() {
            rows.push(TreeRow::Header {
                group: index,
                key: node.group.key,
                expanded: node.expanded,
                count: node.group.members.len(),
            });
            if node.expanded {
                rows.extend(node.group.members.iter().map(|entry| TreeRow::Leaf {
                    group: index,
                    entry,
                }));
            }
        }
        rows
    }

    pub fn row_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| 1 + if n.expanded { n.group.members.len() } else { 0 })
            .sum()
    }

    pub fn row(&self, index: usize) -> Option<TreeRow<'_>> {
        self.rows().get(index).copied()
    }

    /// Row index of the header for `group`.
    pub fn header_row(&self, group: usize) -> Option<usize> {
        if group >= self.nodes.len() {
            return None;
        }
        Some(
            self.nodes[..group]
                .iter()
                .map(|n| 1 + if n.expanded { n.group.members.len() } else { 0 })
                .sum(),
        )
    }

    pub fn is_expanded(&self, group: usize) -> bool {
        self.nodes.get(group).is_some_and(|n| n.expanded)
    }

    /// Flips a group between expanded and collapsed. Out-of-range is a no-op.
    pub fn toggle(&mut self, group: usize) {
        if let Some(node) = self.nodes.get_mut(group) {
            node.expanded = !node.expanded;
        }
    }

    pub fn set_expanded(&mut self, group: usize, expanded: bool) {
        if let Some(node) = self.nodes.get_mut(group) {
            node.expanded = expanded;
        }
    }
}
