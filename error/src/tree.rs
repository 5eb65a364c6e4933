/*++

Licensed under the Apache-2.0 license.

File Name:

    tree.rs

Abstract:

    File contains the interrupt-source forest linked from a flat error
    descriptor table.

--*/

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::{ErrorInfo, RegisterType};

/// Identifier of a node in an [`ErrorTree`]; the index of the descriptor in
/// the source table.
pub type NodeId = usize;

/// Inconsistency found while linking a descriptor table into a forest.
///
/// `index` is the position of the offending descriptor in the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TreeError {
    /// Two descriptors monitor the same status bit
    DuplicateEntry { index: usize },
    /// Two summary descriptors cover the same register
    DuplicateSummary { index: usize },
    /// Parent reference does not name any summary register in the table
    UnresolvedParent { index: usize },
    /// Parent chain does not terminate at a root
    Cycle { index: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateEntry { index } => {
                write!(f, "descriptor {index} duplicates a status bit")
            }
            TreeError::DuplicateSummary { index } => {
                write!(f, "descriptor {index} duplicates a summary register")
            }
            TreeError::UnresolvedParent { index } => {
                write!(f, "descriptor {index} references an unknown parent")
            }
            TreeError::Cycle { index } => {
                write!(f, "descriptor {index} is on a parent cycle")
            }
        }
    }
}

/// Interrupt-source forest linked from a flat descriptor table.
///
/// The table encodes parentage by (register, bit) value; the tree resolves
/// it into indices in two passes: every descriptor becomes a node and the
/// summary registers are indexed, then each parent reference is resolved
/// against that index. The result is read-only and borrows the table.
#[derive(Debug, PartialEq)]
pub struct ErrorTree<'a> {
    entries: &'a [ErrorInfo],
    parent: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    roots: Vec<NodeId>,
}

impl<'a> ErrorTree<'a> {
    /// Links `entries` into a forest.
    ///
    /// # Error
    ///
    /// * `TreeError` - The table is not a consistent forest
    pub fn build(entries: &'a [ErrorInfo]) -> Result<Self, TreeError> {
        // Pass 1: index the summary registers, reject duplicate descriptors.
        let mut summaries: BTreeMap<(RegisterType, u64), NodeId> = BTreeMap::new();
        let mut seen: BTreeMap<(RegisterType, u64, u64), NodeId> = BTreeMap::new();
        for (index, info) in entries.iter().enumerate() {
            let key = (info.reg_type, info.status_addr, info.status_mask);
            if seen.insert(key, index).is_some() {
                return Err(TreeError::DuplicateEntry { index });
            }
            if info.is_summary()
                && summaries
                    .insert((info.reg_type, info.status_addr), index)
                    .is_some()
            {
                return Err(TreeError::DuplicateSummary { index });
            }
        }

        // Pass 2: resolve parent references to node indices.
        let mut parent: Vec<Option<NodeId>> = Vec::with_capacity(entries.len());
        let mut children: Vec<Vec<NodeId>> = (0..entries.len()).map(|_| Vec::new()).collect();
        let mut roots = Vec::new();
        for (index, info) in entries.iter().enumerate() {
            match info.parent {
                None => {
                    parent.push(None);
                    roots.push(index);
                }
                Some(p) => match summaries.get(&(p.reg_type, p.addr)) {
                    Some(&parent_id) => {
                        parent.push(Some(parent_id));
                        children[parent_id].push(index);
                    }
                    None => return Err(TreeError::UnresolvedParent { index }),
                },
            }
        }

        // Every parent chain must reach a root.
        for index in 0..entries.len() {
            let mut hops = 0;
            let mut cur = index;
            while let Some(p) = parent[cur] {
                hops += 1;
                if hops > entries.len() {
                    return Err(TreeError::Cycle { index });
                }
                cur = p;
            }
        }

        Ok(Self {
            entries,
            parent,
            children,
            roots,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptor of a node.
    pub fn get(&self, id: NodeId) -> Option<&'a ErrorInfo> {
        self.entries.get(id)
    }

    /// Top-level summary nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Parent of a node; `None` for roots.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied().flatten()
    }

    /// Children of a node, in table order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.children.get(id) {
            Some(children) => children,
            None => &[],
        }
    }

    /// Node monitoring a specific status bit.
    pub fn find(&self, reg_type: RegisterType, addr: u64, mask: u64) -> Option<NodeId> {
        self.entries
            .iter()
            .position(|e| e.reg_type == reg_type && e.status_addr == addr && e.status_mask == mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegisterType::Io64;
    use crate::{Group, RegisterRef};

    const ROOT: u64 = 0x8001_0001_0701_0000;
    const SRC: u64 = 0x8001_0001_0701_0600;
    const BLOCK: u64 = 0x8001_0001_1800_0100;

    fn summary(addr: u64) -> ErrorInfo {
        ErrorInfo::summary(Io64, addr, Group::Internal, 0)
    }

    fn leaf(addr: u64, bit: u64) -> ErrorInfo {
        ErrorInfo::bit(
            Io64,
            addr,
            1 << bit,
            Group::Internal,
            0,
            "ERROR TEST[BIT]: test\n",
        )
    }

    fn small_forest() -> [ErrorInfo; 4] {
        [
            summary(ROOT),
            summary(SRC).parent(RegisterRef::io64(ROOT, 1 << 2)),
            leaf(BLOCK, 0).parent(RegisterRef::io64(SRC, 1 << 0)),
            leaf(BLOCK, 1).parent(RegisterRef::io64(SRC, 1 << 0)),
        ]
    }

    #[test]
    fn test_build_links_parents_and_children() {
        let table = small_forest();
        let tree = ErrorTree::build(&table).unwrap();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots(), &[0]);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), Some(1));
        assert_eq!(tree.children(0), &[1]);
        assert_eq!(tree.children(1), &[2, 3]);
        assert!(tree.children(2).is_empty());
    }

    #[test]
    fn test_find_by_status_bit() {
        let table = small_forest();
        let tree = ErrorTree::build(&table).unwrap();

        assert_eq!(tree.find(Io64, BLOCK, 1 << 1), Some(3));
        assert_eq!(tree.find(Io64, SRC, 0), Some(1));
        assert_eq!(tree.find(Io64, BLOCK, 1 << 5), None);
    }

    #[test]
    fn test_empty_table() {
        let tree = ErrorTree::build(&[]).unwrap();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn test_duplicate_leaf_rejected() {
        let table = [
            summary(SRC),
            leaf(BLOCK, 0).parent(RegisterRef::io64(SRC, 1 << 0)),
            leaf(BLOCK, 0).parent(RegisterRef::io64(SRC, 1 << 0)),
        ];
        assert_eq!(
            ErrorTree::build(&table),
            Err(TreeError::DuplicateEntry { index: 2 })
        );
    }

    #[test]
    fn test_duplicate_summary_rejected() {
        let table = [
            summary(SRC),
            ErrorInfo::summary(Io64, SRC, Group::Ethernet, 1),
        ];
        assert_eq!(
            ErrorTree::build(&table),
            Err(TreeError::DuplicateSummary { index: 1 })
        );
    }

    #[test]
    fn test_unresolved_parent_rejected() {
        let table = [
            summary(SRC),
            leaf(BLOCK, 0).parent(RegisterRef::io64(0x8001_dead_beef_0000, 1 << 0)),
        ];
        assert_eq!(
            ErrorTree::build(&table),
            Err(TreeError::UnresolvedParent { index: 1 })
        );
    }

    #[test]
    fn test_leaf_is_not_a_parent() {
        // The parent reference names a register that only has leaf
        // descriptors, not a summary.
        let table = [
            summary(SRC),
            leaf(BLOCK, 0).parent(RegisterRef::io64(SRC, 1 << 0)),
            leaf(BLOCK, 1).parent(RegisterRef::io64(BLOCK, 1 << 0)),
        ];
        assert_eq!(
            ErrorTree::build(&table),
            Err(TreeError::UnresolvedParent { index: 2 })
        );
    }

    #[test]
    fn test_parent_cycle_rejected() {
        let table = [
            summary(ROOT).parent(RegisterRef::io64(SRC, 1 << 0)),
            summary(SRC).parent(RegisterRef::io64(ROOT, 1 << 0)),
        ];
        assert!(matches!(
            ErrorTree::build(&table),
            Err(TreeError::Cycle { .. })
        ));
    }

    #[test]
    fn test_self_parent_rejected() {
        let table = [summary(SRC).parent(RegisterRef::io64(SRC, 1 << 0))];
        assert!(matches!(
            ErrorTree::build(&table),
            Err(TreeError::Cycle { .. })
        ));
    }
}
