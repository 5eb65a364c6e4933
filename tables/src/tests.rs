/*++

Licensed under the Apache-2.0 license.

File Name:

    tests.rs

Abstract:

    File contains consistency tests for the generated error report tables.

--*/

use std::collections::HashSet;

use octeon_error::RegisterType::Io64;
use octeon_error::{
    AddError, ErrorFlags, ErrorInfo, ErrorRegistry, ErrorTree, Group, Handler,
};
use octeon_registers::{ciu2, l2c};

use crate::cn68xx;

/// Registry that records everything it accepts, up to an optional capacity.
struct VecRegistry {
    entries: Vec<ErrorInfo>,
    capacity: Option<usize>,
}

impl VecRegistry {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }
}

impl ErrorRegistry for VecRegistry {
    fn add(&mut self, info: ErrorInfo) -> Result<(), AddError> {
        if Some(self.entries.len()) == self.capacity {
            return Err(AddError::Capacity);
        }
        self.entries.push(info);
        Ok(())
    }
}

#[test]
fn test_cn68xx_table_is_a_consistent_forest() {
    let tree = ErrorTree::build(cn68xx::ERROR_TABLE).unwrap();
    assert_eq!(tree.len(), cn68xx::ERROR_TABLE.len());

    // The CIU2 per-core summary is the only root.
    assert_eq!(tree.roots().len(), 1);
    let root = tree.roots()[0];
    let root_info = tree.get(root).unwrap();
    assert_eq!(root_info.status_addr, ciu2::sum_ppx_ip2(0));
    assert_eq!(root_info.handler, Handler::Decode);

    // Exactly the four CIU2 source summaries hang off the root.
    assert_eq!(tree.children(root).len(), 4);
    for &id in tree.children(root) {
        assert!(tree.get(id).unwrap().is_summary());
    }
}

#[test]
fn test_cn68xx_tad_leaves_attach_to_l2c_summary() {
    let tree = ErrorTree::build(cn68xx::ERROR_TABLE).unwrap();
    let l2c_node = tree.find(Io64, l2c::INT_REG, 0).unwrap();
    // Four TADs with eleven leaves each.
    assert_eq!(tree.children(l2c_node).len(), 44);
    for &id in tree.children(l2c_node) {
        let info = tree.get(id).unwrap();
        assert!(!info.is_summary());
        assert_eq!(info.group, Group::Internal);
    }
}

#[test]
fn test_cn68xx_status_bits_are_unique() {
    let mut seen = HashSet::new();
    for info in cn68xx::ERROR_TABLE {
        assert!(
            seen.insert((info.status_addr, info.status_mask)),
            "duplicate status bit: {:#x}/{:#x}",
            info.status_addr,
            info.status_mask
        );
    }
}

#[test]
fn test_cn68xx_descriptors_are_fully_populated() {
    for (index, info) in cn68xx::ERROR_TABLE.iter().enumerate() {
        assert_eq!(info.reg_type, Io64, "entry {index}");
        assert_ne!(info.status_addr, 0, "entry {index}");

        match info.handler {
            Handler::Decode => {
                assert_eq!(info.status_mask, 0, "entry {index}");
                assert_eq!(info.enable_addr, 0, "entry {index}");
                assert_eq!(info.enable_mask, 0, "entry {index}");
                assert_eq!(info.flags, ErrorFlags::empty(), "entry {index}");
            }
            Handler::Display(message) => {
                assert_ne!(info.status_mask, 0, "entry {index}");
                assert!(message.starts_with("ERROR "), "entry {index}");
                assert!(message.contains("]: "), "entry {index}");
                assert!(message.ends_with('\n'), "entry {index}");
                assert!(info.parent.is_some(), "entry {index}");
                // An enable register is paired with an enable bit.
                assert_eq!(
                    info.enable_addr == 0,
                    info.enable_mask == 0,
                    "entry {index}"
                );
            }
        }
    }
}

#[test]
fn test_cn68xx_parents_reference_summary_registers() {
    let summaries: HashSet<u64> = cn68xx::ERROR_TABLE
        .iter()
        .filter(|info| info.is_summary())
        .map(|info| info.status_addr)
        .collect();
    for (index, info) in cn68xx::ERROR_TABLE.iter().enumerate() {
        if let Some(parent) = info.parent {
            assert!(summaries.contains(&parent.addr), "entry {index}");
            assert_ne!(parent.mask, 0, "entry {index}");
        }
    }
}

#[test]
fn test_cn68xx_ecc_flags_match_messages() {
    for (index, info) in cn68xx::ERROR_TABLE.iter().enumerate() {
        let message = info.message().unwrap_or("");
        if info.flags.contains(ErrorFlags::ECC_SINGLE_BIT) {
            assert!(
                message.to_lowercase().contains("single-bit"),
                "entry {index}"
            );
        }
        if info.flags.contains(ErrorFlags::ECC_DOUBLE_BIT) {
            assert!(
                message.to_lowercase().contains("double-bit"),
                "entry {index}"
            );
        }
        assert!(
            !info
                .flags
                .contains(ErrorFlags::ECC_SINGLE_BIT | ErrorFlags::ECC_DOUBLE_BIT),
            "entry {index}"
        );
    }
}

#[test]
fn test_cn68xx_groups_match_the_hierarchy() {
    let pkt = ciu2::src_ppx_ip2_pkt(0);
    let mem = ciu2::src_ppx_ip2_mem(0);
    for (index, info) in cn68xx::ERROR_TABLE.iter().enumerate() {
        let parent_addr = info.parent.map(|p| p.addr);
        match info.group {
            Group::Lmc => assert_eq!(parent_addr, Some(mem), "entry {index}"),
            Group::Ethernet | Group::MgmtPort | Group::Ilk => {
                assert_eq!(parent_addr, Some(pkt), "entry {index}")
            }
            Group::Internal => assert_ne!(parent_addr, Some(pkt), "entry {index}"),
        }
    }
}

#[test]
fn test_initialize_registers_the_full_table() {
    let mut registry = VecRegistry::new();
    assert_eq!(cn68xx::initialize(&mut registry), Ok(()));
    assert_eq!(registry.entries.len(), cn68xx::ERROR_TABLE.len());
    assert_eq!(registry.entries[0], cn68xx::ERROR_TABLE[0]);
}

#[test]
fn test_initialize_continues_past_rejections() {
    let capacity = 10;
    let mut registry = VecRegistry::with_capacity(capacity);
    let err = cn68xx::initialize(&mut registry).unwrap_err();
    assert_eq!(err.total, cn68xx::ERROR_TABLE.len());
    assert_eq!(err.failed, cn68xx::ERROR_TABLE.len() - capacity);
    assert_eq!(err.first, AddError::Capacity);
    assert_eq!(registry.entries.len(), capacity);
}
