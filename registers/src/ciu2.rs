// Licensed under the Apache-2.0 license
//
// CN68XX CIU2 (central interrupt unit) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// CIU2_SUM_PPX_IP2: per-core IP2 interrupt summary.
pub const fn sum_ppx_ip2(pp: u64) -> u64 {
    add_io_seg(0x0001_0701_0000_0000) + pp * 8
}

/// CIU2_SRC_PPX_IP2_RML: on-chip block (RSL) interrupt sources.
pub const fn src_ppx_ip2_rml(pp: u64) -> u64 {
    add_io_seg(0x0001_0701_0000_0600) + pp * 8
}

/// CIU2_SRC_PPX_IP2_MIO: MIO interrupt sources.
pub const fn src_ppx_ip2_mio(pp: u64) -> u64 {
    add_io_seg(0x0001_0701_0000_0700) + pp * 8
}

/// CIU2_SRC_PPX_IP2_MEM: memory controller interrupt sources.
pub const fn src_ppx_ip2_mem(pp: u64) -> u64 {
    add_io_seg(0x0001_0701_0000_0800) + pp * 8
}

/// CIU2_SRC_PPX_IP2_PKT: packet interface interrupt sources.
pub const fn src_ppx_ip2_pkt(pp: u64) -> u64 {
    add_io_seg(0x0001_0701_0000_0900) + pp * 8
}
