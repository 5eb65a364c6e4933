// Licensed under the Apache-2.0 license
//
// CN68XX LMC (DDR3 memory controller) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// LMCX_INT: memory controller interrupt status.
pub const fn intx(lmc: u64) -> u64 {
    add_io_seg(0x0001_1800_8800_01f0) + lmc * 0x100_0000
}

/// LMCX_INT_EN: memory controller interrupt enable.
pub const fn intx_en(lmc: u64) -> u64 {
    add_io_seg(0x0001_1800_8800_01e8) + lmc * 0x100_0000
}
