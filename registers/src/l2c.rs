// Licensed under the Apache-2.0 license
//
// CN68XX L2C (level-2 cache controller) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// L2C_INT_REG: L2C interrupt summary.
pub const INT_REG: u64 = add_io_seg(0x0001_1800_8080_0100);

/// L2C_INT_ENA: L2C interrupt enable.
pub const INT_ENA: u64 = add_io_seg(0x0001_1800_8080_0108);

/// L2C_TADX_INT: per-TAD interrupt status.
pub const fn tadx_int(tad: u64) -> u64 {
    add_io_seg(0x0001_1800_80a0_0028) + tad * 0x40000
}

/// L2C_TADX_IEN: per-TAD interrupt enable.
pub const fn tadx_ien(tad: u64) -> u64 {
    add_io_seg(0x0001_1800_80a0_0020) + tad * 0x40000
}
