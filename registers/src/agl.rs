// Licensed under the Apache-2.0 license
//
// CN68XX AGL (management port media access) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// AGL_GMX_BAD_REG: capture of lost-stat/overflow conditions.
pub const GMX_BAD_REG: u64 = add_io_seg(0x0001_1800_e000_0518);

/// AGL_GMX_RXX_INT_REG: per-port receive interrupt status.
pub const fn gmx_rxx_int_reg(port: u64) -> u64 {
    add_io_seg(0x0001_1800_e000_0000) + port * 0x800
}

/// AGL_GMX_RXX_INT_EN: per-port receive interrupt enable.
pub const fn gmx_rxx_int_en(port: u64) -> u64 {
    add_io_seg(0x0001_1800_e000_0008) + port * 0x800
}

/// AGL_GMX_TX_INT_REG: transmit interrupt status.
pub const GMX_TX_INT_REG: u64 = add_io_seg(0x0001_1800_e000_0500);

/// AGL_GMX_TX_INT_EN: transmit interrupt enable.
pub const GMX_TX_INT_EN: u64 = add_io_seg(0x0001_1800_e000_0508);
