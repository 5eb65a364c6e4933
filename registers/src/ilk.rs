// Licensed under the Apache-2.0 license
//
// CN68XX ILK (Interlaken) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// ILK_GBL_INT: global interrupt status.
pub const GBL_INT: u64 = add_io_seg(0x0001_1800_7400_0000);

/// ILK_GBL_INT_EN: global interrupt enable.
pub const GBL_INT_EN: u64 = add_io_seg(0x0001_1800_7400_0008);

/// ILK_TXX_INT: per-link transmit interrupt status.
pub const fn txx_int(link: u64) -> u64 {
    add_io_seg(0x0001_1800_7400_4180) + link * 0x4000
}

/// ILK_TXX_INT_EN: per-link transmit interrupt enable.
pub const fn txx_int_en(link: u64) -> u64 {
    add_io_seg(0x0001_1800_7400_4188) + link * 0x4000
}

/// ILK_RXX_INT: per-link receive interrupt status.
pub const fn rxx_int(link: u64) -> u64 {
    add_io_seg(0x0001_1800_7401_0180) + link * 0x4000
}

/// ILK_RXX_INT_EN: per-link receive interrupt enable.
pub const fn rxx_int_en(link: u64) -> u64 {
    add_io_seg(0x0001_1800_7401_0188) + link * 0x4000
}

/// ILK_LNEX_INT: per-lane interrupt status.
pub const fn lnex_int(lane: u64) -> u64 {
    add_io_seg(0x0001_1800_7402_0000) + lane * 0x400
}

/// ILK_LNEX_INT_EN: per-lane interrupt enable.
pub const fn lnex_int_en(lane: u64) -> u64 {
    add_io_seg(0x0001_1800_7402_0008) + lane * 0x400
}
