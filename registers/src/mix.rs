// Licensed under the Apache-2.0 license
//
// CN68XX MIX (management packet interface) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// MIXX_ISR: per-port interrupt status.
pub const fn isr(mix: u64) -> u64 {
    add_io_seg(0x0001_0700_0010_0028) + mix * 0x800
}

/// MIXX_INTENA: per-port interrupt enable.
pub const fn intena(mix: u64) -> u64 {
    add_io_seg(0x0001_0700_0010_0050) + mix * 0x800
}
