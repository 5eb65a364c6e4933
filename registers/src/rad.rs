// Licensed under the Apache-2.0 license
//
// CN68XX RAD (RAID/XOR accelerator) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// RAD_REG_ERROR: RAID accelerator error status.
pub const REG_ERROR: u64 = add_io_seg(0x0001_1800_7000_0088);

/// RAD_REG_INT_MASK: RAID accelerator interrupt enable.
pub const REG_INT_MASK: u64 = add_io_seg(0x0001_1800_7000_0090);
