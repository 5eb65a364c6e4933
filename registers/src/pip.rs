// Licensed under the Apache-2.0 license
//
// CN68XX PIP (packet input processing) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// PIP_INT_REG: packet input interrupt status.
pub const INT_REG: u64 = add_io_seg(0x0001_1800_a000_0008);

/// PIP_INT_EN: packet input interrupt enable.
pub const INT_EN: u64 = add_io_seg(0x0001_1800_a000_0010);
