// Licensed under the Apache-2.0 license
//
// CN68XX PKO (packet output) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// PKO_REG_ERROR: packet output error status.
pub const REG_ERROR: u64 = add_io_seg(0x0001_1800_5000_0088);

/// PKO_REG_INT_MASK: packet output interrupt enable.
pub const REG_INT_MASK: u64 = add_io_seg(0x0001_1800_5000_0090);
