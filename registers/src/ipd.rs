// Licensed under the Apache-2.0 license
//
// CN68XX IPD (input packet data) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// IPD_INT_SUM: input packet data interrupt status.
pub const INT_SUM: u64 = add_io_seg(0x0001_4f00_0000_0168);

/// IPD_INT_ENB: input packet data interrupt enable.
pub const INT_ENB: u64 = add_io_seg(0x0001_4f00_0000_0160);
