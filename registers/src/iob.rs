// Licensed under the Apache-2.0 license
//
// CN68XX IOB (IO bridge) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// IOB_INT_SUM: IO bridge interrupt status.
pub const INT_SUM: u64 = add_io_seg(0x0001_1800_f000_0058);

/// IOB_INT_ENB: IO bridge interrupt enable.
pub const INT_ENB: u64 = add_io_seg(0x0001_1800_f000_0060);
