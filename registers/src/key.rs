// Licensed under the Apache-2.0 license
//
// CN68XX KEY (key memory) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// KEY_INT_SUM: key memory interrupt status.
pub const INT_SUM: u64 = add_io_seg(0x0001_1800_2000_0088);

/// KEY_INT_ENB: key memory interrupt enable.
pub const INT_ENB: u64 = add_io_seg(0x0001_1800_2000_0090);
