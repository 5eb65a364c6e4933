// Licensed under the Apache-2.0 license
//
// CN68XX FPA (free pool allocator) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// FPA_INT_SUM: free pool allocator interrupt status.
pub const INT_SUM: u64 = add_io_seg(0x0001_1800_2800_0040);

/// FPA_INT_ENB: free pool allocator interrupt enable.
pub const INT_ENB: u64 = add_io_seg(0x0001_1800_2800_0048);
