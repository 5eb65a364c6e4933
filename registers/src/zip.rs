// Licensed under the Apache-2.0 license
//
// CN68XX ZIP (compression/decompression) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// ZIP_INT_REG: ZIP error status.
pub const INT_REG: u64 = add_io_seg(0x0001_1800_3800_0088);

/// ZIP_INT_MASK: ZIP interrupt enable.
pub const INT_MASK: u64 = add_io_seg(0x0001_1800_3800_0090);
