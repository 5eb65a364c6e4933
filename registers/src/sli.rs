// Licensed under the Apache-2.0 license
//
// CN68XX SLI (PCIe system link interface) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// SLI_INT_SUM: system link interrupt status.
pub const INT_SUM: u64 = add_io_seg(0x0001_1f00_0001_0330);

/// SLI_INT_ENB_CIU: system link interrupt enable (CIU side).
pub const INT_ENB_CIU: u64 = add_io_seg(0x0001_1f00_0001_0340);
