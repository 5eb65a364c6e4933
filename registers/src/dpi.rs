// Licensed under the Apache-2.0 license
//
// CN68XX DPI (DMA packet interface) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// DPI_INT_REG: DMA packet interface interrupt status.
pub const INT_REG: u64 = add_io_seg(0x0001_df00_0000_0038);

/// DPI_INT_EN: DMA packet interface interrupt enable.
pub const INT_EN: u64 = add_io_seg(0x0001_df00_0000_0040);
