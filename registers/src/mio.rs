// Licensed under the Apache-2.0 license
//
// CN68XX MIO (miscellaneous IO) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// MIO_BOOT_ERR: boot bus error status.
pub const BOOT_ERR: u64 = add_io_seg(0x0001_1800_0000_00a0);

/// MIO_BOOT_INT: boot bus interrupt enable.
pub const BOOT_INT: u64 = add_io_seg(0x0001_1800_0000_00a8);

/// MIO_RST_INT: reset interrupt status.
pub const RST_INT: u64 = add_io_seg(0x0001_1800_0000_1628);

/// MIO_RST_INT_EN: reset interrupt enable.
pub const RST_INT_EN: u64 = add_io_seg(0x0001_1800_0000_1630);
