// Licensed under the Apache-2.0 license
//
// CN68XX TIM (timer) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// TIM_REG_ERROR: timer error status.
pub const REG_ERROR: u64 = add_io_seg(0x0001_1800_5800_0088);

/// TIM_REG_INT_MASK: timer interrupt enable.
pub const REG_INT_MASK: u64 = add_io_seg(0x0001_1800_5800_0090);
