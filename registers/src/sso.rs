// Licensed under the Apache-2.0 license
//
// CN68XX SSO (schedule/synchronize/order) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// SSO_ERR: SSO error status.
pub const ERR: u64 = add_io_seg(0x0001_6700_0000_0620);

/// SSO_ERR_ENB: SSO error interrupt enable.
pub const ERR_ENB: u64 = add_io_seg(0x0001_6700_0000_0628);
