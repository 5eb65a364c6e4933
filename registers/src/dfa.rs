// Licensed under the Apache-2.0 license
//
// CN68XX DFA (deterministic finite automata) CSR addresses.
// Generated from the CN68XX CSR database. Do not edit.

use crate::add_io_seg;

/// DFA_ERROR: DFA error status.
pub const ERROR: u64 = add_io_seg(0x0001_1800_3000_0028);

/// DFA_INT_MSK: DFA interrupt enable.
pub const INT_MSK: u64 = add_io_seg(0x0001_1800_3000_0030);
