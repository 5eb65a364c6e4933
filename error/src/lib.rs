/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the Octeon hardware error report library.

--*/

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod info;
mod registry;
mod tree;

pub use info::{ErrorFlags, ErrorInfo, Group, Handler, RegisterRef, RegisterType};
pub use registry::{register_all, AddError, ErrorRegistry, RegisterError};
pub use tree::{ErrorTree, NodeId, TreeError};
