/*++

Licensed under the Apache-2.0 license.

File Name:

    registry.rs

Abstract:

    File contains the registration seam between the static error tables
    and the platform error registry.

--*/

use core::fmt;

use crate::ErrorInfo;

/// Reason a registry rejected a descriptor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AddError {
    /// The registry is out of table space
    Capacity,
    /// A descriptor for the same status bit already exists
    Duplicate,
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddError::Capacity => write!(f, "registry out of table space"),
            AddError::Duplicate => write!(f, "status bit already registered"),
        }
    }
}

/// Destination for error source descriptors.
///
/// The platform owns the registry that services hardware error interrupts;
/// the static per-chip tables only feed it. Implementations must accept a
/// descriptor independently of any previously offered one.
pub trait ErrorRegistry {
    /// Insert one descriptor.
    ///
    /// # Error
    ///
    /// * `AddError` - Reason the descriptor was not accepted
    fn add(&mut self, info: ErrorInfo) -> Result<(), AddError>;
}

/// Summary of a table registration that did not fully succeed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RegisterError {
    /// Number of descriptors the registry rejected
    pub failed: usize,
    /// Number of descriptors offered
    pub total: usize,
    /// First rejection reason
    pub first: AddError,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} error descriptors rejected ({})",
            self.failed, self.total, self.first
        )
    }
}

/// Registers every descriptor of `table`, continuing past rejections.
///
/// A rejection does not stop the sweep; the remaining descriptors are still
/// offered so that a partially full registry covers as much of the error
/// tree as possible. Returns `Ok(())` only if every descriptor was accepted.
pub fn register_all<R: ErrorRegistry + ?Sized>(
    registry: &mut R,
    table: &[ErrorInfo],
) -> Result<(), RegisterError> {
    let mut failed = 0;
    let mut first = None;
    for info in table {
        if let Err(err) = registry.add(*info) {
            failed += 1;
            if first.is_none() {
                first = Some(err);
            }
        }
    }
    match first {
        None => Ok(()),
        Some(first) => Err(RegisterError {
            failed,
            total: table.len(),
            first,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Group, RegisterType};

    fn leaf(bit: u64) -> ErrorInfo {
        ErrorInfo::bit(
            RegisterType::Io64,
            0x8001_0001_1800_0100,
            1 << bit,
            Group::Internal,
            0,
            "ERROR TEST[BIT]: test\n",
        )
    }

    /// Accepts everything up to a fixed capacity.
    struct FixedRegistry {
        entries: Vec<ErrorInfo>,
        capacity: usize,
    }

    impl FixedRegistry {
        fn new(capacity: usize) -> Self {
            Self {
                entries: Vec::new(),
                capacity,
            }
        }
    }

    impl ErrorRegistry for FixedRegistry {
        fn add(&mut self, info: ErrorInfo) -> Result<(), AddError> {
            if self.entries.len() == self.capacity {
                return Err(AddError::Capacity);
            }
            if self
                .entries
                .iter()
                .any(|e| e.status_ref() == info.status_ref())
            {
                return Err(AddError::Duplicate);
            }
            self.entries.push(info);
            Ok(())
        }
    }

    #[test]
    fn test_register_all_accepts_full_table() {
        let table = [leaf(0), leaf(1), leaf(2)];
        let mut registry = FixedRegistry::new(16);
        assert_eq!(register_all(&mut registry, &table), Ok(()));
        assert_eq!(registry.entries.len(), 3);
    }

    #[test]
    fn test_register_all_counts_rejections() {
        let table = [leaf(0), leaf(1), leaf(2), leaf(3)];
        let mut registry = FixedRegistry::new(2);
        let err = register_all(&mut registry, &table).unwrap_err();
        assert_eq!(
            err,
            RegisterError {
                failed: 2,
                total: 4,
                first: AddError::Capacity,
            }
        );
        // The first two descriptors still made it in.
        assert_eq!(registry.entries.len(), 2);
    }

    #[test]
    fn test_register_all_reports_first_rejection_reason() {
        let table = [leaf(0), leaf(0), leaf(1)];
        let mut registry = FixedRegistry::new(2);
        let err = register_all(&mut registry, &table).unwrap_err();
        assert_eq!(err.failed, 2);
        assert_eq!(err.first, AddError::Duplicate);
    }

    #[test]
    fn test_register_all_empty_table() {
        let mut registry = FixedRegistry::new(0);
        assert_eq!(register_all(&mut registry, &[]), Ok(()));
    }

    #[test]
    fn test_register_error_display() {
        let err = RegisterError {
            failed: 2,
            total: 4,
            first: AddError::Capacity,
        };
        assert_eq!(
            err.to_string(),
            "2 of 4 error descriptors rejected (registry out of table space)"
        );
    }
}
