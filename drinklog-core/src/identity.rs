//! Virtual-user identity allocation.
//!
//! Every virtual user draws a process-wide unique index at start and derives
//! its credentials from it, so concurrently spawned users never collide on
//! usernames against the target server.

use std::sync::atomic::{AtomicU64, Ordering};

/// Username prefix for derived accounts.
pub const USERNAME_PREFIX: &str = "testuser";

/// Password prefix for derived accounts.
pub const PASSWORD_PREFIX: &str = "testpassword";

/// Hands out unique virtual-user indices, starting at 1.
///
/// Indices are strictly increasing across all callers for the lifetime of
/// the process. Exhaustion of the u64 range is not handled.
#[derive(Debug)]
pub struct IdentityAllocator {
    next: AtomicU64,
}

impl IdentityAllocator {
    /// Create an allocator whose first `next()` returns 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Return the next unused index.
    ///
    /// Safe under concurrent calls; every caller observes a distinct value.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocator shared by every virtual user in the process.
pub static IDENTITIES: IdentityAllocator = IdentityAllocator::new();

/// Credentials of one virtual user, derived from its allocated index.
///
/// Assigned once at virtual-user start and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualUserIdentity {
    pub index: u64,
    pub username: String,
    pub password: String,
}

impl VirtualUserIdentity {
    /// Draw the next index from `allocator` and derive credentials for it.
    pub fn allocate(allocator: &IdentityAllocator) -> Self {
        Self::from_index(allocator.next())
    }

    /// Derive the credentials for a fixed index.
    pub fn from_index(index: u64) -> Self {
        Self {
            index,
            username: format!("{USERNAME_PREFIX}{index}"),
            password: format!("{PASSWORD_PREFIX}{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn indices_start_at_one_and_increase() {
        let allocator = IdentityAllocator::new();
        assert_eq!(allocator.next(), 1);
        assert_eq!(allocator.next(), 2);
        assert_eq!(allocator.next(), 3);
    }

    #[test]
    fn concurrent_allocation_yields_distinct_indices() {
        let allocator = Arc::new(IdentityAllocator::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let allocator = Arc::clone(&allocator);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| allocator.next()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for index in handle.join().expect("allocator thread panicked") {
                assert!(seen.insert(index), "index {index} allocated twice");
            }
        }

        let expected: HashSet<u64> = (1..=800).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn credentials_derive_from_index() {
        let identity = VirtualUserIdentity::from_index(17);
        assert_eq!(identity.index, 17);
        assert_eq!(identity.username, "testuser17");
        assert_eq!(identity.password, "testpassword17");
    }
}
