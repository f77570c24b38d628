//! Synthetic user factory for demo flows and tests

use crate::CoreUser;

/// Build one synthetic user from a 0-based index.
///
/// Even indexes are active, odd indexes inactive, so generated batches
/// always contain both states.
pub fn create_user(index: i64) -> CoreUser {
    CoreUser {
        id: index,
        name: format!("User-{}", index),
        email: Some(format!("user{}@example.com", index)),
        is_active: index % 2 == 0,
    }
}

/// Build `count` users with ids `0..count`.
///
/// Every third user (indexes 0, 3, 6, …) is inactive; none carry an email.
pub fn sequential_users(count: usize) -> Vec<CoreUser> {
    (0..count)
        .map(|i| CoreUser {
            id: i as i64,
            name: format!("User-{}", i),
            email: None,
            is_active: i % 3 != 0,
        })
        .collect()
}
