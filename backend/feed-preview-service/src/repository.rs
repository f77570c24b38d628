//! Snapshot fetching, checksums, and user projections

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use core_model::{checksum, CoreUser};
use core_network::{ApiClient, ApiPostDto, ApiUserDto};

use crate::error::Result;
use crate::models::{FeedItem, NetworkSnapshot, UserSummary};

/// Source of per-user snapshots.
///
/// The seam service code depends on; `FeedRepository` is the production
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load_snapshot(&self, user_id: i64) -> Result<NetworkSnapshot>;
}

/// Fetches one user plus a bounded page of their posts and fingerprints
/// the pair.
pub struct FeedRepository {
    api: Arc<dyn ApiClient>,
    page_size: usize,
}

impl FeedRepository {
    pub fn new(api: Arc<dyn ApiClient>, page_size: usize) -> Self {
        Self { api, page_size }
    }
}

#[async_trait]
impl SnapshotSource for FeedRepository {
    /// One `get_user` call, one `get_posts` call, no retries. Collaborator
    /// failures propagate unmodified.
    async fn load_snapshot(&self, user_id: i64) -> Result<NetworkSnapshot> {
        let user = self.api.get_user(user_id).await?;
        let posts = self.api.get_posts(user_id, self.page_size).await?;
        let raw_checksum = snapshot_checksum(&user, &posts);
        debug!(user_id, post_count = posts.len(), raw_checksum, "loaded snapshot");
        Ok(NetworkSnapshot {
            users: vec![user],
            posts,
            raw_checksum,
        })
    }
}

/// Combined fingerprint of a user and their posts.
///
/// Folds the user's id and name hashes, then each post's id and title
/// hashes in input order. Pure and stable: equal inputs always produce the
/// same value, in any process.
pub fn snapshot_checksum(user: &ApiUserDto, posts: &[ApiPostDto]) -> i32 {
    let mut acc = checksum::SEED;
    acc = checksum::fold(acc, checksum::id_hash(user.id));
    acc = checksum::fold(acc, checksum::string_hash(&user.name));
    for post in posts {
        acc = checksum::fold(acc, checksum::id_hash(post.id));
        acc = checksum::fold(acc, checksum::string_hash(&post.title));
    }
    acc
}

/// Project a user into its display summary.
pub fn to_user_summary(user: &CoreUser) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        checksum: checksum::string_hash(&user.name),
        is_active: user.is_active,
    }
}

/// Project an ordered batch of users into feed items.
///
/// Item ids are assigned 0..n-1 within the batch, regardless of the users'
/// own ids.
pub fn to_feed_items(users: &[CoreUser]) -> Vec<FeedItem> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let summary = to_user_summary(user);
            let subtitle = if summary.is_active { "Active" } else { "Inactive" };
            FeedItem {
                id: index as i64,
                title: format!("User {}", summary.name),
                subtitle: Some(subtitle.to_string()),
                summary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_network::{FakeApiService, FakeNetworkClient};

    fn user(id: i64, name: &str) -> ApiUserDto {
        ApiUserDto {
            id,
            name: name.to_string(),
            email: None,
            is_active: true,
        }
    }

    fn post(id: i64, title: &str) -> ApiPostDto {
        ApiPostDto {
            id,
            user_id: 1,
            title: title.to_string(),
            body: None,
        }
    }

    fn repository(page_size: usize) -> FeedRepository {
        let api = FakeApiService::new(Arc::new(FakeNetworkClient::new()));
        FeedRepository::new(Arc::new(api), page_size)
    }

    #[test]
    fn test_snapshot_checksum_known_value() {
        // acc: 1 -> 31*1+1 -> 31*32+0
        assert_eq!(snapshot_checksum(&user(1, ""), &[]), 992);
    }

    #[test]
    fn test_snapshot_checksum_is_deterministic() {
        let u = user(3, "Ada");
        let posts = vec![post(10, "first"), post(11, "second")];
        assert_eq!(snapshot_checksum(&u, &posts), snapshot_checksum(&u, &posts));
    }

    #[test]
    fn test_snapshot_checksum_depends_on_post_order() {
        let u = user(3, "Ada");
        let forward = vec![post(10, "first"), post(11, "second")];
        let reversed = vec![post(11, "second"), post(10, "first")];
        assert_ne!(snapshot_checksum(&u, &forward), snapshot_checksum(&u, &reversed));
    }

    #[test]
    fn test_snapshot_checksum_ignores_email_and_body() {
        let mut a = user(3, "Ada");
        let mut b = a.clone();
        a.email = Some("ada@example.com".to_string());
        b.email = None;
        let mut p1 = post(10, "first");
        let mut p2 = p1.clone();
        p1.body = Some("x".to_string());
        p2.body = None;
        assert_eq!(
            snapshot_checksum(&a, std::slice::from_ref(&p1)),
            snapshot_checksum(&b, std::slice::from_ref(&p2))
        );
    }

    #[test]
    fn test_to_user_summary_uses_name_checksum() {
        let core = CoreUser {
            id: 9,
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            is_active: false,
        };
        let summary = to_user_summary(&core);
        assert_eq!(summary.id, 9);
        assert_eq!(summary.name, "Ada");
        assert_eq!(summary.checksum, checksum::string_hash("Ada"));
        assert!(!summary.is_active);
    }

    #[test]
    fn test_to_feed_items_preserves_order_and_length() {
        let users = core_model::factory::sequential_users(4);
        let items = to_feed_items(&users);
        assert_eq!(items.len(), 4);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.summary.name, users[i].name);
        }
    }

    #[test]
    fn test_to_feed_items_assigns_sequential_ids() {
        // Source ids deliberately far from 0..n.
        let users: Vec<CoreUser> = [500, 72, 9000]
            .iter()
            .map(|&id| CoreUser::new(id, format!("User-{}", id)))
            .collect();
        let ids: Vec<i64> = to_feed_items(&users).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_to_feed_items_formats_title_and_subtitle() {
        let active = CoreUser::new(1, "Ada");
        let inactive = CoreUser {
            is_active: false,
            ..CoreUser::new(2, "Grace")
        };
        let items = to_feed_items(&[active, inactive]);
        assert_eq!(items[0].title, "User Ada");
        assert_eq!(items[0].subtitle.as_deref(), Some("Active"));
        assert_eq!(items[1].title, "User Grace");
        assert_eq!(items[1].subtitle.as_deref(), Some("Inactive"));
    }

    #[tokio::test]
    async fn test_load_snapshot_wraps_user_as_singleton_list() {
        let snapshot = repository(5).load_snapshot(42).await.unwrap();
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.users[0].id, 42);
        assert_eq!(snapshot.posts.len(), 5);
    }

    #[tokio::test]
    async fn test_load_snapshot_checksum_matches_recomputation() {
        let snapshot = repository(3).load_snapshot(7).await.unwrap();
        assert_eq!(
            snapshot.raw_checksum,
            snapshot_checksum(&snapshot.users[0], &snapshot.posts)
        );
    }

    #[tokio::test]
    async fn test_load_snapshot_is_stable_across_calls() {
        let repo = repository(3);
        let first = repo.load_snapshot(7).await.unwrap();
        let second = repo.load_snapshot(7).await.unwrap();
        assert_eq!(first, second);
    }
}
