//! Composition layer: repository + mapper + network collaborator

use std::sync::Arc;

use tracing::{debug, info};

use core_model::{factory, CoreUser};
use core_network::{NetworkClient, NetworkRequest};

use crate::error::Result;
use crate::models::FeedUiModel;
use crate::repository::{self, SnapshotSource};
use crate::ui::UiMapper;

/// Builds render-ready feed models for single users.
///
/// All collaborators are injected; the service holds no mutable state and
/// is safe to share across tasks if its collaborators are.
pub struct FeedService {
    snapshots: Arc<dyn SnapshotSource>,
    network: Arc<dyn NetworkClient>,
    mapper: UiMapper,
}

impl FeedService {
    pub fn new(
        snapshots: Arc<dyn SnapshotSource>,
        network: Arc<dyn NetworkClient>,
        mapper: UiMapper,
    ) -> Self {
        Self {
            snapshots,
            network,
            mapper,
        }
    }

    /// Load the user's snapshot and render it.
    ///
    /// A snapshot with no user degrades to the empty state rather than an
    /// error. The rendered user is rebuilt from the snapshot entry with no
    /// email and `is_active` forced on, so its row always renders selected.
    pub async fn build_ui_for_user(&self, user_id: i64) -> Result<FeedUiModel> {
        let snapshot = self.snapshots.load_snapshot(user_id).await?;
        let Some(first) = snapshot.users.first() else {
            debug!(user_id, "snapshot carried no user");
            return Ok(self.mapper.empty_state());
        };
        let user = CoreUser {
            id: first.id,
            name: first.name.clone(),
            email: None,
            is_active: true,
        };
        let items = repository::to_feed_items(std::slice::from_ref(&user));
        Ok(self.mapper.map_to_ui(&items))
    }

    /// One GET through the network collaborator; returns the status code.
    pub async fn ping(&self, path: &str) -> Result<u16> {
        let response = self.network.execute(NetworkRequest::get(path)).await?;
        debug!(path, code = response.code, "ping");
        Ok(response.code)
    }

    /// Run `count` synthetic users through the projection and render
    /// pipeline. Demo entry point; touches no collaborator.
    pub fn demo_complex_flow(&self, count: usize) -> FeedUiModel {
        let users: Vec<CoreUser> = (0..count).map(|i| factory::create_user(i as i64)).collect();
        let items = repository::to_feed_items(&users);
        info!(count, "built demo feed");
        self.mapper.map_to_ui(&items)
    }
}
