//! InMemorySessionStore - Option<UserId> を保持するだけのセッション

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::UserId;
use crate::ports::SessionStore;

/// Holds the current user id, or nothing.
///
/// The engine only reads through the `SessionStore` trait; `set` and
/// `clear` exist for embedders and demos that flip auth state around a
/// mount.
pub struct InMemorySessionStore {
    user: Mutex<Option<UserId>>,
}

impl InMemorySessionStore {
    pub fn anonymous() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }

    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user: Mutex::new(Some(user_id)),
        }
    }

    pub async fn set(&self, user_id: UserId) {
        *self.user.lock().await = Some(user_id);
    }

    pub async fn clear(&self) {
        *self.user.lock().await = None;
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn current_user_id(&self) -> Option<UserId> {
        *self.user.lock().await
    }
}
