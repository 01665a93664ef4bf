//! SessionStore port - 現在のユーザー ID の取得元
//!
//! The engine reads the session exactly once, at mount. It never writes,
//! and it never re-polls mid-deck: a deck belongs to whoever mounted it.

use async_trait::async_trait;

use crate::domain::UserId;

/// Exposes the current authenticated user, if any.
///
/// Absence is a normal state, not an error. Mounting with `None` produces
/// an anonymous deck whose decisions are classified but never transmitted.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn current_user_id(&self) -> Option<UserId>;
}
