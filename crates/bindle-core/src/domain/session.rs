//! Session identity: who is swiping, if anyone.

use super::ids::UserId;

/// The acting user for a mounted deck.
///
/// Read once from the session store at mount and held for the deck's
/// lifetime. There is deliberately no fallback id: an absent session is
/// `Anonymous`, and anonymous decisions are never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Session {
    Authenticated(UserId),
    Anonymous,
}

impl Session {
    pub fn from_user_id(user_id: Option<UserId>) -> Self {
        match user_id {
            Some(id) => Session::Authenticated(id),
            None => Session::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user_id(self) -> Option<UserId> {
        match self {
            Session::Authenticated(id) => Some(id),
            Session::Anonymous => None,
        }
    }
}
