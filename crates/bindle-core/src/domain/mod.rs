//! Domain model (IDs, profiles, gestures, decisions, sessions).

pub mod decision;
pub mod gesture;
pub mod ids;
pub mod profile;
pub mod session;

pub use decision::{Decision, SwipeAction};
pub use gesture::{Displacement, GestureSample, ScreenMetrics};
pub use ids::{ProfileId, SwipeId, UserId};
pub use profile::{BudgetRange, CandidateProfile};
pub use session::Session;
