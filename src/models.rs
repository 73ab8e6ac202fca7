//! Models
//!
//! Control kinds and the JSON bodies returned by the toggle endpoints.

use serde::Deserialize;

/// The toggle controls this crate drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Favorite,
    MiniFollow,
    Follow,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [ControlKind::Favorite, ControlKind::MiniFollow, ControlKind::Follow];

    /// Console tag
    pub fn tag(self) -> &'static str {
        match self {
            ControlKind::Favorite => "Favorite",
            ControlKind::MiniFollow => "MiniFollow",
            ControlKind::Follow => "Follow",
        }
    }
}

/// Favorite endpoint body. Server-side failures come back as `{"error": ...}`
/// with a 200 status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteResponse {
    #[serde(default)]
    pub favorite_count: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowResponse {
    pub follow_count: i64,
}
