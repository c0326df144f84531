//! User-owned data shapes: reviews and favorites.

use serde::{Deserialize, Serialize};

/// A review written by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub movie_id: String,
    pub text: String,
    pub rating: u8,
    /// Opaque backend timestamp; rendered, never parsed.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_title: Option<String>,
}

/// A movie on the user's favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMovie {
    pub movie_id: String,
    pub title: String,
    pub image_url: String,
    pub year: u16,
}
