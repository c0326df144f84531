//! Movie catalog entries as the backend serves them.

use serde::{Deserialize, Serialize};

/// One-or-many genre labels: older catalog entries carry a single string,
/// newer ones an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    One(String),
    Many(Vec<String>),
}

impl Genre {
    /// All labels, regardless of wire shape.
    pub fn labels(&self) -> &[String] {
        match self {
            Genre::One(label) => std::slice::from_ref(label),
            Genre::Many(labels) => labels,
        }
    }
}

/// A catalog movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub year: u16,
    #[serde(rename = "gender")]
    pub genre: Genre,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// Payload for creating or editing a movie (admin form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub year: u16,
    #[serde(rename = "gender")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
}
