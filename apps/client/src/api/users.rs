//! User-related API calls: reviews and favorites.
//!
//! Pure passthrough: method, path, optional bearer header. The bearer header
//! is re-read from storage on every call, so a login or logout between calls
//! takes effect immediately. A missing token simply omits the header and
//! lets the backend answer 401.

use std::sync::Arc;

use reqwest::header;
use reqwest::{RequestBuilder, Response};

use crate::auth::session::Session;
use crate::config::Config;
use crate::error::AppError;
use crate::models::user::{FavoriteMovie, Review};
use crate::storage::TokenStore;

/// Client for user-scoped endpoints.
#[derive(Clone)]
pub struct UserApi {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl UserApi {
    pub fn new(config: &Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session: Session::new(store),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header if a token is currently stored.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.authorization_header_value() {
            Some(value) => builder.header(header::AUTHORIZATION, value),
            None => builder,
        }
    }

    fn reviews_request(&self, username: &str) -> RequestBuilder {
        self.authorized(
            self.http
                .get(self.url(&format!("/api/users/{username}/reviews"))),
        )
    }

    fn favorites_request(&self, username: &str) -> RequestBuilder {
        // Favorites lists are public; no bearer header.
        self.http
            .get(self.url(&format!("/api/users/{username}/favorites")))
    }

    fn toggle_favorite_request(&self, movie_id: &str) -> RequestBuilder {
        self.authorized(
            self.http
                .post(self.url(&format!("/api/users/favorites/{movie_id}")))
                .json(&serde_json::json!({})),
        )
    }

    fn remove_favorite_request(&self, movie_id: &str) -> RequestBuilder {
        self.authorized(
            self.http
                .delete(self.url(&format!("/api/users/favorites/{movie_id}"))),
        )
    }

    /// List the reviews written by `username`.
    pub async fn get_user_reviews(&self, username: &str) -> Result<Vec<Review>, AppError> {
        let response = self.reviews_request(username).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// List the favorites of `username`.
    pub async fn get_user_favorites(&self, username: &str) -> Result<Vec<FavoriteMovie>, AppError> {
        let response = self.favorites_request(username).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Add or remove `movie_id` from the current user's favorites.
    pub async fn toggle_favorite(&self, movie_id: &str) -> Result<(), AppError> {
        let response = self.toggle_favorite_request(movie_id).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Remove `movie_id` from the current user's favorites.
    pub async fn remove_favorite(&self, movie_id: &str) -> Result<(), AppError> {
        let response = self.remove_favorite_request(movie_id).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// True iff `movie_id` appears in an already-fetched favorites list.
pub fn is_favorite(movie_id: &str, favorites: &[FavoriteMovie]) -> bool {
    favorites.iter().any(|fav| fav.movie_id == movie_id)
}

/// Map non-2xx responses to `AppError::Api`, carrying the response body as
/// detail when one is readable.
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(AppError::api(status.as_u16(), detail))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::header;

    use crate::config::Config;
    use crate::models::user::FavoriteMovie;
    use crate::storage::memory::MemoryTokenStore;
    use crate::storage::{TokenStore, TOKEN_KEY};

    use super::{is_favorite, UserApi};

    fn api_with_token(token: Option<&str>) -> UserApi {
        let store = Arc::new(MemoryTokenStore::new());
        if let Some(token) = token {
            store.set(TOKEN_KEY, token).unwrap();
        }
        UserApi::new(&Config::default(), store).unwrap()
    }

    #[test]
    fn reviews_request_carries_bearer_header() {
        let api = api_with_token(Some("abc.def.ghi"));
        let request = api.reviews_request("alice").build().unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/users/alice/reviews"
        );
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn favorites_request_is_unauthenticated() {
        let api = api_with_token(Some("abc.def.ghi"));
        let request = api.favorites_request("alice").build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/users/alice/favorites"
        );
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn toggle_is_a_post_with_empty_json_body() {
        let api = api_with_token(Some("abc.def.ghi"));
        let request = api.toggle_favorite_request("m1").build().unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/users/favorites/m1"
        );
        assert!(request.headers().get(header::AUTHORIZATION).is_some());
    }

    #[test]
    fn remove_is_a_delete() {
        let api = api_with_token(None);
        let request = api.remove_favorite_request("m1").build().unwrap();

        assert_eq!(request.method(), "DELETE");
        // No token stored, so no header attached.
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn is_favorite_checks_membership() {
        let favorites = vec![FavoriteMovie {
            movie_id: "m1".to_string(),
            title: "Metropolis".to_string(),
            image_url: "https://img.example.com/m1.jpg".to_string(),
            year: 1927,
        }];
        assert!(is_favorite("m1", &favorites));
        assert!(!is_favorite("m2", &favorites));
        assert!(!is_favorite("m1", &[]));
    }
}
