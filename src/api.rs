// API client module: a small blocking HTTP client for the portfolio
// backend. Only two read-only endpoints are used, `/api/works` and
// `/api/categories`, both returning JSON arrays.

use crate::error::{GalleryError, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Base URL used when neither `--api-url` nor `GALLERY_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5678";

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "GALLERY_API_URL";

/// A portfolio item as returned by `GET /api/works`. The backend also
/// embeds the owning user and the full category; both are optional here
/// because only `categoryId` is needed for filtering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A named grouping from `GET /api/categories`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Anything that can list works and categories. The page controller only
/// talks to this trait so it can be driven by an in-memory source in tests.
pub trait PortfolioSource {
    fn list_works(&self) -> Result<Vec<Work>>;
    fn list_categories(&self) -> Result<Vec<Category>>;
}

/// Blocking client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        Ok(ApiClient { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let res = self.client.get(&url).send()?;
        let status = res.status();
        let body = res.text()?;
        if !status.is_success() {
            tracing::warn!(%url, %status, "request failed");
            return Err(GalleryError::Status {
                endpoint: path.to_string(),
                status,
                body,
            });
        }
        serde_json::from_str(&body).map_err(|source| GalleryError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

impl PortfolioSource for ApiClient {
    fn list_works(&self) -> Result<Vec<Work>> {
        let works: Vec<Work> = self.get_json("/api/works")?;
        tracing::info!(count = works.len(), "fetched works");
        for work in &works {
            tracing::debug!(
                id = work.id,
                category_id = work.category_id,
                title = %work.title,
                image_url = %work.image_url,
                "work"
            );
        }
        Ok(works)
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        let categories: Vec<Category> = self.get_json("/api/categories")?;
        tracing::info!(count = categories.len(), "fetched categories");
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_tolerates_backend_extras() {
        let json = r#"{
            "id": 1,
            "title": "Abajour Tahina",
            "imageUrl": "http://localhost:5678/images/abajour-tahina.png",
            "categoryId": 1,
            "userId": 1,
            "category": { "id": 1, "name": "Objets" },
            "createdAt": "2023-01-01"
        }"#;
        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.category_id, 1);
        assert_eq!(work.image_url, "http://localhost:5678/images/abajour-tahina.png");
        assert_eq!(work.category.unwrap().name, "Objets");
    }

    #[test]
    fn work_without_optional_fields() {
        let json = r#"{"id": 2, "title": "T", "imageUrl": "x.png", "categoryId": 3}"#;
        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.user_id, None);
        assert!(work.category.is_none());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5678/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5678");
    }
}
