use reqwest::Client;

use super::error::AniListError;
use super::types::{GraphQLResponse, Media, PageResponse};
use crate::traits::{Anime, AnimeCatalog};

const API_URL: &str = "https://graphql.anilist.co";

const SEARCH_QUERY: &str = r#"
query ($search: String, $perPage: Int) {
    Page(perPage: $perPage) {
        media(search: $search, type: ANIME, isAdult: false) {
            id
            title { romaji english native }
            coverImage { large medium }
            description
            genres
            episodes
            averageScore
            status
            format
            season
            seasonYear
            startDate { year month day }
            endDate { year month day }
            duration
            studios { nodes { name } }
        }
    }
}
"#;

const BROWSE_QUERY: &str = r#"
query ($page: Int, $perPage: Int) {
    Page(page: $page, perPage: $perPage) {
        media(type: ANIME, isAdult: false) {
            id
            title { romaji english native }
            coverImage { large medium }
            description
            genres
            episodes
            averageScore
            status
            format
            season
            seasonYear
            startDate { year month day }
            endDate { year month day }
            duration
            studios { nodes { name } }
        }
    }
}
"#;

/// AniList GraphQL API client.
///
/// The explorer only uses public queries, so no authentication is
/// attached. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AniListClient {
    http: Client,
}

impl AniListClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(API_URL)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }

    /// Search for anime (raw wire types).
    async fn search_raw(&self, query: &str, per_page: u32) -> Result<Vec<Media>, AniListError> {
        let resp: GraphQLResponse<PageResponse> = self
            .graphql_request(
                "Search",
                SEARCH_QUERY,
                serde_json::json!({ "search": query, "perPage": per_page }),
            )
            .await?;

        Ok(resp.data.page.media)
    }

    /// Fetch one unfiltered catalog page (raw wire types).
    async fn browse_raw(&self, page: u32, per_page: u32) -> Result<Vec<Media>, AniListError> {
        let resp: GraphQLResponse<PageResponse> = self
            .graphql_request(
                "Browse",
                BROWSE_QUERY,
                serde_json::json!({ "page": page, "perPage": per_page }),
            )
            .await?;

        Ok(resp.data.page.media)
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimeCatalog for AniListClient {
    type Error = AniListError;

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Anime>, AniListError> {
        let media = self.search_raw(query, per_page).await?;
        Ok(media.into_iter().map(|m| m.into_anime()).collect())
    }

    async fn browse_page(&self, page: u32, per_page: u32) -> Result<Vec<Anime>, AniListError> {
        let media = self.browse_raw(page, per_page).await?;
        Ok(media.into_iter().map(|m| m.into_anime()).collect())
    }
}
