//! Catalog trait and the anime record handed to the UI.
//!
//! The client converts raw wire types into [`Anime`] so the UI never
//! touches service-specific shapes.

use std::future::Future;

/// A read-only anime catalog.
pub trait AnimeCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search the catalog by title text.
    fn search(
        &self,
        query: &str,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Anime>, Self::Error>> + Send;

    /// Fetch one page of the catalog, unfiltered.
    fn browse_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Anime>, Self::Error>> + Send;
}

/// An anime record as received from the catalog.
///
/// Held in view state and displayed verbatim; never constructed or
/// mutated locally.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anime {
    pub service_id: u64,
    pub title: AnimeTitle,
    pub cover_large: Option<String>,
    pub cover_medium: Option<String>,
    /// Free-text synopsis; may contain HTML markup.
    pub synopsis: Option<String>,
    pub genres: Vec<String>,
    pub episodes: Option<u32>,
    /// Weighted average score, 0-100.
    pub average_score: Option<u32>,
    pub status: Option<String>,
    pub format: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<u32>,
    pub start_date: Option<AirDate>,
    pub end_date: Option<AirDate>,
    /// Minutes per episode.
    pub duration: Option<u32>,
    pub studios: Vec<String>,
}

/// Localized title variants.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimeTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl AnimeTitle {
    /// Title for list rows: english first, romaji as fallback.
    pub fn preferred(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .unwrap_or("Unknown title")
    }

    /// Title for the detail heading: romaji first, english as fallback.
    pub fn heading(&self) -> &str {
        self.romaji
            .as_deref()
            .or(self.english.as_deref())
            .unwrap_or("Unknown title")
    }
}

/// A fuzzy calendar date; any component may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AirDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_falls_back_to_romaji() {
        let title = AnimeTitle {
            romaji: Some("Sousou no Frieren".into()),
            english: None,
            native: None,
        };
        assert_eq!(title.preferred(), "Sousou no Frieren");
        assert_eq!(title.heading(), "Sousou no Frieren");
    }

    #[test]
    fn test_heading_prefers_romaji() {
        let title = AnimeTitle {
            romaji: Some("Shingeki no Kyojin".into()),
            english: Some("Attack on Titan".into()),
            native: Some("進撃の巨人".into()),
        };
        assert_eq!(title.preferred(), "Attack on Titan");
        assert_eq!(title.heading(), "Shingeki no Kyojin");
    }

    #[test]
    fn test_empty_title_has_placeholder() {
        let title = AnimeTitle::default();
        assert_eq!(title.preferred(), "Unknown title");
    }
}
