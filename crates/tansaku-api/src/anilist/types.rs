use serde::Deserialize;

use crate::traits::{AirDate, Anime, AnimeTitle};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: PageData,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub media: Vec<Media>,
}

// ── Media ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Media {
    pub id: u64,
    pub title: Option<MediaTitle>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<MediaCoverImage>,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub episodes: Option<u32>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    pub status: Option<String>,
    pub format: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "seasonYear")]
    pub season_year: Option<u32>,
    #[serde(rename = "startDate")]
    pub start_date: Option<FuzzyDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<FuzzyDate>,
    pub duration: Option<u32>,
    pub studios: Option<StudioConnection>,
}

#[derive(Debug, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaCoverImage {
    pub large: Option<String>,
    pub medium: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StudioConnection {
    pub nodes: Option<Vec<StudioNode>>,
}

#[derive(Debug, Deserialize)]
pub struct StudioNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

// ── Conversions ──────────────────────────────────────────────────

impl FuzzyDate {
    fn into_air_date(self) -> Option<AirDate> {
        // An all-null date object carries no information.
        if self.year.is_none() && self.month.is_none() && self.day.is_none() {
            return None;
        }
        Some(AirDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

impl Media {
    pub fn into_anime(self) -> Anime {
        let title = match self.title {
            Some(t) => AnimeTitle {
                romaji: t.romaji,
                english: t.english,
                native: t.native,
            },
            None => AnimeTitle::default(),
        };

        let (cover_large, cover_medium) = match self.cover_image {
            Some(c) => (c.large, c.medium),
            None => (None, None),
        };

        let studios = self
            .studios
            .and_then(|s| s.nodes)
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.name)
            .collect();

        Anime {
            service_id: self.id,
            title,
            cover_large,
            cover_medium,
            synopsis: self.description,
            genres: self.genres.unwrap_or_default(),
            episodes: self.episodes,
            average_score: self.average_score,
            status: self.status,
            format: self.format,
            season: self.season,
            season_year: self.season_year,
            start_date: self.start_date.and_then(FuzzyDate::into_air_date),
            end_date: self.end_date.and_then(FuzzyDate::into_air_date),
            duration: self.duration,
            studios,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "data": {
                "Page": {
                    "media": [
                        {
                            "id": 154587,
                            "title": {
                                "romaji": "Sousou no Frieren",
                                "english": "Frieren: Beyond Journey's End",
                                "native": "葬送のフリーレン"
                            },
                            "coverImage": {
                                "large": "https://s4.anilist.co/file/anilistcdn/media/anime/cover/large/154587.jpg",
                                "medium": "https://s4.anilist.co/file/anilistcdn/media/anime/cover/medium/154587.jpg"
                            },
                            "description": "After the party defeats the Demon King...",
                            "genres": ["Adventure", "Drama", "Fantasy"],
                            "episodes": 28,
                            "averageScore": 89,
                            "status": "FINISHED",
                            "format": "TV",
                            "season": "FALL",
                            "seasonYear": 2023,
                            "startDate": { "year": 2023, "month": 9, "day": 29 },
                            "endDate": { "year": 2024, "month": 3, "day": 22 },
                            "duration": 24,
                            "studios": { "nodes": [ { "name": "Madhouse" } ] }
                        }
                    ]
                }
            }
        }"#;

        let resp: GraphQLResponse<PageResponse> = serde_json::from_str(json).unwrap();
        let media = resp.data.page.media;
        assert_eq!(media.len(), 1);

        let anime = media.into_iter().next().unwrap().into_anime();
        assert_eq!(anime.service_id, 154587);
        assert_eq!(anime.title.heading(), "Sousou no Frieren");
        assert_eq!(
            anime.title.preferred(),
            "Frieren: Beyond Journey's End"
        );
        assert_eq!(anime.episodes, Some(28));
        assert_eq!(anime.average_score, Some(89));
        assert_eq!(anime.season.as_deref(), Some("FALL"));
        assert_eq!(anime.season_year, Some(2023));
        assert_eq!(anime.duration, Some(24));
        assert_eq!(anime.studios, vec!["Madhouse".to_string()]);
        assert_eq!(
            anime.start_date,
            Some(crate::traits::AirDate {
                year: Some(2023),
                month: Some(9),
                day: Some(29),
            })
        );
        assert!(anime.cover_medium.is_some());
    }

    #[test]
    fn test_deserialize_minimal_media() {
        let json = r#"{ "id": 1, "title": { "romaji": "Test" } }"#;
        let media: Media = serde_json::from_str(json).unwrap();
        let anime = media.into_anime();
        assert_eq!(anime.service_id, 1);
        assert_eq!(anime.title.heading(), "Test");
        assert!(anime.cover_large.is_none());
        assert!(anime.genres.is_empty());
        assert!(anime.studios.is_empty());
        assert!(anime.start_date.is_none());
    }

    #[test]
    fn test_all_null_date_is_dropped() {
        let json = r#"{
            "id": 2,
            "startDate": { "year": null, "month": null, "day": null },
            "endDate": { "year": 2024, "month": null, "day": null }
        }"#;
        let media: Media = serde_json::from_str(json).unwrap();
        let anime = media.into_anime();
        assert!(anime.start_date.is_none());
        let end = anime.end_date.unwrap();
        assert_eq!(end.year, Some(2024));
        assert_eq!(end.month, None);
    }

    #[test]
    fn test_empty_page_deserializes() {
        let json = r#"{ "data": { "Page": { "media": [] } } }"#;
        let resp: GraphQLResponse<PageResponse> = serde_json::from_str(json).unwrap();
        assert!(resp.data.page.media.is_empty());
    }
}
