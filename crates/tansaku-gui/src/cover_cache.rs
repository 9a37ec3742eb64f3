use std::collections::HashMap;
use std::path::PathBuf;

/// State of a cover image for a given cache key.
#[derive(Debug, Clone)]
pub enum CoverState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping cover keys to their image state.
///
/// Suggestion thumbnails are keyed by the record's service id; the
/// detail view's large cover uses the negated id so the two sizes get
/// distinct cache files.
#[derive(Debug, Default)]
pub struct CoverCache {
    pub states: HashMap<i64, CoverState>,
}

impl CoverCache {
    pub fn get(&self, key: i64) -> Option<&CoverState> {
        self.states.get(&key)
    }
}

/// Cache key for a suggestion thumbnail (medium cover).
pub fn thumb_key(service_id: u64) -> i64 {
    service_id as i64
}

/// Cache key for the detail view's large cover.
pub fn detail_key(service_id: u64) -> i64 {
    -(service_id as i64)
}

/// Directory for cached cover images.
pub fn covers_dir() -> PathBuf {
    crate::config::project_dirs()
        .map(|dirs| dirs.data_dir().join("covers"))
        .unwrap_or_else(|| PathBuf::from("covers"))
}

/// Expected file path for a cover image.
pub fn cover_path(key: i64) -> PathBuf {
    covers_dir().join(format!("{key}.jpg"))
}

/// Download a cover image and save it to disk. Returns the saved path.
pub async fn fetch_cover(key: i64, url: String) -> Result<PathBuf, String> {
    let dir = covers_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = cover_path(key);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_and_detail_keys_are_distinct() {
        assert_ne!(thumb_key(154587), detail_key(154587));
        assert_eq!(thumb_key(154587), 154587);
        assert_eq!(detail_key(154587), -154587);
    }
}
