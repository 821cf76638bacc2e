//! The movie/show entity a content request is about.

use serde::{Deserialize, Serialize};

/// Catalog metadata for one movie or show, as passed to a content request.
///
/// Built per call and discarded after use. Only `id` and `title` are
/// required; the prompt builder and the offline template both render
/// literal placeholders for anything missing.
///
/// ```rust
/// # use nexus_ai::Subject;
/// let subject = Subject::new("27205", "Inception")
///     .release_year(2010)
///     .overview("A thief who steals corporate secrets through dream-sharing technology.")
///     .genres(["Sci-Fi", "Thriller"]);
/// assert_eq!(subject.release_year, Some(2010));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Catalog id, also the cache key for generated spoilers.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Subject {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            release_year: None,
            overview: String::new(),
            genres: Vec::new(),
        }
    }

    pub fn release_year(mut self, year: u16) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }
}
