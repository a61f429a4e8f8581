//! Movie model and related write payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Closed set of genre tags a movie may carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
}

impl Genre {
    /// Canonical tag name as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-Fi",
            Self::Crime => "Crime",
        }
    }

    /// Case-insensitive comparison against a query-supplied tag.
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movie record as stored and served.
///
/// Every stored record satisfies the full schema; the `Validate` rules are
/// re-checked when seeding the store from a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Movie {
    /// Server-generated unique identifier, immutable once minted
    pub id: String,
    /// Movie title
    pub title: String,
    /// Genre tags, insertion order preserved
    pub genre: Vec<Genre>,
    /// Release year
    #[validate(range(min = 1900, max = 2024, message = "year must be between 1900 and 2024"))]
    pub year: i32,
    /// Director name
    pub director: String,
    /// Runtime in minutes
    #[validate(range(min = 1_i64, message = "duration must be a positive number of minutes"))]
    pub duration: i64,
    /// Audience rating, 0 to 10
    #[validate(range(min = 0.0, max = 10.0, message = "rate must be between 0 and 10"))]
    pub rate: f64,
    /// Poster image URL
    #[validate(url(message = "poster must be a valid URL"))]
    pub poster: String,
}

impl Movie {
    /// Mint a new record from a validated create payload.
    pub fn from_draft(draft: MovieDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            genre: draft.genre,
            year: draft.year,
            director: draft.director,
            duration: draft.duration,
            rate: draft.rate,
            poster: draft.poster,
        }
    }

    /// Shallow-merge a validated patch over this record.
    ///
    /// Fields absent from the patch are retained unchanged; `id` is never
    /// touched.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
    }

    /// Whether any of this record's tags matches `tag`, case-insensitively.
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre.iter().any(|g| g.matches(tag))
    }
}

/// Full create payload: every `Movie` field except `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct MovieDraft {
    pub title: String,
    pub genre: Vec<Genre>,
    #[validate(range(min = 1900, max = 2024, message = "year must be between 1900 and 2024"))]
    pub year: i32,
    pub director: String,
    #[validate(range(min = 1_i64, message = "duration must be a positive number of minutes"))]
    pub duration: i64,
    /// Defaults to 5 when omitted (full-validation path only)
    #[serde(default = "default_rate")]
    #[validate(range(min = 0.0, max = 10.0, message = "rate must be between 0 and 10"))]
    pub rate: f64,
    #[validate(url(message = "poster must be a valid URL"))]
    pub poster: String,
}

fn default_rate() -> f64 {
    5.0
}

/// Partial update payload: every draft field optional.
///
/// Present fields are validated against the same per-field rules as the
/// full payload; nothing is required and no default is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct MoviePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1900, max = 2024, message = "year must be between 1900 and 2024"))]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1_i64, message = "duration must be a positive number of minutes"))]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 10.0, message = "rate must be between 0 and 10"))]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "poster must be a valid URL"))]
    pub poster: Option<String>,
}
