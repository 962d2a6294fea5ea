use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::genre::Genre;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub content_type: ContentType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub release_year: u32,
    pub rating: ContentRating,
    pub duration_minutes: u32, // minutes for movies, average episode length for series
    pub poster_url: String,
    pub backdrop_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    pub average_rating: f32, // 1-5
    pub total_ratings: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u32>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_original: bool,
    #[serde(default)]
    pub is_top10: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top10_rank: Option<u32>,
    pub added_at: DateTime<Utc>,
}

impl Content {
    /// Whether any of this title's genres carries the given slug
    pub fn has_genre_slug(&self, slug: &str) -> bool {
        self.genres.iter().any(|g| g.slug == slug)
    }

    pub fn has_genre_id(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
    Documentary,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Movie => write!(f, "movie"),
            ContentType::Series => write!(f, "series"),
            ContentType::Documentary => write!(f, "documentary"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(ContentType::Movie),
            "series" => Ok(ContentType::Series),
            "documentary" => Ok(ContentType::Documentary),
            other => Err(format!(
                "unknown content type '{}', expected movie, series, or documentary",
                other
            )),
        }
    }
}

/// MPAA / TV Parental Guidelines ratings, doubling as profile maturity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[serde(rename = "TV-Y")]
    TvY,
    #[serde(rename = "TV-Y7")]
    TvY7,
    #[serde(rename = "TV-G")]
    TvG,
    #[serde(rename = "TV-PG")]
    TvPg,
    #[serde(rename = "TV-14")]
    Tv14,
    #[serde(rename = "TV-MA")]
    TvMa,
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::Nc17 => "NC-17",
            ContentRating::TvY => "TV-Y",
            ContentRating::TvY7 => "TV-Y7",
            ContentRating::TvG => "TV-G",
            ContentRating::TvPg => "TV-PG",
            ContentRating::Tv14 => "TV-14",
            ContentRating::TvMa => "TV-MA",
        }
    }
}

impl std::fmt::Display for ContentRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "G" => Ok(ContentRating::G),
            "PG" => Ok(ContentRating::Pg),
            "PG-13" => Ok(ContentRating::Pg13),
            "R" => Ok(ContentRating::R),
            "NC-17" => Ok(ContentRating::Nc17),
            "TV-Y" => Ok(ContentRating::TvY),
            "TV-Y7" => Ok(ContentRating::TvY7),
            "TV-G" => Ok(ContentRating::TvG),
            "TV-PG" => Ok(ContentRating::TvPg),
            "TV-14" => Ok(ContentRating::Tv14),
            "TV-MA" => Ok(ContentRating::TvMa),
            other => Err(format!("unknown rating '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: String,
    pub name: String,
    pub character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_use_their_display_form_on_the_wire() {
        assert_eq!(serde_json::to_string(&ContentRating::Pg13).unwrap(), "\"PG-13\"");
        assert_eq!(serde_json::to_string(&ContentRating::TvMa).unwrap(), "\"TV-MA\"");
        assert_eq!(
            serde_json::from_str::<ContentRating>("\"TV-14\"").unwrap(),
            ContentRating::Tv14
        );
    }

    #[test]
    fn content_types_parse_case_insensitively() {
        assert_eq!("Movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert_eq!(serde_json::to_string(&ContentType::Series).unwrap(), "\"series\"");
        assert!("podcast".parse::<ContentType>().is_err());
    }
}
