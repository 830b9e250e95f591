//! Subset of the TMDB v3 wire format the gateway reads.
//!
//! Every field is optional or defaulted: TMDB omits or nulls fields freely and
//! a missing value must never fail the whole record.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET search/movie`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbSearchPage {
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<TmdbSearchItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbSearchItem {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub popularity: Option<f64>,
}

impl TmdbSearchItem {
    /// Missing popularity ranks as zero.
    pub fn popularity_score(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }

    pub fn has_poster(&self) -> bool {
        self.poster_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
    }
}

/// `GET movie/{id}?append_to_response=videos,credits,external_ids`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub overview: Option<String>,
    pub imdb_id: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<TmdbGenre>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub credits: Option<TmdbCredits>,
    pub videos: Option<TmdbVideos>,
    pub external_ids: Option<TmdbExternalIds>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbCredits {
    #[serde(deserialize_with = "null_as_default")]
    pub cast: Vec<TmdbCastMember>,
    #[serde(deserialize_with = "null_as_default")]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbCastMember {
    pub name: Option<String>,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbCrewMember {
    pub name: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbVideos {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbVideo {
    pub key: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbExternalIds {
    pub imdb_id: Option<String>,
}

/// Error payload TMDB sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct TmdbErrorBody {
    #[serde(default)]
    pub status_message: Option<String>,
}
