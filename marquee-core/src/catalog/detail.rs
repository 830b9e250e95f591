use marquee_model::{MovieDetail, NOT_AVAILABLE};

use super::{
    money::format_usd,
    placeholders::{
        FEATURED_AWARDS, FEATURED_FUN_FACTS, PRODUCTION_DETAILS_PLACEHOLDER,
        UNAVAILABLE_AWARDS, UNAVAILABLE_FUN_FACTS, streaming_availability, to_strings,
    },
    poster_url, release_year, text_or_placeholder,
    trailer::{resolve_trailer_key, trailer_url},
};
use crate::providers::dto::{TmdbCredits, TmdbMovie};

pub const DIRECTOR_JOB: &str = "Director";
pub const MAX_CAST: usize = 5;

/// Reshape a TMDB movie record (with embedded credits, videos and external
/// ids) into a [`MovieDetail`]. `None` in, `None` out.
pub fn normalize_movie(
    record: Option<&TmdbMovie>,
    image_base_url: &str,
) -> Option<MovieDetail> {
    let movie = record?;

    let trailer = movie
        .videos
        .as_ref()
        .and_then(|videos| resolve_trailer_key(&videos.results))
        .map(trailer_url);

    Some(MovieDetail {
        title: text_or_placeholder(movie.title.as_deref()),
        original_title: text_or_placeholder(movie.original_title.as_deref()),
        year: release_year(movie.release_date.as_deref()),
        runtime: movie.runtime,
        overview: text_or_placeholder(movie.overview.as_deref()),
        external_id: external_id(movie),
        trailer_url: trailer,
        rating: movie.vote_average,
        director: director(movie.credits.as_ref()),
        cast: cast(movie.credits.as_ref()),
        genres: movie
            .genres
            .iter()
            .filter_map(|genre| genre.name.clone())
            .collect(),
        poster_url: poster_url(image_base_url, movie.poster_path.as_deref()),
        awards: to_strings(UNAVAILABLE_AWARDS),
        fun_facts: to_strings(UNAVAILABLE_FUN_FACTS),
        production_details: PRODUCTION_DETAILS_PLACEHOLDER.to_string(),
        ..MovieDetail::placeholder(movie.id)
    })
}

/// Final touches for the detail endpoint.
///
/// Featured awards and fun facts always replace whatever the normalizer
/// produced. Budget and box office are appended only when non-zero.
pub fn apply_featured_content(detail: &mut MovieDetail, record: Option<&TmdbMovie>) {
    detail.awards = to_strings(FEATURED_AWARDS);
    detail.fun_facts = to_strings(FEATURED_FUN_FACTS);

    let budget = record.and_then(|movie| movie.budget).filter(|v| *v > 0);
    let revenue = record.and_then(|movie| movie.revenue).filter(|v| *v > 0);

    if let Some(budget) = budget {
        detail
            .production_details
            .push_str(&format!(" Budget: {}.", format_usd(budget)));
    }
    if let Some(revenue) = revenue {
        detail
            .production_details
            .push_str(&format!(" Box office: {}.", format_usd(revenue)));
    }

    detail.availability = streaming_availability();
}

fn director(credits: Option<&TmdbCredits>) -> String {
    credits
        .and_then(|credits| {
            credits
                .crew
                .iter()
                .find(|member| member.job.as_deref() == Some(DIRECTOR_JOB))
        })
        .and_then(|member| member.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn cast(credits: Option<&TmdbCredits>) -> Vec<String> {
    credits
        .map(|credits| {
            credits
                .cast
                .iter()
                .take(MAX_CAST)
                .map(|member| text_or_placeholder(member.name.as_deref()))
                .collect()
        })
        .unwrap_or_default()
}

// external_ids is the canonical source; the top-level imdb_id is a fallback.
fn external_id(movie: &TmdbMovie) -> Option<String> {
    movie
        .external_ids
        .as_ref()
        .and_then(|ids| ids.imdb_id.clone())
        .filter(|id| !id.is_empty())
        .or_else(|| movie.imdb_id.clone().filter(|id| !id.is_empty()))
}
