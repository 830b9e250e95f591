use marquee_model::SearchResultItem;

use super::{poster_url, release_year, text_or_placeholder};
use crate::providers::dto::TmdbSearchItem;

pub const MAX_SEARCH_RESULTS: usize = 30;

/// Order by popularity (highest first), drop entries without a poster and
/// keep the first [`MAX_SEARCH_RESULTS`].
///
/// The sort is stable, so equally popular results keep their upstream order.
pub fn rank_search_results(
    mut results: Vec<TmdbSearchItem>,
    image_base_url: &str,
) -> Vec<SearchResultItem> {
    results.sort_by(|a, b| b.popularity_score().total_cmp(&a.popularity_score()));

    results
        .into_iter()
        .filter(TmdbSearchItem::has_poster)
        .take(MAX_SEARCH_RESULTS)
        .map(|item| to_search_result(item, image_base_url))
        .collect()
}

fn to_search_result(item: TmdbSearchItem, image_base_url: &str) -> SearchResultItem {
    SearchResultItem {
        id: item.id,
        title: text_or_placeholder(item.title.as_deref()),
        original_title: text_or_placeholder(item.original_title.as_deref()),
        year: release_year(item.release_date.as_deref()),
        poster_url: poster_url(image_base_url, item.poster_path.as_deref()),
        rating: item.vote_average,
    }
}
