use groupie::Artist;
use tracker_api_types::SearchResult;

use crate::catalog::Catalog;

pub(crate) const MAX_SEARCH_RESULTS: usize = 16;

/// Collects results until the cap is reached, later pushes are dropped.
struct Results(Vec<SearchResult>);

impl Results {
    fn push(&mut self, artist: &Artist, id: i32, name: &str, result_type: String) {
        if self.0.len() < MAX_SEARCH_RESULTS {
            self.0.push(SearchResult {
                id,
                name: name.to_string(),
                result_type,
                image: Some(artist.image.clone()),
            });
        }
    }

    fn is_full(&self) -> bool {
        self.0.len() >= MAX_SEARCH_RESULTS
    }
}

fn starts_with(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().starts_with(query)
}

/// Contains the query somewhere other than the start.
fn contains_inside(haystack: &str, query: &str) -> bool {
    let haystack = haystack.to_lowercase();
    !haystack.starts_with(query) && haystack.contains(query)
}

/// Case insensitive search over artist names, albums, creation dates, members and
/// concert locations. Prefix matches come before substring matches.
pub(crate) fn search(catalog: &Catalog, raw_query: &str) -> Vec<SearchResult> {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.as_str();
    let mut results = Results(Vec::new());

    for artist in catalog.artists.iter().filter(|a| starts_with(&a.name, query)) {
        results.push(artist, artist.id, &artist.name, "artist/band".to_string());
    }
    for artist in &catalog.artists {
        if results.is_full() {
            break;
        }
        if contains_inside(&artist.name, query) {
            results.push(artist, artist.id, &artist.name, "artist/band".to_string());
        }
        if starts_with(&artist.first_album, query) {
            results.push(
                artist,
                artist.id,
                &artist.first_album,
                format!("FirstAlbum of {}", artist.name),
            );
        }
        let creation_date = artist.creation_date.to_string();
        if creation_date.starts_with(query) {
            results.push(
                artist,
                artist.id,
                &creation_date,
                format!("Creation Date of {}", artist.name),
            );
        }
    }

    for artist in &catalog.artists {
        for member in artist.members.iter().filter(|m| starts_with(m, query)) {
            results.push(artist, artist.id, member, format!("member of {}", artist.name));
        }
    }
    for artist in &catalog.artists {
        if results.is_full() {
            break;
        }
        for member in artist.members.iter().filter(|m| contains_inside(m, query)) {
            results.push(artist, artist.id, member, format!("member of {}", artist.name));
        }
    }

    for entry in &catalog.locations.index {
        let Some(artist) = catalog.artist(entry.id) else {
            continue;
        };
        for location in &entry.locations {
            if location.to_lowercase().contains(query) {
                results.push(artist, entry.id, location, format!("location {}", artist.name));
            }
        }
    }
    results.0
}
