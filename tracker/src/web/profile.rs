use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use groupie::{ArtistId, GroupieClient};

use super::{
    error::WebError,
    first_param,
    templates::{
        page::RenderPage,
        pages::{not_found::NotFoundPage, profile::Profile},
    },
};

/// Highest id the upstream API serves.
pub(crate) const MAX_ARTIST_ID: i32 = 52;

fn parse_artist_id(id: &str) -> Option<ArtistId> {
    id.parse::<i32>()
        .ok()
        .filter(|id| (1..=MAX_ARTIST_ID).contains(id))
        .map(ArtistId)
}

pub(crate) async fn profile(
    State(client): State<GroupieClient>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let id = first_param(&params, "id").unwrap_or_default();
    if id.contains('/') {
        return Err(WebError::NotFound);
    }
    let Some(artist_id) = parse_artist_id(id) else {
        return Ok((StatusCode::NOT_FOUND, RenderPage(NotFoundPage)).into_response());
    };
    let (artist, locations, dates, relation) = futures::try_join!(
        client.get_artist(artist_id),
        client.get_artist_locations(artist_id),
        client.get_artist_dates(artist_id),
        client.get_artist_relation(artist_id),
    )?;
    Ok(RenderPage(Profile {
        artist,
        locations,
        dates,
        relation,
    })
    .into_response())
}
