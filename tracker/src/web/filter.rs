use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use groupie::Artist;
use tracing::debug;

use crate::catalog::SharedCatalog;

use super::templates::{page::RenderPage, pages::filter_page::FilterPage};

/// Largest member count offered as a checkbox.
pub(crate) const MAX_MEMBERS: usize = 8;

/// Inclusive range where either end may be left open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearRange {
    min: Option<i32>,
    max: Option<i32>,
}

impl YearRange {
    fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    fn contains(&self, year: i32) -> bool {
        self.min.map_or(true, |min| year >= min) && self.max.map_or(true, |max| year <= max)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FilterParams {
    creation_date: YearRange,
    first_album: YearRange,
    members: Vec<usize>,
    city: Option<String>,
}

fn field<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

fn year(fields: &[(String, String)], key: &str) -> Option<i32> {
    field(fields, key).and_then(|value| value.parse().ok())
}

impl FilterParams {
    pub(crate) fn from_form(fields: &[(String, String)]) -> Self {
        Self {
            creation_date: YearRange {
                min: year(fields, "creation_date_min"),
                max: year(fields, "creation_date_max"),
            },
            first_album: YearRange {
                min: year(fields, "first_album_min"),
                max: year(fields, "first_album_max"),
            },
            members: (1..=MAX_MEMBERS)
                .filter(|count| field(fields, &format!("num_members_{count}")).is_some())
                .collect(),
            city: field(fields, "city").map(str::to_string),
        }
    }

    pub(crate) fn matches(&self, artist: &Artist, locations: &[String]) -> bool {
        if self.creation_date.is_set() && !self.creation_date.contains(artist.creation_date) {
            return false;
        }
        if self.first_album.is_set() {
            match artist.first_album_year() {
                Some(year) if self.first_album.contains(year) => {}
                _ => return false,
            }
        }
        if !self.members.is_empty() && !self.members.contains(&artist.members.len()) {
            return false;
        }
        if let Some(city) = &self.city {
            if !locations.iter().any(|location| location.ends_with(city.as_str())) {
                return false;
            }
        }
        true
    }
}

pub(crate) async fn filter(
    State(catalog): State<SharedCatalog>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let params = FilterParams::from_form(&fields);
    debug!("filtering with {params:?}");
    let catalog = catalog.read().await;
    let artists: Vec<Artist> = catalog
        .artists
        .iter()
        .filter(|artist| params.matches(artist, catalog.locations_of(artist.id)))
        .cloned()
        .collect();
    if artists.is_empty() {
        return Redirect::to("/").into_response();
    }
    RenderPage(FilterPage { artists }).into_response()
}
