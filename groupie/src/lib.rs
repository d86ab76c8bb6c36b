use log::info;
use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Hash, Copy, Clone, Debug, Deserialize, Serialize, Eq, PartialEq, PartialOrd, Ord)]
pub struct ArtistId(pub i32);

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i32,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    /// Formatted as `DD-MM-YYYY`
    pub first_album: String,
    /// Links back into the API, unused by the site but kept for completeness
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

impl Artist {
    /// Year of the first album, if the date follows the `DD-MM-YYYY` layout.
    pub fn first_album_year(&self) -> Option<i32> {
        self.first_album.get(6..)?.parse().ok()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LocationIndex {
    pub index: Vec<Locations>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Locations {
    pub id: i32,
    pub locations: Vec<String>,
    #[serde(default)]
    pub dates: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dates {
    pub id: i32,
    pub dates: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: i32,
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct GroupieClient {
    client: Client,
    base_url: String,
}

impl GroupieClient {
    pub const GROUPIE_BASE_URL: &'static str = "https://groupietrackers.herokuapp.com/api";

    pub fn new(base_url: impl ToString, user_agent: impl ToString) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .build()?;
        let base_url = base_url.to_string().trim_end_matches('/').to_string();
        Ok(GroupieClient { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}/{path}", self.base_url))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let request = Request::new(Method::GET, self.endpoint(path)?);
        info!("fetching {}", request.url());
        let response = self.client.execute(request).await?.error_for_status()?;
        // read as bytes so decode failures report the serde path
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get_artists(&self) -> Result<Vec<Artist>, Error> {
        self.get_json("artists").await
    }

    pub async fn get_locations(&self) -> Result<LocationIndex, Error> {
        self.get_json("locations").await
    }

    pub async fn get_artist(&self, ArtistId(id): ArtistId) -> Result<Artist, Error> {
        self.get_json(&format!("artists/{id}")).await
    }

    pub async fn get_artist_locations(&self, ArtistId(id): ArtistId) -> Result<Locations, Error> {
        self.get_json(&format!("locations/{id}")).await
    }

    pub async fn get_artist_dates(&self, ArtistId(id): ArtistId) -> Result<Dates, Error> {
        self.get_json(&format!("dates/{id}")).await
    }

    pub async fn get_artist_relation(&self, ArtistId(id): ArtistId) -> Result<Relation, Error> {
        self.get_json(&format!("relation/{id}")).await
    }
}
