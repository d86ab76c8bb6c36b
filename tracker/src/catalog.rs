use std::sync::Arc;

use groupie::{Artist, GroupieClient, LocationIndex};
use itertools::Itertools;
use tokio::sync::RwLock;
use tracing::info;

pub(crate) type SharedCatalog = Arc<RwLock<Catalog>>;

/// Snapshot of the upstream artist data the site searches and filters over.
#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    pub(crate) artists: Vec<Artist>,
    pub(crate) locations: LocationIndex,
}

impl Catalog {
    pub(crate) async fn fetch(client: &GroupieClient) -> Result<Self, groupie::Error> {
        let (artists, locations) =
            futures::future::join(client.get_artists(), client.get_locations()).await;
        let catalog = Self {
            artists: artists?,
            locations: locations?,
        };
        info!(
            "catalog loaded with {} artists and {} location entries",
            catalog.artists.len(),
            catalog.locations.index.len()
        );
        Ok(catalog)
    }

    pub(crate) fn artist(&self, id: i32) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    /// Concert locations of an artist, empty if the index has no entry for it.
    pub(crate) fn locations_of(&self, artist_id: i32) -> &[String] {
        self.locations
            .index
            .iter()
            .find(|entry| entry.id == artist_id)
            .map(|entry| entry.locations.as_slice())
            .unwrap_or_default()
    }

    /// Every location in the index once, in the order first seen.
    pub(crate) fn unique_locations(&self) -> Vec<&str> {
        self.locations
            .index
            .iter()
            .flat_map(|entry| entry.locations.iter().map(String::as_str))
            .unique()
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn test_catalog() -> Catalog {
    use groupie::Locations;

    fn artist(
        id: i32,
        name: &str,
        members: &[&str],
        creation_date: i32,
        first_album: &str,
    ) -> Artist {
        Artist {
            id,
            image: format!("https://groupietrackers.herokuapp.com/api/images/{id}.jpeg"),
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            creation_date,
            first_album: first_album.to_string(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    fn locations(id: i32, locations: &[&str]) -> Locations {
        Locations {
            id,
            locations: locations.iter().map(|l| l.to_string()).collect(),
            dates: String::new(),
        }
    }

    Catalog {
        artists: vec![
            artist(
                1,
                "Queen",
                &["Freddie Mercury", "Brian May", "John Daecon", "Roger Meddows-Taylor"],
                1970,
                "14-12-1973",
            ),
            artist(2, "SOJA", &["Jacob Hemphill", "Bob Jefferson"], 1997, "05-06-2002"),
            artist(3, "Pink Floyd", &["Roger Waters", "David Gilmour"], 1965, "05-08-1967"),
            artist(4, "Scorpions", &["Rudolf Schenker", "Klaus Meine"], 1965, "01-01-1972"),
        ],
        locations: LocationIndex {
            index: vec![
                locations(1, &["north_carolina-usa", "osaka-japan"]),
                locations(2, &["playa_del_carmen-mexico", "osaka-japan"]),
                locations(3, &["london-uk"]),
                locations(4, &["berlin-germany", "london-uk"]),
            ],
        },
    }
}

#[cfg(test)]
mod test {
    use super::test_catalog;

    #[test]
    fn unique_locations_keep_first_seen_order() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.unique_locations(),
            vec![
                "north_carolina-usa",
                "osaka-japan",
                "playa_del_carmen-mexico",
                "london-uk",
                "berlin-germany"
            ]
        );
    }

    #[test]
    fn locations_of_unknown_artist_is_empty() {
        let catalog = test_catalog();
        assert!(catalog.locations_of(99).is_empty());
        assert_eq!(catalog.locations_of(3), ["london-uk".to_string()]);
        assert_eq!(catalog.artist(2).map(|a| a.name.as_str()), Some("SOJA"));
    }
}
