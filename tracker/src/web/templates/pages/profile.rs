use groupie::{Artist, Dates, Locations, Relation};
use maud::html;

use crate::web::templates::{components::header::Header, page::Page};

pub(crate) struct Profile {
    pub(crate) artist: Artist,
    pub(crate) locations: Locations,
    pub(crate) dates: Dates,
    pub(crate) relation: Relation,
}

impl Page for Profile {
    fn get_name(&'_ self) -> String {
        self.artist.name.clone()
    }

    fn get_description(&'_ self) -> Option<String> {
        Some(format!(
            "{} formed in {}, first album {}",
            self.artist.name, self.artist.creation_date, self.artist.first_album
        ))
    }

    fn draw_body(&self) -> maud::Markup {
        let Self {
            artist,
            locations,
            dates,
            relation,
        } = self;
        html! {
            (Header { search: "" })
            div class="container" {
                div class="main-content profile" {
                    img class="profile-image" src=(artist.image) alt=(artist.name);
                    h1 { (artist.name) }
                    dl {
                        dt { "Created" } dd { (artist.creation_date) }
                        dt { "First album" } dd { (artist.first_album) }
                    }
                    h3 { "Members" }
                    ul {
                        @for member in &artist.members {
                            li { (member) }
                        }
                    }
                    h3 { "Locations" }
                    ul {
                        @for location in &locations.locations {
                            li { (location) }
                        }
                    }
                    h3 { "Dates" }
                    ul {
                        // upstream marks past concerts with a leading `*`
                        @for date in &dates.dates {
                            li { (date.trim_start_matches('*')) }
                        }
                    }
                    h3 { "Concerts" }
                    table {
                        tr { th { "location" } th { "dates" } }
                        @for (location, dates) in &relation.dates_locations {
                            tr {
                                td { (location) }
                                td { (dates.join(", ")) }
                            }
                        }
                    }
                }
            }
        }
    }
}
