use axum::extract::FromRef;
use groupie::GroupieClient;
use std::sync::Arc;

use crate::catalog::SharedCatalog;
use crate::config::Config;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) catalog: SharedCatalog,
    pub(crate) client: GroupieClient,
    pub(crate) config: Arc<Config>,
}

impl FromRef<WebState> for SharedCatalog {
    fn from_ref(input: &WebState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<WebState> for GroupieClient {
    fn from_ref(input: &WebState) -> Self {
        input.client.clone()
    }
}

impl FromRef<WebState> for Arc<Config> {
    fn from_ref(input: &WebState) -> Self {
        input.config.clone()
    }
}
