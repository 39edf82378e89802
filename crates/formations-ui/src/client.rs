//! HTTP implementation of `FormationApi` over the browser's `fetch`

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use tracing::debug;

use formations_core::api::ApiResult;
use formations_core::model::parse_formation_list;
use formations_core::{ApiConfig, ApiError, Formation, FormationApi, FormationId, FormationPayload};

/// REST client for the formations collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpFormationApi {
    config: ApiConfig,
}

impl HttpFormationApi {
    #[must_use]
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Client provided by the `App` context, or one for the default backend.
#[must_use]
pub fn use_api() -> HttpFormationApi {
    use_context::<HttpFormationApi>().unwrap_or_default()
}

fn network_error(url: &str, err: &gloo_net::Error) -> ApiError {
    ApiError::network(url, err.to_string())
}

fn ensure_success(url: &str, response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::status(url, response.status()))
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::decode(url, err.to_string()))
}

#[async_trait(?Send)]
impl FormationApi for HttpFormationApi {
    async fn list(&self) -> ApiResult<Vec<Formation>> {
        let url = self.config.collection_url();
        debug!(%url, "fetching formations");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| network_error(&url, &err))?;
        let body = ensure_success(&url, response)?
            .text()
            .await
            .map_err(|err| network_error(&url, &err))?;
        parse_formation_list(&body).map_err(|err| ApiError::decode(&url, err.to_string()))
    }

    async fn create(&self, payload: &FormationPayload) -> ApiResult<Formation> {
        let url = self.config.collection_url();
        debug!(%url, nom = %payload.nom, "creating formation");
        let response = Request::post(&url)
            .json(payload)
            .map_err(|err| ApiError::encode(err.to_string()))?
            .send()
            .await
            .map_err(|err| network_error(&url, &err))?;
        decode(&url, ensure_success(&url, response)?).await
    }

    async fn update(&self, id: &FormationId, payload: &FormationPayload) -> ApiResult<Formation> {
        let url = self.config.item_url(id);
        debug!(%url, "updating formation");
        let response = Request::put(&url)
            .json(payload)
            .map_err(|err| ApiError::encode(err.to_string()))?
            .send()
            .await
            .map_err(|err| network_error(&url, &err))?;
        decode(&url, ensure_success(&url, response)?).await
    }

    async fn delete(&self, id: &FormationId) -> ApiResult<()> {
        let url = self.config.item_url(id);
        debug!(%url, "deleting formation");
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|err| network_error(&url, &err))?;
        ensure_success(&url, response).map(|_| ())
    }
}
