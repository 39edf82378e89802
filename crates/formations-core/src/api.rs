//! Remote formations API
//!
//! The browser client implements this over `gloo-net`; tests implement it
//! in memory. Futures are `?Send`: everything runs on the UI thread.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Formation, FormationId, FormationPayload};

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations on `/api/formations`.
#[async_trait(?Send)]
pub trait FormationApi {
    /// `GET /api/formations`, in server order.
    async fn list(&self) -> ApiResult<Vec<Formation>>;

    /// `POST /api/formations`, returning the created record.
    async fn create(&self, payload: &FormationPayload) -> ApiResult<Formation>;

    /// `PUT /api/formations/{id}` with the full record, returning the stored record.
    async fn update(&self, id: &FormationId, payload: &FormationPayload) -> ApiResult<Formation>;

    /// `DELETE /api/formations/{id}`.
    async fn delete(&self, id: &FormationId) -> ApiResult<()>;
}
