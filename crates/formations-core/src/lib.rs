//! Domain core for the formations admin console
//!
//! Everything here is target-independent: it compiles for the browser
//! (`wasm32-unknown-unknown`) and natively, so view behaviour can be tested
//! without a DOM.
//!
//! ## Module Structure
//! - `model`: the `Formation` record and its outgoing payload
//! - `schema`: declarative field list driving both create and edit forms
//! - `draft`: the not-yet-submitted text values of a form
//! - `validation`: draft validation and numeric coercion
//! - `state`: list/detail/edit and create view state machines
//! - `api`: the `FormationApi` seam implemented by the HTTP client
//! - `actions`: delete and edit actions with their dialogs
//! - `config`: API endpoint configuration and display constants
//! - `display`: price, date and image formatting for cards
//! - `messages`: user-facing strings
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod actions;
pub mod api;
pub mod config;
pub mod display;
pub mod draft;
pub mod error;
pub mod messages;
pub mod model;
pub mod schema;
pub mod state;
pub mod validation;

pub use actions::{Dialogs, ListStore, Outcome};
pub use api::FormationApi;
pub use config::ApiConfig;
pub use draft::FormationDraft;
pub use error::{ApiError, ValidationError};
pub use model::{Formation, FormationId, FormationPayload};
pub use schema::{FieldName, FieldSpec, FormKind, FormSchema, InputKind};
pub use state::create::{Confirmation, CreateError, CreateForm};
pub use state::list::{EditSession, FetchEpoch, ListState, LoadState, UpdateRequest};

#[cfg(test)]
mod tests;
