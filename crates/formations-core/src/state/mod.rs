//! View state machines
//!
//! Each view owns one of these inside a signal. A user action is split in
//! two: a `prepare_*`/`begin_*` step that validates and returns what to send
//! (or nothing, in which case no request is made), and a `complete_*`/
//! `finish_*` step that applies the response. Neither step performs I/O.
//!
//! - `list`: the list/detail/edit view, scoped to one visit of the page
//! - `create`: the standalone create form

pub mod create;
pub mod list;

pub use create::{Confirmation, CreateError, CreateForm};
pub use list::{EditSession, FetchEpoch, ListState, LoadState, UpdateRequest};
