//! Data transfer objects exchanged with the Coffeebook REST API.
//!
//! Every response body the client consumes has an explicit type here so that
//! shape mismatches surface as decode errors at the request boundary instead
//! of deep inside a component.

pub mod api;
pub mod cafe;
pub mod coffee;
pub mod note;
pub mod user;
