pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod router;
pub mod routes;
pub mod service;
pub mod store;
pub mod summary;
pub mod util;

pub use app::App;
