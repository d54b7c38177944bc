//! Coffeebook web client.
//!
//! The `client` module holds the Dioxus application and its REST client,
//! `model` the DTOs exchanged with the Coffeebook API.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
