use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{Cafes, EditNote, Home, NewCafe, NewNote, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]

    #[route("/")]
    Home {},

    #[route("/cafes")]
    Cafes {},

    #[route("/cafes/new")]
    NewCafe {},

    #[route("/notes/new")]
    NewNote {},

    #[route("/notes/:id/edit")]
    EditNote { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
