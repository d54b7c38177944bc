//! JSON bodies shaped like the Coffeebook API's responses.
//!
//! The API embeds related records instead of sending foreign keys, so notes
//! carry no `coffee_id` and coffees carry no `cafe_id`.

use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_USERNAME, TEST_USER_ID};

/// The signed in test user with the given notes.
///
/// `coffees` is left empty; the client derives it from the notes.
pub fn user(notes: Vec<Value>) -> Value {
    json!({
        "id": TEST_USER_ID,
        "username": TEST_USERNAME,
        "email": TEST_EMAIL,
        "avatar_url": null,
        "is_oauth_user": false,
        "notes": notes,
        "coffees": [],
    })
}

pub fn cafe(cafe_id: i32, name: &str, location: &str) -> Value {
    json!({
        "id": cafe_id,
        "name": name,
        "location": location,
    })
}

/// A cafe listing its coffees, as returned by `GET /cafes`.
///
/// Nested coffees lose their embedded `cafe`, matching the API.
pub fn cafe_with_coffees(cafe_id: i32, name: &str, location: &str, coffees: Vec<Value>) -> Value {
    let coffees: Vec<Value> = coffees
        .into_iter()
        .map(|mut coffee| {
            if let Some(fields) = coffee.as_object_mut() {
                fields.remove("cafe");
            }
            coffee
        })
        .collect();

    json!({
        "id": cafe_id,
        "name": name,
        "location": location,
        "coffees": coffees,
    })
}

/// A coffee with its cafe embedded, as returned by `GET /coffees`.
pub fn coffee(coffee_id: i32, name: &str, cafe_id: i32) -> Value {
    json!({
        "id": coffee_id,
        "name": name,
        "description": format!("Tasting notes for {}", name),
        "cafe": {
            "id": cafe_id,
            "name": format!("Cafe {}", cafe_id),
            "location": "Portland, OR",
        },
    })
}

/// A note owned by the test user, embedding `coffee`.
///
/// # Arguments
/// - `note_id` - ID of the note
/// - `rating` - Rating from 1 to 5
/// - `coffee` - Coffee body from [`coffee`]
pub fn note(note_id: i32, rating: i32, comment: &str, coffee: Value) -> Value {
    json!({
        "id": note_id,
        "rating": rating,
        "comment": comment,
        "user": {
            "id": TEST_USER_ID,
            "username": TEST_USERNAME,
        },
        "coffee": coffee,
    })
}

/// Error body the API sends with non-2xx responses.
pub fn error(message: &str) -> Value {
    json!({ "error": message })
}
