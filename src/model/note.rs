use serde::{Deserialize, Serialize};

use crate::model::coffee::CoffeeDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    /// Only sent by servers that expose foreign keys, see [`NoteDto::coffee_id`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_id: Option<i32>,
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub coffee: Option<CoffeeDto>,
}

impl NoteDto {
    /// ID of the note's coffee, from the foreign key or the embedded coffee.
    pub fn coffee_id(&self) -> Option<i32> {
        self.coffee_id
            .or_else(|| self.coffee.as_ref().map(|coffee| coffee.id))
    }
}

/// Body for `POST /notes` and `PATCH /notes/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePayloadDto {
    pub rating: i32,
    pub comment: String,
    pub coffee_id: i32,
}
