use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Only sent by servers that expose foreign keys, see [`CoffeeDto::cafe_id`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<i32>,
    /// Present when the coffee is serialized outside of its cafe
    #[serde(default)]
    pub cafe: Option<CafeRefDto>,
}

impl CoffeeDto {
    /// ID of the coffee's cafe, from the foreign key or the embedded cafe.
    ///
    /// Coffees nested inside a cafe carry neither until
    /// [`crate::model::cafe::CafeDto::with_cafe_ids`] fills the key in.
    pub fn cafe_id(&self) -> Option<i32> {
        self.cafe_id.or_else(|| self.cafe.as_ref().map(|cafe| cafe.id))
    }
}

/// Cafe as embedded in a coffee, without the cafe's own coffee list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeRefDto {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// Body for `POST /coffees`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoffeeDto {
    pub name: String,
    pub description: String,
    pub cafe_id: i32,
}
