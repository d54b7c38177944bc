use serde::{Deserialize, Serialize};

use crate::model::coffee::CoffeeDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub coffees: Vec<CoffeeDto>,
}

impl CafeDto {
    /// Sets the cafe key on nested coffees, which the API sends without one.
    pub fn with_cafe_ids(mut self) -> Self {
        for coffee in self.coffees.iter_mut() {
            coffee.cafe_id = Some(self.id);
        }
        self
    }
}

/// Body for `POST /cafes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCafeDto {
    pub name: String,
    pub location: String,
}
