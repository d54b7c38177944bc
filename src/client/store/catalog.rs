use crate::model::{cafe::CafeDto, coffee::CoffeeDto};

/// Cafes and coffees known to the client, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub cafes: Vec<CafeDto>,
    pub coffees: Vec<CoffeeDto>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn apply_catalog(&mut self, cafes: Vec<CafeDto>, coffees: Vec<CoffeeDto>) {
        self.cafes = cafes.into_iter().map(CafeDto::with_cafe_ids).collect();
        self.coffees = coffees;
        self.loaded = true;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.loaded = true;
        self.error = Some(message.into());
    }

    pub fn cafe(&self, cafe_id: i32) -> Option<&CafeDto> {
        self.cafes.iter().find(|cafe| cafe.id == cafe_id)
    }

    /// The coffee list when it was loaded successfully.
    ///
    /// `None` while loading or after a failed load, when a missing coffee
    /// says nothing about whether it exists.
    pub fn known_coffees(&self) -> Option<&[CoffeeDto]> {
        if self.loaded && self.error.is_none() {
            Some(&self.coffees)
        } else {
            None
        }
    }

    pub fn coffee(&self, coffee_id: i32) -> Option<&CoffeeDto> {
        self.coffees.iter().find(|coffee| coffee.id == coffee_id)
    }

    /// Coffees served by a cafe, in catalog order.
    pub fn coffees_for_cafe(&self, cafe_id: i32) -> Vec<&CoffeeDto> {
        self.coffees
            .iter()
            .filter(|coffee| coffee.cafe_id() == Some(cafe_id))
            .collect()
    }

    /// Name of the coffee followed by its cafe, as shown in pickers.
    pub fn coffee_label(&self, coffee: &CoffeeDto) -> String {
        let cafe_name = coffee
            .cafe
            .as_ref()
            .map(|cafe| cafe.name.as_str())
            .or_else(|| {
                coffee
                    .cafe_id()
                    .and_then(|cafe_id| self.cafe(cafe_id))
                    .map(|cafe| cafe.name.as_str())
            });

        match cafe_name {
            Some(cafe_name) => format!("{} - {}", coffee.name, cafe_name),
            None => coffee.name.clone(),
        }
    }

    pub fn upsert_cafe(&mut self, cafe: CafeDto) {
        let cafe = cafe.with_cafe_ids();
        match self.cafes.iter_mut().find(|existing| existing.id == cafe.id) {
            Some(existing) => *existing = cafe,
            None => self.cafes.push(cafe),
        }
    }

    /// Inserts a saved coffee into the flat list and into its cafe.
    pub fn upsert_coffee(&mut self, coffee: CoffeeDto) {
        let cafe_id = coffee.cafe_id();
        if let Some(cafe) = self.cafes.iter_mut().find(|cafe| Some(cafe.id) == cafe_id) {
            let nested = CoffeeDto {
                cafe_id,
                cafe: None,
                ..coffee.clone()
            };
            match cafe.coffees.iter_mut().find(|existing| existing.id == coffee.id) {
                Some(existing) => *existing = nested,
                None => cafe.coffees.push(nested),
            }
        }

        match self.coffees.iter_mut().find(|existing| existing.id == coffee.id) {
            Some(existing) => *existing = coffee,
            None => self.coffees.push(coffee),
        }
    }

    pub fn remove_coffee(&mut self, coffee_id: i32) {
        self.coffees.retain(|coffee| coffee.id != coffee_id);
        for cafe in self.cafes.iter_mut() {
            cafe.coffees.retain(|coffee| coffee.id != coffee_id);
        }
    }
}
