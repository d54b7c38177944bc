use crate::{
    client::{
        api::{ApiClient, Transport},
        error::Error,
    },
    model::{
        cafe::{CafeDto, NewCafeDto},
        coffee::{CoffeeDto, NewCoffeeDto},
    },
};

/// Service for cafes and coffees.
pub struct CatalogService<'a, T: Transport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> CatalogService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn fetch_cafes(&self) -> Result<Vec<CafeDto>, Error> {
        Ok(self.api.get("/cafes").await?)
    }

    pub async fn fetch_coffees(&self) -> Result<Vec<CoffeeDto>, Error> {
        Ok(self.api.get("/coffees").await?)
    }

    /// Fetches cafes and coffees together for the startup load.
    ///
    /// # Returns
    /// - `Ok((cafes, coffees))` - Both lists
    /// - `Err(Error::ApiError)` - Either request failed
    pub async fn fetch_catalog(&self) -> Result<(Vec<CafeDto>, Vec<CoffeeDto>), Error> {
        let cafes = self.fetch_cafes().await?;
        let coffees = self.fetch_coffees().await?;

        Ok((cafes, coffees))
    }

    pub async fn create_cafe(&self, cafe: &NewCafeDto) -> Result<CafeDto, Error> {
        Ok(self.api.post("/cafes", cafe).await?)
    }

    pub async fn create_coffee(&self, coffee: &NewCoffeeDto) -> Result<CoffeeDto, Error> {
        Ok(self.api.post("/coffees", coffee).await?)
    }

    /// Deletes a coffee; the server also deletes every note for it.
    pub async fn delete_coffee(&self, coffee_id: i32) -> Result<(), Error> {
        Ok(self.api.delete(&format!("/coffees/{}", coffee_id)).await?)
    }
}
