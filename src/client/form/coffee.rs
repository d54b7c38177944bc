use crate::{
    client::form::{FieldRule, FieldSchema, FieldValue, FormSchema},
    model::coffee::NewCoffeeDto,
};

/// New coffee for a cafe; the cafe is chosen by where the form is opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoffeeForm {
    pub name: String,
    pub description: String,
}

impl FormSchema for CoffeeForm {
    const NAME: &'static str = "coffee";
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema {
            name: "name",
            rules: &[
                FieldRule::Required("Must enter coffee's name"),
                FieldRule::MaxLength(30, "Name should be less than 30 characters"),
            ],
        },
        FieldSchema {
            name: "description",
            rules: &[
                FieldRule::Required("Must enter coffee's description"),
                FieldRule::MaxLength(500, "Description should be less than 500 characters"),
            ],
        },
    ];

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            _ => FieldValue::Text(&self.description),
        }
    }
}

impl CoffeeForm {
    pub fn payload(&self, cafe_id: i32) -> NewCoffeeDto {
        NewCoffeeDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            cafe_id,
        }
    }
}
