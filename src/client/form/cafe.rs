use crate::{
    client::form::{FieldRule, FieldSchema, FieldValue, FormSchema},
    model::cafe::NewCafeDto,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CafeForm {
    pub name: String,
    pub location: String,
}

impl FormSchema for CafeForm {
    const NAME: &'static str = "cafe";
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema {
            name: "name",
            rules: &[
                FieldRule::Required("Must enter cafe's name"),
                FieldRule::MaxLength(30, "Name should be less than 30 characters"),
            ],
        },
        FieldSchema {
            name: "location",
            rules: &[FieldRule::Required("Must enter cafe's location")],
        },
    ];

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(&self.name),
            _ => FieldValue::Text(&self.location),
        }
    }
}

impl CafeForm {
    pub fn payload(&self) -> NewCafeDto {
        NewCafeDto {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
        }
    }
}
