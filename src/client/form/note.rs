use crate::{
    client::form::{FieldRule, FieldSchema, FieldValue, FormErrors, FormSchema, FormState},
    model::{
        coffee::CoffeeDto,
        note::{NoteDto, NotePayloadDto},
    },
};

pub static DEFAULT_RATING: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct NoteForm {
    pub rating: Option<i64>,
    pub comment: String,
    pub coffee_id: Option<i32>,
    /// ID of the note being edited, `None` when creating
    pub editing: Option<i32>,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self {
            rating: Some(DEFAULT_RATING),
            comment: String::new(),
            coffee_id: None,
            editing: None,
        }
    }
}

impl FormSchema for NoteForm {
    const NAME: &'static str = "note";
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema {
            name: "rating",
            rules: &[
                FieldRule::Required("Must provide a rating"),
                FieldRule::Min(1, "Rating must be at least 1"),
                FieldRule::Max(5, "Rating must be at most 5"),
            ],
        },
        FieldSchema {
            name: "comment",
            rules: &[
                FieldRule::Required("Must enter a comment"),
                FieldRule::MaxLength(500, "Comment should be less than 500 characters"),
            ],
        },
        FieldSchema {
            name: "coffee_id",
            rules: &[FieldRule::Required("Must select a coffee")],
        },
    ];

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "rating" => FieldValue::Number(self.rating),
            "comment" => FieldValue::Text(&self.comment),
            _ => FieldValue::Number(self.coffee_id.map(i64::from)),
        }
    }
}

/// A validated note ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSubmission {
    /// Present when updating an existing note (`PATCH`), absent for `POST`
    pub note_id: Option<i32>,
    pub payload: NotePayloadDto,
}

impl NoteForm {
    /// Prefills the form from an existing note for editing.
    pub fn from_note(note: &NoteDto) -> Self {
        Self {
            rating: Some(i64::from(note.rating)),
            comment: note.comment.clone(),
            coffee_id: note.coffee_id(),
            editing: Some(note.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Builds the submission from values that already passed validation.
    ///
    /// Returns `None` if a required field is still missing.
    pub fn submission(&self) -> Option<NoteSubmission> {
        let rating = i32::try_from(self.rating?).ok()?;

        Some(NoteSubmission {
            note_id: self.editing,
            payload: NotePayloadDto {
                rating,
                comment: self.comment.trim().to_string(),
                coffee_id: self.coffee_id?,
            },
        })
    }
}

impl FormState<NoteForm> {
    /// Validates the note, including that the chosen coffee still exists in
    /// the catalog, and marks the form as submitting.
    ///
    /// # Arguments
    /// - `coffees` - Loaded catalog coffees, `None` to skip the existence check
    ///
    /// # Returns
    /// - `Ok(NoteSubmission)` - Values to send
    /// - `Err(FormErrors)` - Validation failed; nothing should be sent
    pub fn begin_note_submit(
        &mut self,
        coffees: Option<&[CoffeeDto]>,
    ) -> Result<NoteSubmission, FormErrors> {
        let values = self.begin_submit_with(|values, errors| {
            if let (Some(coffee_id), Some(coffees)) = (values.coffee_id, coffees) {
                if !coffees.iter().any(|coffee| coffee.id == coffee_id) {
                    errors.insert("coffee_id", "Selected coffee is no longer available");
                }
            }
        })?;

        values.submission().ok_or_else(|| self.errors().clone())
    }
}

/// Human readable label shown next to the rating slider.
pub fn rating_label(rating: i64) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "",
    }
}
