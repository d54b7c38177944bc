use crate::{
    client::{
        api::{ApiClient, Transport},
        error::Error,
        form::note::NoteSubmission,
    },
    model::note::NoteDto,
};

/// Service for the current user's notes.
pub struct NoteService<'a, T: Transport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> NoteService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn get_note(&self, note_id: i32) -> Result<NoteDto, Error> {
        Ok(self.api.get(&format!("/notes/{}", note_id)).await?)
    }

    /// Creates or updates a note.
    ///
    /// # Arguments
    /// - `submission` - Validated note; `PATCH /notes/:id` when it carries an id,
    ///   otherwise `POST /notes`
    ///
    /// # Returns
    /// - `Ok(NoteDto)` - The note as stored by the server, with its coffee embedded
    /// - `Err(Error::ApiError)` - Request failed
    pub async fn save_note(&self, submission: &NoteSubmission) -> Result<NoteDto, Error> {
        let note = match submission.note_id {
            Some(note_id) => {
                self.api
                    .patch(&format!("/notes/{}", note_id), &submission.payload)
                    .await?
            }
            None => self.api.post("/notes", &submission.payload).await?,
        };

        Ok(note)
    }

    pub async fn delete_note(&self, note_id: i32) -> Result<(), Error> {
        Ok(self.api.delete(&format!("/notes/{}", note_id)).await?)
    }
}
