use dioxus_logger::tracing;

use crate::model::{coffee::CoffeeDto, note::NoteDto, user::UserDto};

/// The authenticated user and the state of authentication requests.
///
/// Every mutation here is applied after the server has answered. The
/// server's entity replaces the local copy by id, and the user's `coffees`
/// are re-derived from their notes after every note change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserDto>,
    /// The initial session probe has completed
    pub fetched: bool,
    /// A login or signup request is pending
    pub loading: bool,
    /// Message from the last failed login or signup
    pub error: Option<String>,
    /// Bumped whenever the signed in user changes
    pub epoch: u64,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether a result requested during `epoch` still belongs to the
    /// signed in user.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.is_authenticated() && self.epoch == epoch
    }

    /// Result of the session probe; `None` means nobody is signed in.
    pub fn apply_session(&mut self, user: Option<UserDto>) {
        self.fetched = true;
        self.epoch += 1;
        if let Some(mut user) = user {
            derive_coffees(&mut user);
            self.user = Some(user);
        } else {
            self.user = None;
        }
    }

    pub fn begin_auth(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_login(&mut self, mut user: UserDto) {
        tracing::info!("Signed in as {}", user.username);

        derive_coffees(&mut user);
        self.user = Some(user);
        self.epoch += 1;
        self.fetched = true;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_auth_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn apply_logout(&mut self) {
        self.user = None;
        self.epoch += 1;
        self.loading = false;
        self.error = None;
    }

    pub fn notes(&self) -> &[NoteDto] {
        self.user.as_ref().map(|user| user.notes.as_slice()).unwrap_or(&[])
    }

    pub fn note(&self, note_id: i32) -> Option<&NoteDto> {
        self.notes().iter().find(|note| note.id == note_id)
    }

    /// Inserts a saved note, replacing the local copy with the same id.
    pub fn upsert_note(&mut self, note: NoteDto) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        match user.notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(existing) => *existing = note,
            None => user.notes.push(note),
        }

        derive_coffees(user);
    }

    /// Removes a deleted note, returning whether it was present.
    pub fn remove_note(&mut self, note_id: i32) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };

        let before = user.notes.len();
        user.notes.retain(|note| note.id != note_id);
        derive_coffees(user);

        user.notes.len() != before
    }

    /// Drops the notes for a deleted coffee, mirroring the server's cascade.
    pub fn remove_coffee_notes(&mut self, coffee_id: i32) {
        if let Some(user) = self.user.as_mut() {
            user.notes.retain(|note| note.coffee_id() != Some(coffee_id));
            derive_coffees(user);
        }
    }
}

/// Rebuilds `user.coffees` from the coffees embedded in the user's notes.
fn derive_coffees(user: &mut UserDto) {
    let mut coffees: Vec<CoffeeDto> = Vec::new();

    for coffee in user.notes.iter().filter_map(|note| note.coffee.as_ref()) {
        if !coffees.iter().any(|existing| existing.id == coffee.id) {
            coffees.push(coffee.clone());
        }
    }

    user.coffees = coffees;
}
