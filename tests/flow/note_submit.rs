//! Note form submission from validation through to the session store.

use coffeebook::client::{
    form::{note::NoteForm, FormState},
    service::{NoteService, SessionService},
    store::session::SessionState,
    summary::summarize_notes,
};
use coffeebook::model::coffee::CoffeeDto;
use coffeebook_test_utils::prelude::*;
use serde_json::json;

use crate::setup::client;

fn catalog_coffee() -> CoffeeDto {
    CoffeeDto {
        id: 9,
        name: "Hair Bender".to_string(),
        description: "Chocolate and citrus".to_string(),
        cafe_id: Some(1),
        cafe: None,
    }
}

/// Tests submitting a valid new note.
///
/// Expected: One POST, the returned note appended to the user's notes, the
/// coffee added to the user's coffees and the form reset
#[tokio::test]
async fn valid_note_is_saved_and_stored() -> Result<(), TestError> {
    let existing = factory::note(1, 2, "Thin", factory::coffee(10, "Holler Mountain", 1));
    let test = TestBuilder::new()
        .with_session_endpoint(Some(factory::user(vec![existing])), 1)
        .with_json_body_endpoint(
            "POST",
            "/notes",
            json!({ "rating": 4, "comment": "Bright and sweet", "coffee_id": 9 }),
            201,
            factory::note(2, 4, "Bright and sweet", factory::coffee(9, "Hair Bender", 1)),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let mut session = SessionState::default();
    session.apply_session(SessionService::new(&api).fetch_session().await.unwrap());

    let mut form = FormState::new(NoteForm::default());
    form.update(|values| {
        values.rating = Some(4);
        values.comment = " Bright and sweet ".to_string();
        values.coffee_id = Some(9);
    });
    let submission = form.begin_note_submit(Some(&[catalog_coffee()])).unwrap();
    assert!(form.is_submitting());

    let result = NoteService::new(&api).save_note(&submission).await;
    form.finish(&result, true);
    session.upsert_note(result.unwrap());

    let note_ids: Vec<i32> = session.notes().iter().map(|note| note.id).collect();
    assert_eq!(note_ids, vec![1, 2]);
    let coffee_ids: Vec<i32> = session
        .user
        .as_ref()
        .unwrap()
        .coffees
        .iter()
        .map(|coffee| coffee.id)
        .collect();
    assert_eq!(coffee_ids, vec![10, 9]);
    assert_eq!(form.values, NoteForm::default());
    assert!(!form.is_submitting());
    assert_eq!(summarize_notes(session.notes()).len(), 2);
    test.assert_mocks();

    Ok(())
}

/// Tests submitting without choosing a coffee.
///
/// Expected: No request is sent and the coffee field shows its error
#[tokio::test]
async fn note_without_coffee_sends_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/notes", 201, json!({}), 0)
        .build()
        .await?;

    let mut form = FormState::new(NoteForm::default());
    form.update(|values| values.comment = "Forgot the coffee".to_string());

    let result = form.begin_note_submit(Some(&[catalog_coffee()]));

    assert!(result.is_err());
    assert_eq!(form.error("coffee_id"), Some("Must select a coffee"));
    assert!(!form.is_submitting());
    test.assert_mocks();

    Ok(())
}

/// Tests a save the server rejects.
///
/// Expected: Local notes unchanged, form keeps its values and shows the message
#[tokio::test]
async fn rejected_note_keeps_form_values() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session_endpoint(Some(factory::user(vec![])), 1)
        .with_json_endpoint("POST", "/notes", 422, factory::error("Coffee does not exist"), 1)
        .build()
        .await?;
    let api = client(&test);

    let mut session = SessionState::default();
    session.apply_session(SessionService::new(&api).fetch_session().await.unwrap());

    let values = NoteForm {
        rating: Some(5),
        comment: "Lovely".to_string(),
        coffee_id: Some(9),
        editing: None,
    };
    let mut form = FormState::new(values.clone());
    let submission = form.begin_note_submit(Some(&[catalog_coffee()])).unwrap();

    let result = NoteService::new(&api).save_note(&submission).await;
    form.finish(&result, true);

    assert!(result.is_err());
    assert!(session.notes().is_empty());
    assert_eq!(form.values, values);
    assert_eq!(form.submit_error(), Some("Coffee does not exist"));
    test.assert_mocks();

    Ok(())
}

/// Tests editing a note in place.
///
/// Expected: The local copy is replaced, not duplicated
#[tokio::test]
async fn edited_note_replaces_local_copy() -> Result<(), TestError> {
    let coffee = factory::coffee(9, "Hair Bender", 1);
    let test = TestBuilder::new()
        .with_session_endpoint(
            Some(factory::user(vec![factory::note(5, 3, "Fine", coffee.clone())])),
            1,
        )
        .with_json_endpoint("PATCH", "/notes/5", 200, factory::note(5, 5, "Better today", coffee), 1)
        .build()
        .await?;
    let api = client(&test);

    let mut session = SessionState::default();
    session.apply_session(SessionService::new(&api).fetch_session().await.unwrap());

    let mut form = FormState::new(NoteForm::from_note(session.note(5).unwrap()));
    form.update(|values| {
        values.rating = Some(5);
        values.comment = "Better today".to_string();
    });
    let submission = form.begin_note_submit(Some(&[catalog_coffee()])).unwrap();
    assert_eq!(submission.note_id, Some(5));

    let result = NoteService::new(&api).save_note(&submission).await;
    form.finish(&result, false);
    session.upsert_note(result.unwrap());

    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.note(5).map(|note| note.rating), Some(5));
    test.assert_mocks();

    Ok(())
}
