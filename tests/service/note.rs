//! Tests for NoteService against a mock API.

use coffeebook::client::{
    error::{api::ApiError, Error},
    form::note::NoteSubmission,
    service::NoteService,
};
use coffeebook::model::note::NotePayloadDto;
use coffeebook_test_utils::prelude::*;
use serde_json::json;

use crate::setup::client;

fn payload(rating: i32, comment: &str) -> NotePayloadDto {
    NotePayloadDto {
        rating,
        comment: comment.to_string(),
        coffee_id: 9,
    }
}

/// Tests that a submission without an id creates a note.
///
/// Expected: POST /notes, no PATCH
#[tokio::test]
async fn saves_new_note_with_post() -> Result<(), TestError> {
    let coffee = factory::coffee(9, "Hair Bender", 1);
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/notes",
            json!({ "rating": 4, "comment": "Bright", "coffee_id": 9 }),
            201,
            factory::note(3, 4, "Bright", coffee),
            1,
        )
        .with_json_endpoint("PATCH", "/notes/3", 200, json!({}), 0)
        .build()
        .await?;
    let api = client(&test);

    let note = NoteService::new(&api)
        .save_note(&NoteSubmission {
            note_id: None,
            payload: payload(4, "Bright"),
        })
        .await
        .unwrap();

    assert_eq!(note.id, 3);
    assert_eq!(note.coffee.map(|coffee| coffee.id), Some(9));
    test.assert_mocks();

    Ok(())
}

/// Tests that a submission with an id updates that note.
///
/// Expected: PATCH /notes/3 with the new values
#[tokio::test]
async fn saves_existing_note_with_patch() -> Result<(), TestError> {
    let coffee = factory::coffee(9, "Hair Bender", 1);
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "PATCH",
            "/notes/3",
            json!({ "rating": 2, "comment": "Stale" }),
            200,
            factory::note(3, 2, "Stale", coffee),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let note = NoteService::new(&api)
        .save_note(&NoteSubmission {
            note_id: Some(3),
            payload: payload(2, "Stale"),
        })
        .await
        .unwrap();

    assert_eq!(note.rating, 2);
    assert_eq!(note.comment, "Stale");
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a single note for editing.
///
/// Expected: The note with its coffee embedded
#[tokio::test]
async fn fetches_note_by_id() -> Result<(), TestError> {
    let coffee = factory::coffee(9, "Hair Bender", 1);
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/notes/3", 200, factory::note(3, 5, "Great", coffee), 1)
        .build()
        .await?;
    let api = client(&test);

    let note = NoteService::new(&api).get_note(3).await.unwrap();

    assert_eq!(note.id, 3);
    assert_eq!(note.coffee_id(), Some(9));
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a note the user does not own.
///
/// Expected: Err(NotFound) with the server's message
#[tokio::test]
async fn missing_note_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/notes/42", 404, factory::error("Note not found"), 1)
        .build()
        .await?;
    let api = client(&test);

    let result = NoteService::new(&api).get_note(42).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::NotFound(ref message))) if message == "Note not found"
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests deleting a note.
///
/// Expected: Ok on 204
#[tokio::test]
async fn deletes_note() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_empty_endpoint("DELETE", "/notes/3", 204, 1)
        .build()
        .await?;
    let api = client(&test);

    assert!(NoteService::new(&api).delete_note(3).await.is_ok());
    test.assert_mocks();

    Ok(())
}
