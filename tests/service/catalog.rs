//! Tests for CatalogService against a mock API.

use coffeebook::client::{
    api::{ApiClient, ReqwestTransport},
    error::{api::ApiError, Error},
    form::{cafe::CafeForm, coffee::CoffeeForm, FormState},
    service::{CatalogService, SessionService},
    store::{catalog::CatalogState, session::SessionState},
};
use coffeebook::model::{cafe::CafeDto, user::UserDto};
use coffeebook_test_utils::prelude::*;
use serde_json::json;

use crate::setup::client;

/// Tests loading cafes and coffees together.
///
/// Expected: Both lists decoded, coffees labelled with their cafe
#[tokio::test]
async fn loads_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_endpoints(
            vec![factory::cafe_with_coffees(
                1,
                "Cafe 1",
                "Portland, OR",
                vec![factory::coffee(9, "Hair Bender", 1)],
            )],
            vec![
                factory::coffee(9, "Hair Bender", 1),
                factory::coffee(10, "Holler Mountain", 1),
            ],
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let (cafes, coffees) = CatalogService::new(&api).fetch_catalog().await.unwrap();

    let mut catalog = CatalogState::default();
    catalog.apply_catalog(cafes, coffees);
    assert!(catalog.loaded);
    assert_eq!(catalog.cafes.len(), 1);
    assert_eq!(catalog.coffees_for_cafe(1).len(), 2);
    assert_eq!(catalog.cafe(1).unwrap().coffees[0].cafe_id(), Some(1));
    let coffee = catalog.coffee(9).unwrap().clone();
    assert_eq!(catalog.coffee_label(&coffee), "Hair Bender - Cafe 1");
    test.assert_mocks();

    Ok(())
}

/// Tests creating a cafe from the form.
///
/// Expected: Trimmed payload sent, returned cafe stored and the form reset
#[tokio::test]
async fn creates_cafe_from_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/cafes",
            json!({ "name": "Heart", "location": "Portland, OR" }),
            201,
            factory::cafe(4, "Heart", "Portland, OR"),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let mut form = FormState::new(CafeForm::default());
    form.update(|values| {
        values.name = "  Heart ".to_string();
        values.location = "Portland, OR".to_string();
    });
    let values = form.begin_submit().unwrap();

    let result = CatalogService::new(&api).create_cafe(&values.payload()).await;
    form.finish(&result, true);

    let mut catalog = CatalogState::default();
    catalog.upsert_cafe(result.unwrap());
    assert_eq!(catalog.cafe(4).map(|cafe| cafe.name.as_str()), Some("Heart"));
    assert_eq!(form.values, CafeForm::default());
    assert!(!form.is_submitting());
    test.assert_mocks();

    Ok(())
}

/// Tests creating a coffee under a cafe.
///
/// Expected: Coffee stored and nested under its cafe
#[tokio::test]
async fn creates_coffee_for_cafe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/coffees",
            json!({ "name": "Hair Bender", "cafe_id": 1 }),
            201,
            factory::coffee(9, "Hair Bender", 1),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let mut form = FormState::new(CoffeeForm {
        name: "Hair Bender".to_string(),
        description: "Chocolate and citrus".to_string(),
    });
    let values = form.begin_submit().unwrap();

    let coffee = CatalogService::new(&api)
        .create_coffee(&values.payload(1))
        .await
        .unwrap();

    let mut catalog = CatalogState::default();
    catalog.apply_catalog(
        vec![CafeDto {
            id: 1,
            name: "Cafe 1".to_string(),
            location: "Portland, OR".to_string(),
            coffees: Vec::new(),
        }],
        Vec::new(),
    );
    catalog.upsert_coffee(coffee);
    assert_eq!(catalog.coffees.len(), 1);
    assert_eq!(catalog.cafe(1).unwrap().coffees.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests deleting a coffee that has notes.
///
/// Expected: Coffee removed from the catalog and its notes from the session
#[tokio::test]
async fn deleting_coffee_removes_its_notes() -> Result<(), TestError> {
    let notes = vec![
        factory::note(1, 4, "Bright", factory::coffee(9, "Hair Bender", 1)),
        factory::note(2, 5, "Sweet", factory::coffee(10, "Holler Mountain", 1)),
    ];
    let test = TestBuilder::new()
        .with_session_endpoint(Some(factory::user(notes)), 1)
        .with_catalog_endpoints(
            vec![factory::cafe(1, "Cafe 1", "Portland, OR")],
            vec![
                factory::coffee(9, "Hair Bender", 1),
                factory::coffee(10, "Holler Mountain", 1),
            ],
            1,
        )
        .with_empty_endpoint("DELETE", "/coffees/9", 204, 1)
        .build()
        .await?;
    let api = client(&test);

    let mut session = SessionState::default();
    session.apply_session(api_session(&api).await);
    let mut catalog = CatalogState::default();
    let (cafes, coffees) = CatalogService::new(&api).fetch_catalog().await.unwrap();
    catalog.apply_catalog(cafes, coffees);

    CatalogService::new(&api).delete_coffee(9).await.unwrap();
    catalog.remove_coffee(9);
    session.remove_coffee_notes(9);

    assert!(catalog.coffee(9).is_none());
    let remaining: Vec<i32> = session.notes().iter().map(|note| note.id).collect();
    assert_eq!(remaining, vec![2]);
    let coffees: Vec<i32> = session
        .user
        .as_ref()
        .unwrap()
        .coffees
        .iter()
        .map(|coffee| coffee.id)
        .collect();
    assert_eq!(coffees, vec![10]);
    test.assert_mocks();

    Ok(())
}

/// Tests a delete the server refuses.
///
/// Expected: Err(NotFound), nothing is removed locally
#[tokio::test]
async fn failed_delete_keeps_coffee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("DELETE", "/coffees/9", 404, factory::error("Coffee not found"), 1)
        .build()
        .await?;
    let api = client(&test);

    let result = CatalogService::new(&api).delete_coffee(9).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::NotFound(ref message))) if message == "Coffee not found"
    ));
    test.assert_mocks();

    Ok(())
}

async fn api_session(api: &ApiClient<ReqwestTransport>) -> Option<UserDto> {
    SessionService::new(api).fetch_session().await.unwrap()
}
